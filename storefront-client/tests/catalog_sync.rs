// storefront-client/tests/catalog_sync.rs
// CRUD loop against a mock HTTP server

use mockito::{Matcher, Server, ServerGuard};
use storefront_client::{
    CatalogStore, ClientConfig, ClientError, FormMode, ProductField, ProductForm,
};

fn store_for(server: &ServerGuard) -> CatalogStore {
    CatalogStore::new(&ClientConfig::new(server.url()))
}

#[tokio::test]
async fn load_replaces_catalog_with_server_order() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"A","price":"10"},{"id":2,"title":"B","price":"20"}]"#)
        .create_async()
        .await;

    let mut store = store_for(&server);
    assert!(!store.is_loading());

    store.load().await;

    assert!(!store.is_loading());
    let titles: Vec<&str> = store.products().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["A", "B"]);
    assert_eq!(store.get(2).unwrap().price, "20");
}

#[tokio::test]
async fn load_rejection_leaves_catalog_empty_and_flag_clear() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let mut store = store_for(&server);
    store.load().await;

    assert!(store.is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn load_transport_failure_is_swallowed() {
    // Nothing listens here; the connection is refused.
    let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
    let mut store = CatalogStore::new(&config);

    store.load().await;

    assert!(store.is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn submit_in_create_mode_posts_draft_and_appends_server_record() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"A","price":"5"}]"#)
        .create_async()
        .await;
    let post = server
        .mock("POST", "/api/product")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "title": "X",
            "price": "10",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"title":"X","price":"10"}"#)
        .create_async()
        .await;

    let mut store = store_for(&server);
    store.load().await;
    let mut form = ProductForm::new();
    form.set_field(ProductField::Title, "X");
    form.set_field(ProductField::Price, "10");

    let created = form.submit(&mut store).await.unwrap();

    post.assert_async().await;
    assert_eq!(created.id, 7);
    assert_eq!(store.len(), 2);
    assert_eq!(store.products()[0].title, "A");
    assert_eq!(store.products()[1].id, 7);
    assert!(form.draft().is_empty());
    assert_eq!(form.mode(), FormMode::Create);
}

#[tokio::test]
async fn edit_flow_puts_draft_and_replaces_entry_in_place() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"A","price":"5"},{"id":2,"title":"B","price":"6"}]"#)
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/api/product/1")
        .match_body(Matcher::PartialJson(serde_json::json!({"title": "A2"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"title":"A2","price":"5"}"#)
        .create_async()
        .await;

    let mut store = store_for(&server);
    store.load().await;
    let mut form = ProductForm::new();

    let target = store.get(1).unwrap().clone();
    form.begin_edit(&target);
    assert_eq!(form.mode(), FormMode::Edit(1));
    assert_eq!(form.draft().title, "A");

    form.set_field(ProductField::Title, "A2");
    let updated = form.submit(&mut store).await.unwrap();

    put.assert_async().await;
    assert_eq!(updated.title, "A2");
    assert_eq!(store.len(), 2);
    assert_eq!(store.products()[0].title, "A2");
    assert_eq!(store.products()[1].title, "B");
    assert_eq!(form.mode(), FormMode::Create);
}

#[tokio::test]
async fn update_rejection_preserves_draft_mode_and_catalog() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"A","price":"5"}]"#)
        .create_async()
        .await;
    let _put = server
        .mock("PUT", "/api/product/1")
        .with_status(404)
        .with_body("product 1 not found")
        .create_async()
        .await;

    let mut store = store_for(&server);
    store.load().await;
    let mut form = ProductForm::new();

    let target = store.get(1).unwrap().clone();
    form.begin_edit(&target);
    form.set_field(ProductField::Title, "A2");

    let err = form.submit(&mut store).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(form.mode(), FormMode::Edit(1));
    assert_eq!(form.draft().title, "A2");
    assert_eq!(store.products()[0].title, "A");
}

#[tokio::test]
async fn delete_sends_request_and_removes_entry_by_id() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/api/products")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"A","price":"5"},{"id":2,"title":"B","price":"6"}]"#)
        .create_async()
        .await;
    let del = server
        .mock("DELETE", "/api/product/1")
        .with_status(200)
        .create_async()
        .await;

    let mut store = store_for(&server);
    store.load().await;

    store.delete(1).await.unwrap();

    del.assert_async().await;
    assert_eq!(store.len(), 1);
    assert_eq!(store.products()[0].id, 2);
}

#[tokio::test]
async fn rejection_statuses_map_to_typed_errors() {
    let mut form = ProductForm::new();
    form.set_field(ProductField::Title, "X");
    form.set_field(ProductField::Price, "1");

    for (status, check) in [
        (400, (|e: &ClientError| matches!(e, ClientError::Validation(_))) as fn(&ClientError) -> bool),
        (404, |e| matches!(e, ClientError::NotFound(_))),
        (500, |e| matches!(e, ClientError::Internal(_))),
    ] {
        let mut server = Server::new_async().await;
        let _post = server
            .mock("POST", "/api/product")
            .with_status(status)
            .with_body("rejected")
            .create_async()
            .await;

        let mut store = store_for(&server);
        let err = form.submit(&mut store).await.unwrap_err();

        assert!(check(&err), "status {} mapped to {:?}", status, err);
        assert!(store.is_empty());
        // The draft survives for the next attempt.
        assert_eq!(form.draft().title, "X");
    }
}

#[tokio::test]
async fn transport_failure_maps_to_http_error() {
    let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
    let mut store = CatalogStore::new(&config);
    let mut form = ProductForm::new();
    form.set_field(ProductField::Title, "X");
    form.set_field(ProductField::Price, "1");

    let err = form.submit(&mut store).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert!(store.is_empty());
    assert_eq!(form.draft().title, "X");
}

#[tokio::test]
async fn health_probe_reports_service_state() {
    let mut server = Server::new_async().await;
    let _health = server
        .mock("GET", "/health")
        .with_status(200)
        .create_async()
        .await;

    let reachable = ClientConfig::new(server.url()).build_http_client();
    assert!(reachable.health().await);

    let unreachable = ClientConfig::new("http://127.0.0.1:9").build_http_client();
    assert!(!unreachable.health().await);
}
