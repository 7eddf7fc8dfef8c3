// storefront-client/examples/catalog_admin.rs
// End-to-end catalog round trip against a running service

use storefront_client::{CatalogStore, ClientConfig, ProductField, ProductForm};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::var("STOREFRONT_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    let config = ClientConfig::new(&base_url).with_timeout(10);
    let http = config.build_http_client();
    if !http.health().await {
        tracing::warn!("Service at {} did not answer the health probe", base_url);
    }

    let mut store = CatalogStore::with_api(http);
    let mut form = ProductForm::new();

    store.load().await;
    tracing::info!("Catalog holds {} products", store.len());

    // Create
    form.set_field(ProductField::Title, "Espresso Cup");
    form.set_field(ProductField::Price, "12.50");
    form.set_field(ProductField::Vendor, "Acme Ceramics");
    let created = form.submit(&mut store).await?;
    tracing::info!("Created product {} ({})", created.id, created.title);

    // Edit
    form.begin_edit(&created);
    form.set_field(ProductField::Price, "13.00");
    let updated = form.submit(&mut store).await?;
    tracing::info!("New price for {}: {}", updated.title, updated.price);

    // Delete
    store.delete(updated.id).await?;
    tracing::info!("Catalog now holds {} products", store.len());

    Ok(())
}
