//! Catalog store
//!
//! Single source of truth for the product collection. Every mutation
//! goes through the remote CRUD contract and applies locally only after
//! the server confirms it. A failed call leaves the catalog exactly as
//! it was.

use shared::{Product, ProductDraft, ProductId};

use crate::api::ProductApi;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;

/// Owns the product collection and mediates all mutations through the
/// remote CRUD API
#[derive(Debug)]
pub struct CatalogStore<A: ProductApi = HttpClient> {
    api: A,
    products: Vec<Product>,
    loading: bool,
}

impl CatalogStore<HttpClient> {
    /// Create a store backed by the network client
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_api(config.build_http_client())
    }
}

impl<A: ProductApi> CatalogStore<A> {
    /// Create a store over any implementation of the remote contract
    pub fn with_api(api: A) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: false,
        }
    }

    /// Current catalog, in server order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// True while a [`load`](Self::load) is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fetch the full catalog, replacing the local collection
    ///
    /// On failure the collection keeps its previous value; the loading
    /// flag is cleared on every path so the UI is never stuck spinning.
    /// No automatic retry.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.fetch_products().await {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                self.products = products;
            }
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
            }
        }
        self.loading = false;
    }

    /// Create a product from a validated draft
    ///
    /// The server-returned record, with its assigned id, is appended to
    /// the end of the catalog; previously loaded entries are untouched.
    pub async fn create(&mut self, draft: &ProductDraft) -> ClientResult<Product> {
        match self.api.create_product(draft).await {
            Ok(product) => {
                tracing::info!(id = product.id, "Created product");
                self.products.push(product.clone());
                Ok(product)
            }
            Err(e) => {
                tracing::error!("Error adding product: {}", e);
                Err(e)
            }
        }
    }

    /// Update product `id` with the draft's fields
    ///
    /// The server-returned record replaces the matching entry in place;
    /// every other entry keeps its position.
    pub async fn update(&mut self, id: ProductId, draft: &ProductDraft) -> ClientResult<Product> {
        match self.api.update_product(id, draft).await {
            Ok(product) => {
                tracing::info!(id, "Updated product");
                match self.products.iter_mut().find(|p| p.id == id) {
                    Some(entry) => *entry = product.clone(),
                    // Confirmed remotely but gone locally (removed by a
                    // concurrent delete); replace-in-place never turns
                    // into an append.
                    None => tracing::warn!(id, "Updated product is not in the local catalog"),
                }
                Ok(product)
            }
            Err(e) => {
                tracing::error!("Error updating product: {}", e);
                Err(e)
            }
        }
    }

    /// Delete product `id`
    ///
    /// Removal is keyed by id, not position, since concurrent mutations
    /// can shift positions. An id already absent locally is a no-op.
    pub async fn delete(&mut self, id: ProductId) -> ClientResult<()> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.products.retain(|p| p.id != id);
                tracing::info!(id, "Deleted product");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error deleting product: {}", e);
                Err(e)
            }
        }
    }
}
