//! Remote catalog contract
//!
//! [`ProductApi`] is the seam between the engine and the remote CRUD
//! service. The network implementation lives in [`crate::http`]; tests
//! substitute an in-memory implementation.

use async_trait::async_trait;
use shared::{Product, ProductDraft, ProductId};

use crate::error::ClientResult;

/// Remote CRUD contract for the product catalog
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the full catalog, in server order
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;

    /// Create a product from draft fields; the server assigns the id
    async fn create_product(&self, draft: &ProductDraft) -> ClientResult<Product>;

    /// Replace the fields of product `id` with the draft's
    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> ClientResult<Product>;

    /// Delete product `id`; any response body is ignored
    async fn delete_product(&self, id: ProductId) -> ClientResult<()>;
}
