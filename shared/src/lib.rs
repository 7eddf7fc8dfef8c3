//! Shared types for the storefront catalog
//!
//! Wire types used in API communication between the catalog service and
//! the client engine. Pure data: serde derives only, no transport concerns.

pub mod models;

// Re-exports
pub use models::product::{Product, ProductDraft, ProductField, ProductId};
