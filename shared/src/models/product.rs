//! Product Model

use serde::{Deserialize, Serialize};

/// Server-assigned product key
pub type ProductId = i64;

/// Product entity
///
/// Every non-id field travels as text on the wire; `price` stays text
/// until the operator submits it. `image`, `description` and `vendor`
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub vendor: String,
}

/// Staging copy of a product's editable fields
///
/// Composed in the form before submission and serialized as the body of
/// both create and update requests. An empty draft is the idle state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub image: String,
    pub description: String,
    pub price: String,
    pub vendor: String,
}

impl ProductDraft {
    /// Update a single field, leaving all others untouched
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Title => self.title = value,
            ProductField::Image => self.image = value,
            ProductField::Description => self.description = value,
            ProductField::Price => self.price = value,
            ProductField::Vendor => self.vendor = value,
        }
    }

    /// Read a single field
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Image => &self.image,
            ProductField::Description => &self.description,
            ProductField::Price => &self.price,
            ProductField::Vendor => &self.vendor,
        }
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&Product> for ProductDraft {
    /// Populate a draft wholesale from an existing product
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            image: product.image.clone(),
            description: product.description.clone(),
            price: product.price.clone(),
            vendor: product.vendor.clone(),
        }
    }
}

/// Editable product field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Title,
    Image,
    Description,
    Price,
    Vendor,
}
