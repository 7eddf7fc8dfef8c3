//! Product form
//!
//! Owns the draft being composed and the create/edit mode state machine.
//! One form serves both modes: an empty draft in create mode, a draft
//! pre-populated from an existing product while editing.

use shared::{Product, ProductDraft, ProductField, ProductId};

use crate::api::ProductApi;
use crate::catalog::CatalogStore;
use crate::error::{ClientError, ClientResult};

/// Form mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Composing a new product
    Create,
    /// Editing the product with this id
    Edit(ProductId),
}

/// Dual-purpose product form: create and edit share one draft
#[derive(Debug, Default)]
pub struct ProductForm {
    draft: ProductDraft,
    /// Id of the product being edited; `None` means create mode. An id
    /// rather than a catalog entry, so a concurrent delete of the
    /// product cannot corrupt the draft.
    edit_target: Option<ProductId>,
}

impl ProductForm {
    /// Create an empty form in create mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    pub fn mode(&self) -> FormMode {
        match self.edit_target {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    /// True when the form is editing an existing product
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Draft being composed
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Switch to edit mode for `product`, overwriting the draft
    /// wholesale with its current field values
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = ProductDraft::from(product);
        self.edit_target = Some(product.id);
    }

    /// Update a single draft field, preserving all others
    ///
    /// Legal in either mode; validation is deferred to submit.
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Discard the draft and return to create mode
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.edit_target = None;
    }

    /// Submit the draft: update when editing, create otherwise
    ///
    /// Success clears the draft and returns the form to create mode.
    /// Any failure, validation or remote, leaves draft and mode
    /// untouched so the operator can retry without retyping.
    pub async fn submit<A: ProductApi>(
        &mut self,
        store: &mut CatalogStore<A>,
    ) -> ClientResult<Product> {
        self.validate()?;

        let product = match self.edit_target {
            Some(id) => store.update(id, &self.draft).await?,
            None => store.create(&self.draft).await?,
        };

        self.draft.clear();
        self.edit_target = None;
        Ok(product)
    }

    /// Required-field checks the store relies on being done before a
    /// create or update is issued
    fn validate(&self) -> ClientResult<()> {
        if self.draft.title.trim().is_empty() {
            return Err(ClientError::Validation("title must not be empty".to_string()));
        }
        let price = self.draft.price.trim();
        if price.is_empty() {
            return Err(ClientError::Validation("price must not be empty".to_string()));
        }
        if price.parse::<f64>().is_err() {
            return Err(ClientError::Validation(format!(
                "price is not a number: {}",
                self.draft.price
            )));
        }
        Ok(())
    }
}
