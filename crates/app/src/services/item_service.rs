//! Item service — use-cases for managing items.
//!
//! Items exist so tags have something to link to; the service only
//! covers creation and lookup.

use tagstore_domain::error::{NotFoundError, TagstoreError};
use tagstore_domain::id::ItemId;
use tagstore_domain::item::Item;
use tagstore_domain::store::validate_name;

use crate::ports::ItemRepository;

/// Application service for item operations.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new item with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::Validation`] when `name` is empty, or a
    /// storage error propagated from the repository.
    pub async fn create_item(&self, name: String) -> Result<Item, TagstoreError> {
        validate_name(&name)?;
        self.repo.create(name).await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_item(&self, id: ItemId) -> Result<Item, TagstoreError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Item",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all items.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<Item>, TagstoreError> {
        self.repo.get_all().await
    }
}
