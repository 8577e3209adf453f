//! Storage ports — repository traits for persistence.
//!
//! Uniqueness and membership invariants (store names, `(store_id, name)`
//! tag names, link pairs) are enforced by the storage implementation at
//! commit time, not pre-checked here. Implementations translate the
//! violated constraint into the matching
//! [`ConflictError`](tagstore_domain::error::ConflictError) variant.

use std::future::Future;

use tagstore_domain::error::TagstoreError;
use tagstore_domain::id::{ItemId, StoreId, TagId};
use tagstore_domain::item::Item;
use tagstore_domain::store::Store;
use tagstore_domain::tag::Tag;

/// Persistence for [`Store`] entities.
pub trait StoreRepository {
    /// Insert a store with a generated id.
    ///
    /// Fails with `Conflict(DuplicateStoreName)` when `name` is taken.
    fn create(&self, name: String) -> impl Future<Output = Result<Store, TagstoreError>> + Send;

    fn get_by_id(
        &self,
        id: StoreId,
    ) -> impl Future<Output = Result<Option<Store>, TagstoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Store>, TagstoreError>> + Send;

    /// Create-or-rename keyed by the caller-supplied id, atomically.
    fn upsert(
        &self,
        id: StoreId,
        name: String,
    ) -> impl Future<Output = Result<Store, TagstoreError>> + Send;

    /// Delete a store.
    ///
    /// Fails with `Conflict(StoreHasTags)` when tags still reference it.
    fn delete(&self, id: StoreId) -> impl Future<Output = Result<(), TagstoreError>> + Send;
}

/// Persistence for [`Tag`] entities and the tag↔item association.
pub trait TagRepository {
    /// Insert a tag with a generated id.
    ///
    /// Fails with `Conflict(DuplicateTagName)` when the `(store_id, name)`
    /// pair is taken.
    fn create(
        &self,
        store_id: StoreId,
        name: String,
    ) -> impl Future<Output = Result<Tag, TagstoreError>> + Send;

    fn get_by_id(
        &self,
        id: TagId,
    ) -> impl Future<Output = Result<Option<Tag>, TagstoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, TagstoreError>> + Send;

    fn find_by_store(
        &self,
        store_id: StoreId,
    ) -> impl Future<Output = Result<Vec<Tag>, TagstoreError>> + Send;

    /// Delete a tag.
    ///
    /// Fails with `Conflict(TagHasItems)` when the tag is still linked to
    /// one or more items.
    fn delete(&self, id: TagId) -> impl Future<Output = Result<(), TagstoreError>> + Send;

    /// Add a link between `item_id` and `tag_id`.
    ///
    /// Fails with `Conflict(AlreadyLinked)` when the pair is present.
    fn link(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> impl Future<Output = Result<(), TagstoreError>> + Send;

    /// Remove the link between `item_id` and `tag_id`.
    ///
    /// Fails with `Conflict(NotLinked)` when the pair is absent.
    fn unlink(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> impl Future<Output = Result<(), TagstoreError>> + Send;
}

/// Persistence for [`Item`] entities.
pub trait ItemRepository {
    fn create(&self, name: String) -> impl Future<Output = Result<Item, TagstoreError>> + Send;

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, TagstoreError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, TagstoreError>> + Send;
}
