//! Tag service — use-cases for managing tags and their item links.

use tagstore_domain::error::{NotFoundError, TagstoreError};
use tagstore_domain::id::{ItemId, StoreId, TagId};
use tagstore_domain::item::Item;
use tagstore_domain::link::TagItemLink;
use tagstore_domain::store::validate_name;
use tagstore_domain::tag::Tag;

use crate::ports::{ItemRepository, StoreRepository, TagRepository};

/// Application service for tag CRUD and the tag↔item association.
///
/// Needs the store repository for existence checks when listing or
/// creating tags under a store, and the item repository for existence
/// checks when linking and unlinking.
pub struct TagService<TR, SR, IR> {
    tag_repo: TR,
    store_repo: SR,
    item_repo: IR,
}

impl<TR, SR, IR> TagService<TR, SR, IR>
where
    TR: TagRepository,
    SR: StoreRepository,
    IR: ItemRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(tag_repo: TR, store_repo: SR, item_repo: IR) -> Self {
        Self {
            tag_repo,
            store_repo,
            item_repo,
        }
    }

    /// List the tags owned by a store.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when the store does not exist,
    /// or a storage error from the repositories.
    pub async fn list_tags_for_store(
        &self,
        store_id: StoreId,
    ) -> Result<Vec<Tag>, TagstoreError> {
        self.require_store(store_id).await?;
        self.tag_repo.find_by_store(store_id).await
    }

    /// Create a tag under a store.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::Validation`] when `name` is empty,
    /// [`TagstoreError::NotFound`] when the store does not exist,
    /// [`TagstoreError::Conflict`] when the store already owns a tag with
    /// that name, or a storage error from the repositories.
    pub async fn create_tag(&self, store_id: StoreId, name: String) -> Result<Tag, TagstoreError> {
        validate_name(&name)?;
        self.require_store(store_id).await?;
        self.tag_repo.create(store_id, name).await
    }

    /// Look up a tag by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when no tag with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_tag(&self, id: TagId) -> Result<Tag, TagstoreError> {
        self.tag_repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Tag",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a tag, provided no item is linked to it.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when the tag does not exist,
    /// [`TagstoreError::Conflict`] when one or more items are still
    /// linked, or a storage error from the repository.
    pub async fn delete_tag(&self, id: TagId) -> Result<(), TagstoreError> {
        self.get_tag(id).await?;
        self.tag_repo.delete(id).await
    }

    /// List all tags across all stores.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_all_tags(&self) -> Result<Vec<Tag>, TagstoreError> {
        self.tag_repo.get_all().await
    }

    /// Link a tag to an item. Not idempotent: linking an already-linked
    /// pair is a conflict.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when the item or the tag does
    /// not exist, [`TagstoreError::Conflict`] when the pair is already
    /// linked, or a storage error from the repositories.
    pub async fn link(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> Result<TagItemLink, TagstoreError> {
        let item = self.require_item(item_id).await?;
        let tag = self.get_tag(tag_id).await?;

        self.tag_repo.link(item_id, tag_id).await?;

        Ok(TagItemLink {
            message: "Tag linked to item.".to_string(),
            item,
            tag,
        })
    }

    /// Remove the link between a tag and an item.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when the item or the tag does
    /// not exist, [`TagstoreError::Conflict`] when the pair is not
    /// currently linked, or a storage error from the repositories.
    pub async fn unlink(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> Result<TagItemLink, TagstoreError> {
        let item = self.require_item(item_id).await?;
        let tag = self.get_tag(tag_id).await?;

        self.tag_repo.unlink(item_id, tag_id).await?;

        Ok(TagItemLink {
            message: "Tag unlinked from item.".to_string(),
            item,
            tag,
        })
    }

    async fn require_store(&self, id: StoreId) -> Result<(), TagstoreError> {
        self.store_repo.get_by_id(id).await?.map(|_| ()).ok_or_else(|| {
            NotFoundError {
                entity: "Store",
                id: id.to_string(),
            }
            .into()
        })
    }

    async fn require_item(&self, id: ItemId) -> Result<Item, TagstoreError> {
        self.item_repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Item",
                id: id.to_string(),
            }
            .into()
        })
    }
}
