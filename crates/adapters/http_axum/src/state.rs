//! Shared application state for axum handlers.

use std::sync::Arc;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};
use tagstore_app::services::item_service::ItemService;
use tagstore_app::services::store_service::StoreService;
use tagstore_app::services::tag_service::TagService;

use crate::auth::AuthKeys;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. `Clone`
/// is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, TR, IR> {
    /// Store CRUD service.
    pub store_service: Arc<StoreService<SR>>,
    /// Tag CRUD + link service.
    pub tag_service: Arc<TagService<TR, SR, IR>>,
    /// Item service.
    pub item_service: Arc<ItemService<IR>>,
    /// Keys for validating bearer tokens.
    pub auth: Arc<AuthKeys>,
}

impl<SR, TR, IR> Clone for AppState<SR, TR, IR> {
    fn clone(&self) -> Self {
        Self {
            store_service: Arc::clone(&self.store_service),
            tag_service: Arc::clone(&self.tag_service),
            item_service: Arc::clone(&self.item_service),
            auth: Arc::clone(&self.auth),
        }
    }
}

impl<SR, TR, IR> AppState<SR, TR, IR>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        store_service: StoreService<SR>,
        tag_service: TagService<TR, SR, IR>,
        item_service: ItemService<IR>,
        auth: AuthKeys,
    ) -> Self {
        Self {
            store_service: Arc::new(store_service),
            tag_service: Arc::new(tag_service),
            item_service: Arc::new(item_service),
            auth: Arc::new(auth),
        }
    }
}
