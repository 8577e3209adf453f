//! JSON REST API handler modules and route assembly.

#[allow(clippy::missing_errors_doc)]
pub mod items;
#[allow(clippy::missing_errors_doc)]
pub mod stores;
#[allow(clippy::missing_errors_doc)]
pub mod tags;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};

use crate::state::AppState;

/// Confirmation body for delete endpoints.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Build the resource sub-router. Every route here sits behind the
/// bearer-token gate applied in [`crate::router::build`].
pub fn routes<SR, TR, IR>() -> Router<AppState<SR, TR, IR>>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        // Stores
        .route(
            "/store",
            get(stores::list::<SR, TR, IR>).post(stores::create::<SR, TR, IR>),
        )
        .route(
            "/store/{id}",
            get(stores::get::<SR, TR, IR>)
                .put(stores::upsert::<SR, TR, IR>)
                .delete(stores::delete::<SR, TR, IR>),
        )
        // Tags
        .route(
            "/store/{store_id}/tag",
            get(tags::list_for_store::<SR, TR, IR>).post(tags::create::<SR, TR, IR>),
        )
        .route("/tag", get(tags::list::<SR, TR, IR>))
        .route(
            "/tag/{id}",
            get(tags::get::<SR, TR, IR>).delete(tags::delete::<SR, TR, IR>),
        )
        // Tag↔item links
        .route(
            "/item/{item_id}/tag/{tag_id}",
            post(tags::link::<SR, TR, IR>).delete(tags::unlink::<SR, TR, IR>),
        )
        // Items
        .route(
            "/item",
            get(items::list::<SR, TR, IR>).post(items::create::<SR, TR, IR>),
        )
        .route("/item/{id}", get(items::get::<SR, TR, IR>))
}
