//! JSON REST handlers for items.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};
use tagstore_domain::id::ItemId;
use tagstore_domain::item::Item;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an item.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Item>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /item`
pub async fn list<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let items = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /item/{id}`
pub async fn get<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let item = state.item_service.get_item(ItemId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(item)))
}

/// `POST /item`
pub async fn create<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let created = state.item_service.create_item(req.name).await?;
    Ok(CreateResponse::Created(Json(created)))
}
