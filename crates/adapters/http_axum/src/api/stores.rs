//! JSON REST handlers for stores.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};
use tagstore_domain::id::StoreId;
use tagstore_domain::store::Store;

use crate::api::MessageBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or renaming a store.
#[derive(Deserialize)]
pub struct StoreRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Store>>),
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
    Ok(Json<Store>),
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
    Created(Json<Store>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the upsert endpoint.
pub enum UpsertResponse {
    Ok(Json<Store>),
}

impl IntoResponse for UpsertResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

/// `GET /store`
pub async fn list<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let stores = state.store_service.list_stores().await?;
    Ok(ListResponse::Ok(Json(stores)))
}

/// `GET /store/{id}`
pub async fn get<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let store = state.store_service.get_store(StoreId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(store)))
}

/// `POST /store`
pub async fn create<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Json(req): Json<StoreRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let created = state.store_service.create_store(req.name).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /store/{id}` — create-or-rename keyed by the path id.
pub async fn upsert<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
    Json(req): Json<StoreRequest>,
) -> Result<UpsertResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let store = state
        .store_service
        .upsert_store(StoreId::from_i64(id), req.name)
        .await?;
    Ok(UpsertResponse::Ok(Json(store)))
}

/// `DELETE /store/{id}`
pub async fn delete<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    state
        .store_service
        .delete_store(StoreId::from_i64(id))
        .await?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: "Store deleted.",
    })))
}
