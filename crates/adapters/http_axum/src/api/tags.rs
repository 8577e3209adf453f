//! JSON REST handlers for tags and tag↔item links.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};
use tagstore_domain::id::{ItemId, StoreId, TagId};
use tagstore_domain::link::TagItemLink;
use tagstore_domain::tag::Tag;

use crate::api::MessageBody;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a tag.
#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Tag>>),
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
    Ok(Json<Tag>),
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
    Created(Json<Tag>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
///
/// Deletion is conditional on the tag having no linked items, so success
/// is reported as 202 rather than a plain 200.
pub enum DeleteResponse {
    Accepted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(json) => (StatusCode::ACCEPTED, json).into_response(),
        }
    }
}

/// Possible responses from the link and unlink endpoints.
pub enum LinkResponse {
    Ok(Json<TagItemLink>),
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /store/{store_id}/tag`
pub async fn list_for_store<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(store_id): Path<i64>,
) -> Result<ListResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let tags = state
        .tag_service
        .list_tags_for_store(StoreId::from_i64(store_id))
        .await?;
    Ok(ListResponse::Ok(Json(tags)))
}

/// `POST /store/{store_id}/tag`
pub async fn create<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(store_id): Path<i64>,
    Json(req): Json<CreateTagRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let tag = state
        .tag_service
        .create_tag(StoreId::from_i64(store_id), req.name)
        .await?;
    Ok(CreateResponse::Created(Json(tag)))
}

/// `GET /tag`
pub async fn list<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let tags = state.tag_service.list_all_tags().await?;
    Ok(ListResponse::Ok(Json(tags)))
}

/// `GET /tag/{id}`
pub async fn get<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let tag = state.tag_service.get_tag(TagId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(tag)))
}

/// `DELETE /tag/{id}`
pub async fn delete<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    state.tag_service.delete_tag(TagId::from_i64(id)).await?;
    Ok(DeleteResponse::Accepted(Json(MessageBody {
        message: "Tag deleted.",
    })))
}

/// `POST /item/{item_id}/tag/{tag_id}`
pub async fn link<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path((item_id, tag_id)): Path<(i64, i64)>,
) -> Result<LinkResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let link = state
        .tag_service
        .link(ItemId::from_i64(item_id), TagId::from_i64(tag_id))
        .await?;
    Ok(LinkResponse::Ok(Json(link)))
}

/// `DELETE /item/{item_id}/tag/{tag_id}`
pub async fn unlink<SR, TR, IR>(
    State(state): State<AppState<SR, TR, IR>>,
    Path((item_id, tag_id)): Path<(i64, i64)>,
) -> Result<LinkResponse, ApiError>
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let link = state
        .tag_service
        .unlink(ItemId::from_i64(item_id), TagId::from_i64(tag_id))
        .await?;
    Ok(LinkResponse::Ok(Json(link)))
}
