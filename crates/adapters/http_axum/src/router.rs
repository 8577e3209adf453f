//! Axum router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use tagstore_app::ports::{ItemRepository, StoreRepository, TagRepository};

use crate::auth;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The resource routes sit behind the bearer-token middleware; only
/// `/health` is open. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, TR, IR>(state: AppState<SR, TR, IR>) -> Router
where
    SR: StoreRepository + Send + Sync + 'static,
    TR: TagRepository + Send + Sync + 'static,
    IR: ItemRepository + Send + Sync + 'static,
{
    let gated = crate::api::routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_auth::<SR, TR, IR>,
    ));

    Router::new()
        .route("/health", get(health_check))
        .merge(gated)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthKeys, Claims};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use tagstore_app::services::item_service::ItemService;
    use tagstore_app::services::store_service::StoreService;
    use tagstore_app::services::tag_service::TagService;
    use tagstore_domain::error::TagstoreError;
    use tagstore_domain::id::{ItemId, StoreId, TagId};
    use tagstore_domain::item::Item;
    use tagstore_domain::store::Store;
    use tagstore_domain::tag::Tag;
    use tower::ServiceExt;

    const SECRET: &str = "router-test-secret";

    struct StubStoreRepo;
    struct StubTagRepo;
    struct StubItemRepo;

    impl StoreRepository for StubStoreRepo {
        async fn create(&self, name: String) -> Result<Store, TagstoreError> {
            Ok(Store {
                id: StoreId::from_i64(1),
                name,
            })
        }
        async fn get_by_id(&self, _id: StoreId) -> Result<Option<Store>, TagstoreError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Store>, TagstoreError> {
            Ok(vec![])
        }
        async fn upsert(&self, id: StoreId, name: String) -> Result<Store, TagstoreError> {
            Ok(Store { id, name })
        }
        async fn delete(&self, _id: StoreId) -> Result<(), TagstoreError> {
            Ok(())
        }
    }

    impl TagRepository for StubTagRepo {
        async fn create(&self, store_id: StoreId, name: String) -> Result<Tag, TagstoreError> {
            Ok(Tag {
                id: TagId::from_i64(1),
                store_id,
                name,
            })
        }
        async fn get_by_id(&self, _id: TagId) -> Result<Option<Tag>, TagstoreError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Tag>, TagstoreError> {
            Ok(vec![])
        }
        async fn find_by_store(&self, _store_id: StoreId) -> Result<Vec<Tag>, TagstoreError> {
            Ok(vec![])
        }
        async fn delete(&self, _id: TagId) -> Result<(), TagstoreError> {
            Ok(())
        }
        async fn link(&self, _item_id: ItemId, _tag_id: TagId) -> Result<(), TagstoreError> {
            Ok(())
        }
        async fn unlink(&self, _item_id: ItemId, _tag_id: TagId) -> Result<(), TagstoreError> {
            Ok(())
        }
    }

    impl ItemRepository for StubItemRepo {
        async fn create(&self, name: String) -> Result<Item, TagstoreError> {
            Ok(Item {
                id: ItemId::from_i64(1),
                name,
            })
        }
        async fn get_by_id(&self, _id: ItemId) -> Result<Option<Item>, TagstoreError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Item>, TagstoreError> {
            Ok(vec![])
        }
    }

    fn test_state() -> AppState<StubStoreRepo, StubTagRepo, StubItemRepo> {
        AppState::new(
            StoreService::new(StubStoreRepo),
            TagService::new(StubTagRepo, StubStoreRepo, StubItemRepo),
            ItemService::new(StubItemRepo),
            AuthKeys::new(SECRET),
        )
    }

    fn bearer() -> String {
        let token = encode(
            &Header::default(),
            &Claims {
                sub: "tester".to_string(),
                exp: 4_102_444_800,
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        format!("Bearer {token}")
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_resource_route_without_token() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/store").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_resource_route_with_invalid_token() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/tag")
                    .header("authorization", "Bearer nonsense")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_serve_resource_route_with_valid_token() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/store")
                    .header("authorization", bearer())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
