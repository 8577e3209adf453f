//! Store service — use-cases for managing stores.

use tagstore_domain::error::{NotFoundError, TagstoreError};
use tagstore_domain::id::StoreId;
use tagstore_domain::store::{Store, validate_name};

use crate::ports::StoreRepository;

/// Application service for store CRUD operations.
pub struct StoreService<R> {
    repo: R,
}

impl<R: StoreRepository> StoreService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new store with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::Validation`] when `name` is empty,
    /// [`TagstoreError::Conflict`] when `name` is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_store(&self, name: String) -> Result<Store, TagstoreError> {
        validate_name(&name)?;
        self.repo.create(name).await
    }

    /// Look up a store by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when no store with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_store(&self, id: StoreId) -> Result<Store, TagstoreError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Store",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all stores.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_stores(&self) -> Result<Vec<Store>, TagstoreError> {
        self.repo.get_all().await
    }

    /// Create-or-rename keyed by a caller-supplied id.
    ///
    /// When a store with `id` exists its name is replaced; otherwise a
    /// store is created with exactly that id. Idempotent under repeated
    /// identical calls.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::Validation`] when `name` is empty,
    /// [`TagstoreError::Conflict`] when `name` belongs to another store,
    /// or a storage error from the repository.
    pub async fn upsert_store(&self, id: StoreId, name: String) -> Result<Store, TagstoreError> {
        validate_name(&name)?;
        self.repo.upsert(id, name).await
    }

    /// Delete a store by id.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::NotFound`] when the store does not exist,
    /// [`TagstoreError::Conflict`] when tags still reference it, or a
    /// storage error from the repository.
    pub async fn delete_store(&self, id: StoreId) -> Result<(), TagstoreError> {
        self.get_store(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;
    use tagstore_domain::error::{ConflictError, ValidationError};

    struct InMemoryStoreRepo {
        store: Mutex<(i64, HashMap<StoreId, Store>)>,
    }

    impl Default for InMemoryStoreRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new((0, HashMap::new())),
            }
        }
    }

    impl StoreRepository for InMemoryStoreRepo {
        fn create(
            &self,
            name: String,
        ) -> impl Future<Output = Result<Store, TagstoreError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let result = if guard.1.values().any(|s| s.name == name) {
                Err(ConflictError::DuplicateStoreName.into())
            } else {
                guard.0 += 1;
                let store = Store {
                    id: StoreId::from_i64(guard.0),
                    name,
                };
                guard.1.insert(store.id, store.clone());
                Ok(store)
            };
            async { result }
        }

        fn get_by_id(
            &self,
            id: StoreId,
        ) -> impl Future<Output = Result<Option<Store>, TagstoreError>> + Send {
            let guard = self.store.lock().unwrap();
            let result = guard.1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Store>, TagstoreError>> + Send {
            let guard = self.store.lock().unwrap();
            let result: Vec<Store> = guard.1.values().cloned().collect();
            async { Ok(result) }
        }

        fn upsert(
            &self,
            id: StoreId,
            name: String,
        ) -> impl Future<Output = Result<Store, TagstoreError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let store = Store { id, name };
            guard.1.insert(id, store.clone());
            async { Ok(store) }
        }

        fn delete(&self, id: StoreId) -> impl Future<Output = Result<(), TagstoreError>> + Send {
            let mut guard = self.store.lock().unwrap();
            guard.1.remove(&id);
            async { Ok(()) }
        }
    }

    fn make_service() -> StoreService<InMemoryStoreRepo> {
        StoreService::new(InMemoryStoreRepo::default())
    }

    #[tokio::test]
    async fn should_create_store_with_generated_id() {
        let svc = make_service();

        let created = svc.create_store("Groceries".to_string()).await.unwrap();
        assert_eq!(created.name, "Groceries");

        let fetched = svc.get_store(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_empty() {
        let svc = make_service();
        let result = svc.create_store(String::new()).await;
        assert!(matches!(
            result,
            Err(TagstoreError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_taken() {
        let svc = make_service();
        svc.create_store("Groceries".to_string()).await.unwrap();

        let result = svc.create_store("Groceries".to_string()).await;
        assert!(matches!(
            result,
            Err(TagstoreError::Conflict(ConflictError::DuplicateStoreName))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_store_missing() {
        let svc = make_service();
        let result = svc.get_store(StoreId::from_i64(404)).await;
        assert!(matches!(result, Err(TagstoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_stores() {
        let svc = make_service();
        svc.create_store("Groceries".to_string()).await.unwrap();
        svc.create_store("Hardware".to_string()).await.unwrap();

        let all = svc.list_stores().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_create_store_with_exact_id_when_upserting_missing_id() {
        let svc = make_service();
        let id = StoreId::from_i64(42);

        let stored = svc.upsert_store(id, "Outlet".to_string()).await.unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.name, "Outlet");

        let fetched = svc.get_store(id).await.unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn should_rename_existing_store_when_upserting_known_id() {
        let svc = make_service();
        let created = svc.create_store("Groceries".to_string()).await.unwrap();

        let renamed = svc
            .upsert_store(created.id, "Supermarket".to_string())
            .await
            .unwrap();
        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.name, "Supermarket");
    }

    #[tokio::test]
    async fn should_be_idempotent_under_repeated_upserts() {
        let svc = make_service();
        let id = StoreId::from_i64(7);

        let first = svc.upsert_store(id, "Outlet".to_string()).await.unwrap();
        let second = svc.upsert_store(id, "Outlet".to_string()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(svc.list_stores().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_delete_store_when_it_exists() {
        let svc = make_service();
        let created = svc.create_store("Groceries".to_string()).await.unwrap();

        svc.delete_store(created.id).await.unwrap();

        let result = svc.get_store(created.id).await;
        assert!(matches!(result, Err(TagstoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_store() {
        let svc = make_service();
        let result = svc.delete_store(StoreId::from_i64(404)).await;
        assert!(matches!(result, Err(TagstoreError::NotFound(_))));
    }
}
