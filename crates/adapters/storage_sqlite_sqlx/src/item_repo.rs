//! `SQLite` implementation of [`ItemRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tagstore_app::ports::ItemRepository;
use tagstore_domain::error::TagstoreError;
use tagstore_domain::id::ItemId;
use tagstore_domain::item::Item;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Item`].
struct Wrapper(Item);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Item> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Item {
            id: ItemId::from_i64(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO items (name) VALUES (?) RETURNING id, name";
const SELECT_BY_ID: &str = "SELECT id, name FROM items WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM items ORDER BY id";

/// `SQLite`-backed item repository.
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for SqliteItemRepository {
    fn create(&self, name: String) -> impl Future<Output = Result<Item, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&name)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteItemRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteItemRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_item() {
        let repo = setup().await;

        let created = repo.create("Hammer".to_string()).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_item_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ItemId::from_i64(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_items() {
        let repo = setup().await;
        repo.create("Hammer".to_string()).await.unwrap();
        repo.create("Nails".to_string()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
