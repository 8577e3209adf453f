//! `SQLite` implementation of [`TagRepository`].
//!
//! Tag-name uniqueness and link membership are database constraints
//! (`UNIQUE (store_id, name)` and the `items_tags` primary key), so the
//! authoritative check happens at commit time and there is no
//! check-then-insert race.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tagstore_app::ports::TagRepository;
use tagstore_domain::error::{ConflictError, TagstoreError};
use tagstore_domain::id::{ItemId, StoreId, TagId};
use tagstore_domain::tag::Tag;

use crate::error::{StorageError, foreign_key_conflict, unique_conflict};

/// Wrapper for converting database rows into domain [`Tag`].
struct Wrapper(Tag);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Tag> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let store_id: i64 = row.try_get("store_id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Tag {
            id: TagId::from_i64(id),
            store_id: StoreId::from_i64(store_id),
            name,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO tags (store_id, name) VALUES (?, ?) RETURNING id, store_id, name";
const SELECT_BY_ID: &str = "SELECT id, store_id, name FROM tags WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, store_id, name FROM tags ORDER BY id";
const SELECT_BY_STORE: &str = "SELECT id, store_id, name FROM tags WHERE store_id = ? ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM tags WHERE id = ?";
const INSERT_LINK: &str = "INSERT INTO items_tags (item_id, tag_id) VALUES (?, ?)";
const DELETE_LINK: &str = "DELETE FROM items_tags WHERE item_id = ? AND tag_id = ?";

/// `SQLite`-backed tag repository.
pub struct SqliteTagRepository {
    pool: SqlitePool,
}

impl SqliteTagRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TagRepository for SqliteTagRepository {
    fn create(
        &self,
        store_id: StoreId,
        name: String,
    ) -> impl Future<Output = Result<Tag, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(store_id.as_i64())
                .bind(&name)
                .fetch_one(&pool)
                .await
                .map_err(|err| unique_conflict(err, ConflictError::DuplicateTagName))?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: TagId,
    ) -> impl Future<Output = Result<Option<Tag>, TagstoreError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Tag>, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_store(
        &self,
        store_id: StoreId,
    ) -> impl Future<Output = Result<Vec<Tag>, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STORE)
                .bind(store_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, id: TagId) -> impl Future<Output = Result<(), TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| foreign_key_conflict(err, ConflictError::TagHasItems))?;

            Ok(())
        }
    }

    fn link(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> impl Future<Output = Result<(), TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT_LINK)
                .bind(item_id.as_i64())
                .bind(tag_id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| unique_conflict(err, ConflictError::AlreadyLinked))?;

            Ok(())
        }
    }

    fn unlink(
        &self,
        item_id: ItemId,
        tag_id: TagId,
    ) -> impl Future<Output = Result<(), TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_LINK)
                .bind(item_id.as_i64())
                .bind(tag_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(ConflictError::NotLinked.into());
            }

            Ok(())
        }
    }
}
