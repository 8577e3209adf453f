//! `SQLite` implementation of [`StoreRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tagstore_app::ports::StoreRepository;
use tagstore_domain::error::{ConflictError, TagstoreError};
use tagstore_domain::id::StoreId;
use tagstore_domain::store::Store;

use crate::error::{StorageError, foreign_key_conflict, unique_conflict};

/// Wrapper for converting database rows into domain [`Store`].
struct Wrapper(Store);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Store> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Store {
            id: StoreId::from_i64(id),
            name,
        }))
    }
}

const INSERT: &str = "INSERT INTO stores (name) VALUES (?) RETURNING id, name";
const UPSERT: &str = "INSERT INTO stores (id, name) VALUES (?, ?) \
    ON CONFLICT (id) DO UPDATE SET name = excluded.name RETURNING id, name";
const SELECT_BY_ID: &str = "SELECT id, name FROM stores WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name FROM stores ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM stores WHERE id = ?";

/// `SQLite`-backed store repository.
pub struct SqliteStoreRepository {
    pool: SqlitePool,
}

impl SqliteStoreRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StoreRepository for SqliteStoreRepository {
    fn create(&self, name: String) -> impl Future<Output = Result<Store, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&name)
                .fetch_one(&pool)
                .await
                .map_err(|err| unique_conflict(err, ConflictError::DuplicateStoreName))?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: StoreId,
    ) -> impl Future<Output = Result<Option<Store>, TagstoreError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Store>, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn upsert(
        &self,
        id: StoreId,
        name: String,
    ) -> impl Future<Output = Result<Store, TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Create-or-rename in a single statement: the id conflict
            // turns the insert into a rename, atomically.
            let row: Wrapper = sqlx::query_as(UPSERT)
                .bind(id.as_i64())
                .bind(&name)
                .fetch_one(&pool)
                .await
                .map_err(|err| unique_conflict(err, ConflictError::DuplicateStoreName))?;

            Ok(row.0)
        }
    }

    fn delete(&self, id: StoreId) -> impl Future<Output = Result<(), TagstoreError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(|err| foreign_key_conflict(err, ConflictError::StoreHasTags))?;

            Ok(())
        }
    }
}
