//! # tagstore-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `tagstore-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Translate constraint violations into domain `Conflict` errors
//!
//! ## Dependency rule
//! Depends on `tagstore-app` (for port traits) and `tagstore-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod item_repo;
pub mod pool;
pub mod store_repo;
pub mod tag_repo;

pub use error::StorageError;
pub use item_repo::SqliteItemRepository;
pub use pool::{Config, Database};
pub use store_repo::SqliteStoreRepository;
pub use tag_repo::SqliteTagRepository;
