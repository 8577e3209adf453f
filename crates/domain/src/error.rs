//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`TagstoreError`] via `#[from]`. The taxonomy is deliberately small:
//! `Validation` for rejected input, `NotFound` for missing entities,
//! `Conflict` for violated uniqueness or state preconditions, and
//! `Storage` for unclassified persistence failures.

/// Top-level error for all domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum TagstoreError {
    /// Input violated a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An entity referenced by id does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness or state precondition was violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Unclassified persistence failure.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejected input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,
}

/// A lookup by id found nothing.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Store"`.
    pub entity: &'static str,
    /// The id that was looked up.
    pub id: String,
}

/// A violated uniqueness or state precondition.
///
/// Uniqueness conflicts are detected by the storage layer (translated
/// from constraint violations at commit time), state-precondition
/// conflicts by the services.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    /// A store with that name already exists.
    #[error("a store with that name already exists")]
    DuplicateStoreName,

    /// A tag with that name already exists in the store.
    #[error("a tag with that name already exists in that store")]
    DuplicateTagName,

    /// The store still owns tags and cannot be deleted.
    #[error("store still has tags and cannot be deleted")]
    StoreHasTags,

    /// The tag is assigned to one or more items and cannot be deleted.
    #[error("tag is assigned to one or more items and cannot be deleted")]
    TagHasItems,

    /// The tag is already linked to the item.
    #[error("tag is already linked to item")]
    AlreadyLinked,

    /// The tag is not linked to the item.
    #[error("tag is not linked to item")]
    NotLinked,
}
