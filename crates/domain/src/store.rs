//! Store — a named container that owns tags.

use serde::{Deserialize, Serialize};

use crate::error::{TagstoreError, ValidationError};
use crate::id::StoreId;

/// A named container for tags. Names are unique across stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
}

impl Store {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TagstoreError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), TagstoreError> {
        validate_name(&self.name)?;
        Ok(())
    }
}

/// Check that a name is acceptable for a store, tag, or item.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] when `name` is empty.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}
