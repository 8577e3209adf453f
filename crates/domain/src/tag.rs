//! Tag — a named label scoped to one store, linkable to items.

use serde::{Deserialize, Serialize};

use crate::error::TagstoreError;
use crate::id::{StoreId, TagId};
use crate::store::validate_name;

/// A label owned by a store. The `(store_id, name)` pair is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub store_id: StoreId,
    pub name: String,
}

impl Tag {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn should_accept_non_empty_name() {
        let tag = Tag {
            id: TagId::from_i64(1),
            store_id: StoreId::from_i64(1),
            name: "sale".to_string(),
        };
        assert!(tag.validate().is_ok());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let tag = Tag {
            id: TagId::from_i64(1),
            store_id: StoreId::from_i64(1),
            name: String::new(),
        };
        assert!(matches!(
            tag.validate(),
            Err(TagstoreError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let tag = Tag {
            id: TagId::from_i64(9),
            store_id: StoreId::from_i64(2),
            name: "clearance".to_string(),
        };
        let json = serde_json::to_string(&tag).unwrap();
        let parsed: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tag);
    }
}
