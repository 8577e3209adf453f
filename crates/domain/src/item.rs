//! Item — an entity that can carry zero or more tags.

use serde::{Deserialize, Serialize};

use crate::error::TagstoreError;
use crate::id::ItemId;
use crate::store::validate_name;

/// An entity referenced by tag links. Tags attach to items through a
/// many-to-many association with set semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
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

    #[test]
    fn should_roundtrip_through_serde_json() {
        let item = Item {
            id: ItemId::from_i64(7),
            name: "Hammer".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
