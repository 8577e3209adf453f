//! Result record for tag↔item link and unlink operations.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::tag::Tag;

/// Outcome of linking or unlinking a tag and an item: a confirmation
/// message plus both affected entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagItemLink {
    pub message: String,
    pub item: Item,
    pub tag: Tag,
}
