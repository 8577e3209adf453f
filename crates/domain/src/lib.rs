//! # tagstore-domain
//!
//! Pure domain model for the tagstore backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error taxonomy
//! - Define **Stores** (named containers that own tags)
//! - Define **Tags** (named labels scoped to one store, linkable to items)
//! - Define **Items** (entities that carry zero or more tags)
//! - Define the **Tag↔Item link** result record
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod item;
pub mod link;
pub mod store;
pub mod tag;
