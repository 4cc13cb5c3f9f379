//! Collection registries for notes and tags.
//!
//! # Responsibility
//! - Express every mutation as a pure transformation from old collection
//!   to new collection.
//!
//! # Invariants
//! - Collections stay insertion-ordered; no resorting happens here.
//! - Update/delete with an unmatched id returns an unchanged clone, never
//!   an error.
//! - Deleting a tag never touches any note's `tag_ids`.

pub mod notes;
pub mod tags;
