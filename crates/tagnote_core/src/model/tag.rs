//! Tag domain model.
//!
//! # Invariants
//! - `id` identifies a tag independently of its display text.
//! - Labels are free-form and need not be unique across the collection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a tag.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TagId = Uuid;

/// User-defined label usable to categorize notes.
///
/// Renaming a tag changes only this record; notes keep referencing it by
/// `id`, so no note rewrite is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Stable id, generated at creation and never reused.
    pub id: TagId,
    /// Display text shown by presentation layers.
    pub label: String,
}

impl Tag {
    /// Creates a tag with a freshly generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), label)
    }

    /// Creates a tag with a caller-provided id.
    ///
    /// Used by load paths and tests where identity already exists.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
