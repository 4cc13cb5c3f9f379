//! Domain model for notes and tags.
//!
//! # Responsibility
//! - Define the canonical persisted shapes (`Tag`, `RawNote`).
//! - Define the derived display shape (`ComposedNote`) and the note input
//!   shape (`NoteDraft`).
//!
//! # Invariants
//! - Every `Tag.id` / `RawNote.id` is stable and never reused.
//! - A `RawNote` references tags by id only; labels live in the tag
//!   collection.
//! - `RawNote.tag_ids` may reference tags that no longer exist.

pub mod note;
pub mod tag;
