//! Note domain model: persisted, derived, and input shapes.
//!
//! # Responsibility
//! - `RawNote` is the persisted shape, referencing tags by id only.
//! - `ComposedNote` is the derived display shape with tag ids resolved to
//!   full tag records.
//! - `NoteDraft` is the input shape for create/update; registries project
//!   its tags down to ids before persistence.
//!
//! # Invariants
//! - `RawNote` serializes with camelCase field names (`tagIds`) to match
//!   the documented store layout.
//! - Orphaned entries in `tag_ids` are tolerated and resolved by omission.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
pub type NoteId = Uuid;

/// Persisted note record.
///
/// Tags are referenced by id only, so renaming or deleting a tag requires
/// no rewrite of stored notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    /// Stable id, generated at creation and never reused.
    pub id: NoteId,
    /// Note title; matched case-insensitively by the filter engine.
    pub title: String,
    /// Free-form body text. Rendering semantics are out of scope here.
    pub body: String,
    /// Ordered tag references. May contain ids of deleted tags.
    pub tag_ids: Vec<TagId>,
}

/// Derived display shape with tag ids resolved to full records.
///
/// Produced by the view composer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedNote {
    pub id: NoteId,
    pub title: String,
    pub body: String,
    /// Resolved tags in original `tag_ids` order, orphans omitted.
    pub tags: Vec<Tag>,
}

/// Input shape for note create/update.
///
/// Carries full tag records so callers can work with labels; registries
/// keep only the ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<Tag>,
}

impl NoteDraft {
    /// Projects the draft's tags down to their ids, in draft order.
    pub fn tag_ids(&self) -> Vec<TagId> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteDraft, RawNote};
    use crate::model::tag::Tag;
    use uuid::Uuid;

    #[test]
    fn raw_note_serializes_with_camel_case_tag_ids() {
        let note = RawNote {
            id: Uuid::nil(),
            title: "Plan".to_string(),
            body: "body".to_string(),
            tag_ids: vec![Uuid::nil()],
        };

        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("tagIds").is_some());
        assert!(json.get("tag_ids").is_none());
    }

    #[test]
    fn raw_note_round_trips_through_json() {
        let note = RawNote {
            id: Uuid::new_v4(),
            title: "Shopping".to_string(),
            body: "milk, eggs".to_string(),
            tag_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
        };

        let encoded = serde_json::to_string(&note).unwrap();
        let decoded: RawNote = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, note);
    }

    #[test]
    fn raw_note_rejects_missing_fields() {
        let err = serde_json::from_str::<RawNote>(r#"{"id":"not-even-close"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn draft_projection_keeps_tag_order() {
        let first = Tag::new("work");
        let second = Tag::new("urgent");
        let draft = NoteDraft {
            title: "t".to_string(),
            body: "b".to_string(),
            tags: vec![first.clone(), second.clone()],
        };

        assert_eq!(draft.tag_ids(), vec![first.id, second.id]);
    }
}
