//! Note collection transformations.
//!
//! # Invariants
//! - `create` generates the note id; ids are never reused.
//! - `update` fully replaces title, body, and tag associations (no merge).

use crate::model::note::{NoteDraft, NoteId, RawNote};
use uuid::Uuid;

/// Appends a new note built from `draft` and returns its generated id.
///
/// Draft tags are projected down to ids; label text stays with the tag
/// collection.
pub fn create(notes: &[RawNote], draft: &NoteDraft) -> (Vec<RawNote>, NoteId) {
    let id = Uuid::new_v4();
    let mut next = notes.to_vec();
    next.push(RawNote {
        id,
        title: draft.title.clone(),
        body: draft.body.clone(),
        tag_ids: draft.tag_ids(),
    });
    (next, id)
}

/// Replaces title/body/tag associations of the note matching `id`.
///
/// Position stays unchanged; an unmatched id is a no-op.
pub fn update(notes: &[RawNote], id: NoteId, draft: &NoteDraft) -> Vec<RawNote> {
    notes
        .iter()
        .map(|note| {
            if note.id == id {
                RawNote {
                    id: note.id,
                    title: draft.title.clone(),
                    body: draft.body.clone(),
                    tag_ids: draft.tag_ids(),
                }
            } else {
                note.clone()
            }
        })
        .collect()
}

/// Removes the note matching `id`; an unmatched id is a no-op.
pub fn remove(notes: &[RawNote], id: NoteId) -> Vec<RawNote> {
    notes.iter().filter(|note| note.id != id).cloned().collect()
}
