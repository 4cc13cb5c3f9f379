//! View composer: resolve tag ids into full tag records.

use crate::model::note::{ComposedNote, RawNote};
use crate::model::tag::{Tag, TagId};
use std::collections::HashMap;

/// Derives one composed note per raw note.
///
/// Each `tag_ids` entry is resolved against `tags`; ids without a match
/// are dropped silently, in original `tag_ids` order. Stale references
/// left behind by tag deletion therefore never error.
pub fn compose(notes: &[RawNote], tags: &[Tag]) -> Vec<ComposedNote> {
    let by_id: HashMap<TagId, &Tag> = tags.iter().map(|tag| (tag.id, tag)).collect();

    notes
        .iter()
        .map(|note| ComposedNote {
            id: note.id,
            title: note.title.clone(),
            body: note.body.clone(),
            tags: note
                .tag_ids
                .iter()
                .filter_map(|id| by_id.get(id).map(|tag| (*tag).clone()))
                .collect(),
        })
        .collect()
}

/// Explicit memo cache for [`compose`].
///
/// Keyed on the `(notes_version, tags_version)` pair owned by the
/// application context; recomputation is skipped while neither version
/// moved.
#[derive(Debug, Default)]
pub struct ComposeCache {
    key: Option<(u64, u64)>,
    value: Vec<ComposedNote>,
}

impl ComposeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the composed notes for the given input versions,
    /// recomputing only on a version change.
    pub fn get_or_compute(
        &mut self,
        notes_version: u64,
        tags_version: u64,
        notes: &[RawNote],
        tags: &[Tag],
    ) -> &[ComposedNote] {
        let key = (notes_version, tags_version);
        if self.key != Some(key) {
            self.value = compose(notes, tags);
            self.key = Some(key);
        }
        &self.value
    }
}
