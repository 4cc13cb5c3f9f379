//! Filter engine: conjunctive title/tag filtering of composed notes.

use crate::model::note::ComposedNote;
use crate::model::tag::TagId;

/// Returns the ordered subsequence of `notes` matching both predicates.
///
/// - `title` empty, or contained case-insensitively in the note title.
/// - `selected` empty, or every selected id present among the note's
///   resolved tags (AND across selected tags, exact id match).
pub fn filter(notes: &[ComposedNote], title: &str, selected: &[TagId]) -> Vec<ComposedNote> {
    let needle = title.to_lowercase();

    notes
        .iter()
        .filter(|note| {
            (needle.is_empty() || note.title.to_lowercase().contains(&needle))
                && (selected.is_empty()
                    || selected
                        .iter()
                        .all(|id| note.tags.iter().any(|tag| tag.id == *id)))
        })
        .cloned()
        .collect()
}

/// Explicit memo cache for [`filter`].
///
/// Keyed on the composed-input versions plus the verbatim title string
/// and selected-id sequence.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<FilterKey>,
    value: Vec<ComposedNote>,
}

#[derive(Debug, PartialEq, Eq)]
struct FilterKey {
    notes_version: u64,
    tags_version: u64,
    title: String,
    selected: Vec<TagId>,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filtered notes for the given inputs, recomputing only
    /// when one of them changed.
    pub fn get_or_compute(
        &mut self,
        notes_version: u64,
        tags_version: u64,
        title: &str,
        selected: &[TagId],
        composed: &[ComposedNote],
    ) -> &[ComposedNote] {
        let hit = self.key.as_ref().is_some_and(|key| {
            key.notes_version == notes_version
                && key.tags_version == tags_version
                && key.title == title
                && key.selected == selected
        });

        if !hit {
            self.value = filter(composed, title, selected);
            self.key = Some(FilterKey {
                notes_version,
                tags_version,
                title: title.to_string(),
                selected: selected.to_vec(),
            });
        }

        &self.value
    }
}
