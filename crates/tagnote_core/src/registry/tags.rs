//! Tag collection transformations.

use crate::model::tag::{Tag, TagId};

/// Appends `tag` to the collection.
///
/// The caller is responsible for generating a fresh id beforehand
/// (`Tag::new` does).
pub fn add(tags: &[Tag], tag: Tag) -> Vec<Tag> {
    let mut next = tags.to_vec();
    next.push(tag);
    next
}

/// Replaces the label of the tag matching `id`.
///
/// Position and id stay unchanged; an unmatched id is a no-op.
pub fn rename(tags: &[Tag], id: TagId, new_label: &str) -> Vec<Tag> {
    tags.iter()
        .map(|tag| {
            if tag.id == id {
                Tag::with_id(tag.id, new_label)
            } else {
                tag.clone()
            }
        })
        .collect()
}

/// Removes the tag matching `id`; an unmatched id is a no-op.
pub fn remove(tags: &[Tag], id: TagId) -> Vec<Tag> {
    tags.iter().filter(|tag| tag.id != id).cloned().collect()
}
