//! Application context: state ownership and the mutation cascade.
//!
//! # Responsibility
//! - Own the note and tag collections, their version counters, the store
//!   handle, and the derived-view caches.
//! - Expose the outward contract: six mutation entry points plus
//!   read-only raw, composed, and filtered views.
//!
//! # Invariants
//! - Every committed mutation has already been serialized to the store;
//!   "commit" and "mutation" are synonymous.
//! - Unmatched update/delete ids are silent no-ops and leave state,
//!   store, and versions untouched.
//! - Version counters move on every committed mutation of the matching
//!   collection, and only then.

use crate::model::note::{ComposedNote, NoteDraft, NoteId, RawNote};
use crate::model::tag::{Tag, TagId};
use crate::registry::{notes, tags};
use crate::store::{self, KeyValueStore, StoreError, NOTES_KEY, TAGS_KEY};
use crate::view::compose::ComposeCache;
use crate::view::filter::FilterCache;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ContextResult<T> = Result<T, ContextError>;

/// Application-surface error for open and mutation operations.
#[derive(Debug)]
pub enum ContextError {
    /// Store access or value codec failure.
    Store(StoreError),
    /// A loaded collection carries the same id twice. Treated as corrupt
    /// state at open time.
    DuplicateId { key: &'static str, id: Uuid },
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::DuplicateId { key, id } => {
                write!(f, "duplicate id {id} in stored collection `{key}`")
            }
        }
    }
}

impl Error for ContextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::DuplicateId { .. } => None,
        }
    }
}

impl From<StoreError> for ContextError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Single owner of application state over a store backend.
///
/// There is exactly one logical thread of control; no locking is needed
/// and none is used.
#[derive(Debug)]
pub struct AppContext<S: KeyValueStore> {
    store: S,
    notes: Vec<RawNote>,
    tags: Vec<Tag>,
    notes_version: u64,
    tags_version: u64,
    compose_cache: ComposeCache,
    filter_cache: FilterCache,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Loads both collections from the store and builds a ready context.
    ///
    /// Absent keys default to empty collections without writing anything.
    ///
    /// # Errors
    /// - `StoreError::Corrupt` (wrapped) when a stored value fails to
    ///   deserialize; no recovery is attempted.
    /// - `ContextError::DuplicateId` when a loaded collection violates id
    ///   uniqueness.
    pub fn open(store: S) -> ContextResult<Self> {
        let notes: Vec<RawNote> = store::read_or_else(&store, NOTES_KEY, Vec::new)?;
        let tags: Vec<Tag> = store::read_or_else(&store, TAGS_KEY, Vec::new)?;

        ensure_unique_ids(NOTES_KEY, notes.iter().map(|note| note.id))?;
        ensure_unique_ids(TAGS_KEY, tags.iter().map(|tag| tag.id))?;

        info!(
            "event=context_open module=context status=ok notes={} tags={}",
            notes.len(),
            tags.len()
        );

        Ok(Self {
            store,
            notes,
            tags,
            notes_version: 0,
            tags_version: 0,
            compose_cache: ComposeCache::new(),
            filter_cache: FilterCache::new(),
        })
    }

    /// Creates a note from `draft` and returns its generated id.
    pub fn create_note(&mut self, draft: &NoteDraft) -> ContextResult<NoteId> {
        let (next, id) = notes::create(&self.notes, draft);
        self.commit_notes(next)?;
        debug!(
            "event=note_create module=context status=ok note_id={id} tag_count={}",
            draft.tags.len()
        );
        Ok(id)
    }

    /// Replaces title/body/tag associations of the note matching `id`.
    ///
    /// An unmatched id is a silent no-op.
    pub fn update_note(&mut self, id: NoteId, draft: &NoteDraft) -> ContextResult<()> {
        if !self.notes.iter().any(|note| note.id == id) {
            warn!("event=note_update module=context status=noop note_id={id}");
            return Ok(());
        }
        let next = notes::update(&self.notes, id, draft);
        self.commit_notes(next)?;
        debug!("event=note_update module=context status=ok note_id={id}");
        Ok(())
    }

    /// Removes the note matching `id`. An unmatched id is a silent no-op.
    pub fn delete_note(&mut self, id: NoteId) -> ContextResult<()> {
        if !self.notes.iter().any(|note| note.id == id) {
            warn!("event=note_delete module=context status=noop note_id={id}");
            return Ok(());
        }
        let next = notes::remove(&self.notes, id);
        self.commit_notes(next)?;
        debug!("event=note_delete module=context status=ok note_id={id}");
        Ok(())
    }

    /// Appends `tag` to the tag collection.
    ///
    /// The caller provides the id; `Tag::new` generates a fresh one.
    pub fn add_tag(&mut self, tag: Tag) -> ContextResult<()> {
        let id = tag.id;
        let next = tags::add(&self.tags, tag);
        self.commit_tags(next)?;
        debug!("event=tag_add module=context status=ok tag_id={id}");
        Ok(())
    }

    /// Replaces the label of the tag matching `id`.
    ///
    /// An unmatched id is a silent no-op; notes are never touched.
    pub fn update_tag(&mut self, id: TagId, new_label: &str) -> ContextResult<()> {
        if !self.tags.iter().any(|tag| tag.id == id) {
            warn!("event=tag_update module=context status=noop tag_id={id}");
            return Ok(());
        }
        let next = tags::rename(&self.tags, id, new_label);
        self.commit_tags(next)?;
        debug!("event=tag_update module=context status=ok tag_id={id}");
        Ok(())
    }

    /// Removes the tag matching `id`, orphaning any note references.
    ///
    /// An unmatched id is a silent no-op. Notes keep their `tag_ids`
    /// entries; the composer resolves the orphans by omission.
    pub fn delete_tag(&mut self, id: TagId) -> ContextResult<()> {
        if !self.tags.iter().any(|tag| tag.id == id) {
            warn!("event=tag_delete module=context status=noop tag_id={id}");
            return Ok(());
        }
        let next = tags::remove(&self.tags, id);
        self.commit_tags(next)?;
        debug!("event=tag_delete module=context status=ok tag_id={id}");
        Ok(())
    }

    /// Read-only access to the underlying store backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read-only raw note collection, in insertion order.
    pub fn notes(&self) -> &[RawNote] {
        &self.notes
    }

    /// Read-only tag collection, in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Composed notes, recomputed only when notes or tags changed.
    pub fn composed_notes(&mut self) -> &[ComposedNote] {
        self.compose_cache.get_or_compute(
            self.notes_version,
            self.tags_version,
            &self.notes,
            &self.tags,
        )
    }

    /// Composed notes matching the title substring and selected tags.
    ///
    /// Recomputed only when the collections, the title, or the selection
    /// changed.
    pub fn filtered_notes(&mut self, title: &str, selected: &[TagId]) -> &[ComposedNote] {
        let composed = self.compose_cache.get_or_compute(
            self.notes_version,
            self.tags_version,
            &self.notes,
            &self.tags,
        );
        self.filter_cache.get_or_compute(
            self.notes_version,
            self.tags_version,
            title,
            selected,
            composed,
        )
    }

    fn commit_notes(&mut self, next: Vec<RawNote>) -> ContextResult<()> {
        store::write(&mut self.store, NOTES_KEY, &next)?;
        self.notes = next;
        self.notes_version += 1;
        Ok(())
    }

    fn commit_tags(&mut self, next: Vec<Tag>) -> ContextResult<()> {
        store::write(&mut self.store, TAGS_KEY, &next)?;
        self.tags = next;
        self.tags_version += 1;
        Ok(())
    }
}

fn ensure_unique_ids(
    key: &'static str,
    ids: impl Iterator<Item = Uuid>,
) -> Result<(), ContextError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContextError::DuplicateId { key, id });
        }
    }
    Ok(())
}
