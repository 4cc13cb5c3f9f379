use tagnote_core::store::{self, KeyValueStore};
use tagnote_core::{
    AppContext, ContextError, MemoryStore, NoteDraft, RawNote, SqliteStore, StoreError, Tag,
    NOTES_KEY, TAGS_KEY,
};
use uuid::Uuid;

fn draft(title: &str, tags: Vec<Tag>) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        body: "body".to_string(),
        tags,
    }
}

#[test]
fn open_with_absent_keys_defaults_to_empty_and_writes_nothing() {
    let store = MemoryStore::new();
    let ctx = AppContext::open(store).unwrap();

    assert!(ctx.notes().is_empty());
    assert!(ctx.tags().is_empty());
    assert!(ctx.store().is_empty());
}

#[test]
fn mutations_survive_a_reopen_through_the_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagnote.db");

    let work = Tag::new("work");
    let note_id = {
        let store = SqliteStore::open(&path).unwrap();
        let mut ctx = AppContext::open(store).unwrap();
        ctx.add_tag(work.clone()).unwrap();
        ctx.create_note(&draft("Plan", vec![work.clone()])).unwrap()
    };

    let store = SqliteStore::open(&path).unwrap();
    let mut ctx = AppContext::open(store).unwrap();
    assert_eq!(ctx.tags(), &[work.clone()]);
    assert_eq!(ctx.notes().len(), 1);
    assert_eq!(ctx.notes()[0].id, note_id);
    assert_eq!(ctx.notes()[0].tag_ids, vec![work.id]);
    assert_eq!(ctx.composed_notes()[0].tags, vec![work]);
}

#[test]
fn stored_payload_uses_documented_camel_case_layout() {
    let work = Tag::new("work");
    let mut ctx = AppContext::open(MemoryStore::new()).unwrap();
    ctx.add_tag(work.clone()).unwrap();
    ctx.create_note(&draft("Plan", vec![work])).unwrap();

    let notes_text = ctx.store().get_item(NOTES_KEY).unwrap().unwrap();
    assert!(notes_text.contains("\"tagIds\""));
    assert!(!notes_text.contains("\"tag_ids\""));

    let tags_text = ctx.store().get_item(TAGS_KEY).unwrap().unwrap();
    assert!(tags_text.contains("\"label\":\"work\""));
}

#[test]
fn collections_round_trip_through_the_typed_adapter() {
    let tags = vec![Tag::new("work"), Tag::new("home")];
    let notes = vec![RawNote {
        id: Uuid::new_v4(),
        title: "Plan".to_string(),
        body: "body".to_string(),
        tag_ids: vec![tags[0].id, tags[1].id],
    }];

    let mut store = MemoryStore::new();
    store::write(&mut store, TAGS_KEY, &tags).unwrap();
    store::write(&mut store, NOTES_KEY, &notes).unwrap();

    let tags_back: Vec<Tag> = store::read_or(&store, TAGS_KEY, Vec::new()).unwrap();
    let notes_back: Vec<RawNote> = store::read_or(&store, NOTES_KEY, Vec::new()).unwrap();
    assert_eq!(tags_back, tags);
    assert_eq!(notes_back, notes);
}

#[test]
fn malformed_notes_value_is_a_fatal_open_error() {
    let mut store = MemoryStore::new();
    store.set_item(NOTES_KEY, "{ definitely not an array").unwrap();

    let err = AppContext::open(store).unwrap_err();
    match err {
        ContextError::Store(StoreError::Corrupt { key, .. }) => assert_eq!(key, NOTES_KEY),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn notes_value_with_missing_fields_is_rejected() {
    let mut store = MemoryStore::new();
    store
        .set_item(NOTES_KEY, r#"[{"id":"0be52c01-0000-4000-8000-000000000000"}]"#)
        .unwrap();

    let err = AppContext::open(store).unwrap_err();
    assert!(matches!(err, ContextError::Store(StoreError::Corrupt { .. })));
}

#[test]
fn duplicate_ids_in_a_stored_collection_are_rejected() {
    let tag = Tag::new("twice");
    let mut store = MemoryStore::new();
    store::write(&mut store, TAGS_KEY, &vec![tag.clone(), tag.clone()]).unwrap();

    let err = AppContext::open(store).unwrap_err();
    match err {
        ContextError::DuplicateId { key, id } => {
            assert_eq!(key, TAGS_KEY);
            assert_eq!(id, tag.id);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_fields_in_stored_values_are_ignored() {
    let mut store = MemoryStore::new();
    store
        .set_item(
            TAGS_KEY,
            r#"[{"id":"0be52c01-0000-4000-8000-000000000000","label":"work","color":"red"}]"#,
        )
        .unwrap();

    let ctx = AppContext::open(store).unwrap();
    assert_eq!(ctx.tags().len(), 1);
    assert_eq!(ctx.tags()[0].label, "work");
}
