//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tagnote_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;
use tagnote_core::{AppContext, MemoryStore, NoteDraft, Tag};

fn main() -> Result<(), Box<dyn Error>> {
    println!("tagnote_core version={}", tagnote_core::core_version());

    // Run one full mutation cascade against an in-memory store.
    let mut ctx = AppContext::open(MemoryStore::new())?;
    let work = Tag::new("work");
    ctx.add_tag(work.clone())?;
    ctx.create_note(&NoteDraft {
        title: "Plan".to_string(),
        body: "quarterly planning".to_string(),
        tags: vec![work.clone()],
    })?;

    println!("notes={}", ctx.notes().len());
    println!("tags={}", ctx.tags().len());
    println!("composed={}", ctx.composed_notes().len());
    println!("filtered={}", ctx.filtered_notes("plan", &[work.id]).len());

    Ok(())
}
