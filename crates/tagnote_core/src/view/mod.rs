//! Derived read models over the raw collections.
//!
//! # Responsibility
//! - Compose display-ready notes out of raw notes plus the tag collection.
//! - Filter composed notes by title substring and selected tags.
//!
//! # Invariants
//! - Derivations are pure; caches are explicit and keyed on input
//!   versions, never on framework magic.
//! - A cache only recomputes when one of its keyed inputs moved.

pub mod compose;
pub mod filter;
