//! Substring search over the note sequence.
//!
//! # Responsibility
//! - Provide the visible-notes projection for a search query.
//!
//! # Invariants
//! - Store order is preserved; filtering never reorders.
//! - Matching is case-insensitive substring containment.
//! - This is a pure projection recomputed per call; no cached index.

use crate::model::note::Note;

/// Filters `notes` by case-insensitive substring containment of `query`.
///
/// An empty query returns every note unfiltered. Matching case-folds both
/// sides with `str::to_lowercase`, so non-ASCII content matches the way the
/// user typed it.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }

    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| note.content.to_lowercase().contains(&needle))
        .collect()
}
