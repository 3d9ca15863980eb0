//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, search and card
//!   projections.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `date` is the creation instant and never changes (notes have no update
//!   operation).
//! - Content emptiness is enforced by the composer's save path, not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored text record.
///
/// The serialized shape (`id`, `date`, `content`) is the persistence
/// contract: the whole note sequence is stored as one JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used as deletion key and list key.
    pub id: NoteId,
    /// Creation instant, display-only after creation.
    pub date: DateTime<Utc>,
    /// Text body, immutable after creation.
    pub content: String,
}

impl Note {
    /// Creates a note with a generated id and the current timestamp.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_notes_get_distinct_ids() {
        let a = Note::new("first");
        let b = Note::new("first");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serialized_shape_uses_contract_field_names() {
        let note = Note::new("body");
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("date").is_some());
        assert_eq!(json.get("content").unwrap(), "body");
    }
}
