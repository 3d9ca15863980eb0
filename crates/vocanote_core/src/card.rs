//! Note card read model.
//!
//! # Responsibility
//! - Project one note into the shape a card view renders: body text plus a
//!   human-readable age label.
//!
//! # Invariants
//! - Cards are pure projections; they hold no state beyond the snapshot.
//! - The only action a card supports is delete, keyed by the note id.

use crate::model::note::{Note, NoteId};
use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const RELATIVE_CUTOFF_DAYS: i64 = 30;

/// Read-only presentation unit for one note.
///
/// The host renders `body` and `age_label` and wires its delete affordance
/// to call the board's delete operation with `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Deletion key for this card.
    pub id: NoteId,
    /// Full note text.
    pub body: String,
    /// Relative age ("há 5 minutos") or absolute date beyond 30 days.
    pub age_label: String,
}

impl NoteCard {
    /// Projects a note into its card shape using the current instant.
    pub fn from_note(note: &Note) -> Self {
        Self::from_note_at(note, Utc::now())
    }

    /// Projects a note using an explicit `now`, for deterministic labels.
    pub fn from_note_at(note: &Note, now: DateTime<Utc>) -> Self {
        Self {
            id: note.id,
            body: note.content.clone(),
            age_label: age_label(note.date, now),
        }
    }
}

/// Formats the age of `date` relative to `now`.
///
/// Labels follow the board's fixed pt-BR locale. Anything older than 30 days
/// falls back to the absolute date.
pub fn age_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(date).num_seconds();
    if seconds < SECONDS_PER_MINUTE {
        return "agora mesmo".to_string();
    }

    if seconds < SECONDS_PER_HOUR {
        let minutes = seconds / SECONDS_PER_MINUTE;
        return pluralize(minutes, "minuto", "minutos");
    }

    if seconds < SECONDS_PER_DAY {
        let hours = seconds / SECONDS_PER_HOUR;
        return pluralize(hours, "hora", "horas");
    }

    let days = seconds / SECONDS_PER_DAY;
    if days <= RELATIVE_CUTOFF_DAYS {
        return pluralize(days, "dia", "dias");
    }

    date.format("%Y-%m-%d").to_string()
}

fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("há 1 {singular}")
    } else {
        format!("há {count} {plural}")
    }
}
