//! Domain model for the note board.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is hard delete keyed by id; there are no tombstones.

pub mod note;
