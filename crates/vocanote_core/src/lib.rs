//! Core domain logic for VocaNote.
//! This crate is the single source of truth for business invariants.

pub mod board;
pub mod card;
pub mod composer;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod speech;
pub mod storage;
pub mod store;

pub use board::{NoteBoard, NOTE_CREATED_MESSAGE};
pub use card::NoteCard;
pub use composer::{Composer, ComposerError, ComposerState, SPEECH_UNAVAILABLE_MESSAGE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use notify::{LogNotifier, Notifier};
pub use search::filter_notes;
pub use speech::{
    RecognitionSession, RecognizerConfig, SpeechError, SpeechEvent, SpeechRecognizer,
    TranscriptSegment,
};
pub use storage::{FileSlot, MemorySlot, StorageError, StorageSlot};
pub use store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
