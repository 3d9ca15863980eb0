//! Durable storage boundary for the note slot.
//!
//! # Responsibility
//! - Define the single-slot persistence contract used by the note store.
//! - Keep filesystem details inside the core persistence boundary.
//!
//! # Invariants
//! - A slot holds at most one payload; writes replace the whole payload.
//! - A failed write leaves the prior payload intact (no partial state).
//! - No retries: every read/write is attempted exactly once.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

mod slot;

pub use slot::{FileSlot, MemorySlot};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for slot read/write operations.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying I/O failure, with the slot location for context.
    Io { slot: String, source: io::Error },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { slot, source } => {
                write!(f, "storage slot `{slot}` I/O failure: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// One named slot of durable local storage.
///
/// The note store serializes its entire sequence into this slot on every
/// mutation and reads it back once at startup.
pub trait StorageSlot {
    /// Reads the whole slot payload. `None` means the slot was never written.
    fn read(&self) -> StorageResult<Option<String>>;
    /// Overwrites the whole slot payload.
    fn write(&mut self, payload: &str) -> StorageResult<()>;
}
