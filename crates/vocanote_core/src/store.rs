//! Note store: the sole source of truth for the note sequence.
//!
//! # Responsibility
//! - Own the ordered note sequence (newest first) in memory.
//! - Mirror every mutation to the storage slot as one serialized blob.
//!
//! # Invariants
//! - List order is insertion order with newest first (creates prepend).
//! - The unit of persistence is the full list; every create/delete rewrites
//!   the whole serialized sequence.
//! - Malformed persisted content is rejected at open, never masked.

use crate::model::note::{Note, NoteId};
use crate::storage::{StorageError, StorageSlot};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for persistence and rehydration.
#[derive(Debug)]
pub enum StoreError {
    /// Slot read/write failure.
    Storage(StorageError),
    /// Persisted payload exists but does not deserialize as a note sequence.
    Corrupted { details: String },
    /// In-memory sequence failed to serialize (should not happen for valid notes).
    Serialize { details: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Corrupted { details } => {
                write!(f, "persisted note data is corrupted: {details}")
            }
            Self::Serialize { details } => {
                write!(f, "failed to serialize note sequence: {details}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Corrupted { .. } => None,
            Self::Serialize { .. } => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Ordered note sequence mirrored to one storage slot.
pub struct NoteStore<S: StorageSlot> {
    notes: Vec<Note>,
    slot: S,
}

impl<S: StorageSlot> NoteStore<S> {
    /// Opens a store by rehydrating the slot.
    ///
    /// An absent slot yields an empty store. A payload that fails to
    /// deserialize is a startup fault and propagates as
    /// [`StoreError::Corrupted`]; the caller decides whether to treat it as
    /// fatal or discard the slot and start over.
    pub fn open(slot: S) -> StoreResult<Self> {
        let notes = match slot.read()? {
            Some(payload) => {
                serde_json::from_str::<Vec<Note>>(&payload).map_err(|err| {
                    warn!(
                        "event=store_open module=store status=error error_code=corrupted_slot error={err}"
                    );
                    StoreError::Corrupted {
                        details: err.to_string(),
                    }
                })?
            }
            None => Vec::new(),
        };

        info!(
            "event=store_open module=store status=ok notes={}",
            notes.len()
        );
        Ok(Self { notes, slot })
    }

    /// Creates a note from `content` and prepends it to the sequence.
    ///
    /// Content emptiness is not checked here; the composer's save path is
    /// the gate for that.
    pub fn create(&mut self, content: impl Into<String>) -> StoreResult<&Note> {
        let note = Note::new(content);
        self.notes.insert(0, note);
        self.persist()?;

        let note = &self.notes[0];
        info!(
            "event=note_create module=store status=ok id={} total={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Deletes the note with the given id.
    ///
    /// Returns `Ok(false)` when no note matches; that is not an error and
    /// the sequence is unchanged. The resulting sequence is persisted either
    /// way, matching the rewrite-on-every-mutation contract.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        self.persist()?;

        if removed {
            info!(
                "event=note_delete module=store status=ok id={id} total={}",
                self.notes.len()
            );
        } else {
            info!("event=note_delete module=store status=noop id={id}");
        }
        Ok(removed)
    }

    /// Returns the full sequence, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns how many notes the store holds.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.notes).map_err(|err| StoreError::Serialize {
            details: err.to_string(),
        })?;
        self.slot.write(&payload)?;
        Ok(())
    }
}
