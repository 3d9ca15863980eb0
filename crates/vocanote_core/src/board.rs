//! Note board: root container over store, search state and notifications.
//!
//! # Responsibility
//! - Compose the note store with the active search query.
//! - Raise the success toast on note creation.
//!
//! # Invariants
//! - The visible list is a pure projection of store order plus the query;
//!   the board never caches or reorders it.
//! - All operations run synchronously on the host's single event thread.

use crate::card::NoteCard;
use crate::model::note::{Note, NoteId};
use crate::notify::Notifier;
use crate::search::filter_notes;
use crate::store::{NoteStore, StoreResult};
use crate::storage::StorageSlot;

/// Toast raised after every successful note creation.
pub const NOTE_CREATED_MESSAGE: &str = "Nota criada com sucesso!";

/// Root container a host shell drives.
pub struct NoteBoard<S: StorageSlot, N: Notifier> {
    store: NoteStore<S>,
    search_query: String,
    notifier: N,
}

impl<S: StorageSlot, N: Notifier> NoteBoard<S, N> {
    /// Opens the board by rehydrating the store from `slot`.
    ///
    /// Malformed slot content propagates as a startup fault; see
    /// [`NoteStore::open`].
    pub fn open(slot: S, notifier: N) -> StoreResult<Self> {
        Ok(Self {
            store: NoteStore::open(slot)?,
            search_query: String::new(),
            notifier,
        })
    }

    /// Creates a note, persists the sequence and raises the success toast.
    pub fn create_note(&mut self, content: impl Into<String>) -> StoreResult<NoteId> {
        let id = self.store.create(content)?.id;
        self.notifier.toast_success(NOTE_CREATED_MESSAGE);
        Ok(id)
    }

    /// Deletes by id and persists. A missing id is a quiet no-op.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        self.store.delete(id)
    }

    /// Replaces the active search query.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Returns the active search query.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Returns the notes matching the active query, in store order.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(self.store.notes(), &self.search_query)
    }

    /// Returns the visible notes projected into card shape.
    pub fn cards(&self) -> Vec<NoteCard> {
        self.visible_notes()
            .into_iter()
            .map(NoteCard::from_note)
            .collect()
    }

    /// Returns the full store sequence, newest first.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Returns the notification sink, for composer operations that alert.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
