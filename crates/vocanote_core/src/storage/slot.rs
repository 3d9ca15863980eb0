//! Slot implementations for file-backed and in-memory storage.
//!
//! # Responsibility
//! - Provide the production file slot and the ephemeral memory slot.
//!
//! # Invariants
//! - `FileSlot` writes go through a sibling temp file plus rename, so an
//!   interrupted write never corrupts the prior payload.
//! - A missing file reads as `None`, not as an error.

use super::{StorageError, StorageResult, StorageSlot};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed storage slot: one payload file on disk.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot at `path`. The file is not touched until first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            slot: self.path.display().to_string(),
            source,
        }
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn write(&mut self, payload: &str) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        // Temp-then-rename keeps the prior payload intact if this write dies.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload).map_err(|err| self.io_error(err))?;
        fs::rename(&tmp, &self.path).map_err(|err| self.io_error(err))?;

        info!(
            "event=slot_write module=storage status=ok slot={} bytes={}",
            self.path.display(),
            payload.len()
        );
        Ok(())
    }
}

/// In-memory storage slot for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pre-seeded slot, as if a prior session had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    /// Returns the current payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> StorageResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> StorageResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
