//! `SessionStore` implementations.
//!
//! # Wire Format
//!
//! One JSON object per file, written whole:
//!
//! ```json
//! { "level": "beginner", "positions": { "beginner": 4 }, "savedAt": "2026-01-01T00:00:00Z" }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use flashdeck_core::{PersistedRecord, SessionStore, StoreError};

use crate::paths::{PathError, ensure_directory, session_record_path};

/// Stores the session record as a JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    /// Create a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the resolved default record location.
    pub fn at_default_location() -> Result<Self, PathError> {
        Ok(Self::new(session_record_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<PersistedRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(PersistedRecord::from_json(&raw)?))
    }

    fn save(&self, record: &PersistedRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_directory(parent).map_err(|e| StoreError::Storage(e.to_string()))?;
        }

        let json = record.to_json()?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "Session record written");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the session record in process memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: Mutex<Option<PersistedRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `record`.
    pub fn with_record(record: PersistedRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }

    /// Current contents.
    pub fn get(&self) -> Option<PersistedRecord> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<PersistedRecord>, StoreError> {
        Ok(self.get())
    }

    fn save(&self, record: &PersistedRecord) -> Result<(), StoreError> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
