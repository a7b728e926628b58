//! In-memory fakes for exercising the engine without a speech engine or
//! durable storage.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::ports::{SessionStore, SpeechPort, StoreError};
use crate::session::PersistedRecord;

/// One call observed by [`RecordingSpeech`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCall {
    Speak { text: String, language: String },
    CancelAll,
}

impl SpeechCall {
    pub fn speak(text: &str, language: &str) -> Self {
        Self::Speak {
            text: text.to_string(),
            language: language.to_string(),
        }
    }
}

/// Speech port that records every call in order.
#[derive(Debug)]
pub struct RecordingSpeech {
    calls: Mutex<Vec<SpeechCall>>,
    available: bool,
}

impl Default for RecordingSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSpeech {
    pub const fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            available: true,
        }
    }

    /// A port that reports the capability as absent.
    pub const fn unavailable() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            available: false,
        }
    }

    /// All calls so far.
    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the `(text, language)` pairs that were spoken.
    pub fn spoken(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { text, language } => Some((text, language)),
                SpeechCall::CancelAll => None,
            })
            .collect()
    }

    /// Drain recorded calls.
    pub fn take(&self) -> Vec<SpeechCall> {
        std::mem::take(&mut *self.calls.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn record(&self, call: SpeechCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl SpeechPort for RecordingSpeech {
    fn speak(&self, text: &str, language: &str) {
        self.record(SpeechCall::speak(text, language));
    }

    fn cancel_all(&self) {
        self.record(SpeechCall::CancelAll);
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// Session store holding the serialized blob in memory.
///
/// Keeps the raw JSON so tests can plant corrupt records, and can be told
/// to fail saves.
#[derive(Debug, Default)]
pub struct RecordingStore {
    blob: Mutex<Option<String>>,
    saves: Mutex<Vec<PersistedRecord>>,
    fail_saves: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `record`.
    pub fn with_record(record: &PersistedRecord) -> Self {
        let store = Self::new();
        store.set_raw(record.to_json().ok());
        store
    }

    /// Replace the stored blob verbatim.
    pub fn set_raw(&self, raw: Option<String>) {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = raw;
    }

    pub fn raw(&self) -> Option<String> {
        self.blob
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every record passed to `save`, in order (including failed ones).
    pub fn saves(&self) -> Vec<PersistedRecord> {
        self.saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_saved(&self) -> Option<PersistedRecord> {
        self.saves().pop()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl SessionStore for RecordingStore {
    fn load(&self) -> Result<Option<PersistedRecord>, StoreError> {
        self.raw()
            .map(|raw| PersistedRecord::from_json(&raw))
            .transpose()
            .map_err(StoreError::from)
    }

    fn save(&self, record: &PersistedRecord) -> Result<(), StoreError> {
        self.saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("simulated write failure".to_string()));
        }
        self.set_raw(Some(record.to_json()?));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.set_raw(None);
        Ok(())
    }
}
