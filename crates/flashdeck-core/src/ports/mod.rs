//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the session engine expects from its
//! environment. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No filesystem or process types in any signature
//! - Speech and persistence are synchronous; they are invoked as the
//!   post-condition of a command and must not suspend it
//! - Card loading happens once at startup and is async

pub mod card_source;
pub mod session_store;
pub mod speech;

use thiserror::Error;

pub use card_source::{CardSource, StaticCardSource};
pub use session_store::SessionStore;
pub use speech::{NoopSpeech, SpeechPort};

/// Errors from a [`SessionStore`] implementation.
///
/// This error type abstracts away storage implementation details and gives
/// the engine a single shape to log and swallow.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage backend error (filesystem, key-value store, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored blob could not be decoded or encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error from a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a [`CardSource`] implementation.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be read.
    #[error("Failed to read card source {location}: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a JSON array of records.
    #[error("Card source {location} is not a JSON array: {reason}")]
    Format { location: String, reason: String },
}
