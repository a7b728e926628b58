//! Core domain types, ports, and the study-session engine for flashdeck.
//!
//! This crate holds everything about a flashcard study session that does
//! not touch the outside world: the vocabulary model, deck ingestion and
//! shuffling, navigation, flip and swipe handling, the autoplay state
//! machine, and the [`SessionEngine`] that composes them. Persistence,
//! speech, and card loading are reached only through the traits in
//! [`ports`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod events;
pub mod ports;
pub mod session;
pub mod settings;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{DeckStore, IngestReport, Level, RawCard, UnknownLevel, VocabCard};
pub use events::{SessionEvent, StopReason};
pub use ports::{
    CardSource, NoopSpeech, SessionStore, SourceError, SpeechPort, StaticCardSource, StoreError,
};
pub use session::{
    AutoplayStep, Face, PersistedRecord, ScheduledTimer, SessionCommand, SessionEngine,
    SessionError, SessionPorts, SessionSnapshot, SessionState, SwipeCommand, TimerTicket, clamp,
};
pub use settings::{ConfigError, StudyConfig, validate_config};

// Silence unused dev-dependency warnings for crates only some test modules use
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio as _;
