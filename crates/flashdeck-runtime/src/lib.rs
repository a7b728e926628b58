//! Async runtime pieces for flashdeck.
//!
//! [`StudySession`] drives a `SessionEngine` on a tokio task, turning the
//! engine's autoplay tickets into real timers. [`CommandSpeech`] is a
//! speech port that shells out to a local TTS program.

#![deny(unused_crate_dependencies)]

mod driver;
mod error;
pub mod speech;

pub use driver::{StudySession, StudySessionHandle};
pub use error::RuntimeError;
pub use speech::{CommandSpeech, DEFAULT_SPEECH_PROGRAM};

#[cfg(test)]
use tokio_test as _;
