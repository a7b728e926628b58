//! Speech port - fire-and-forget text-to-speech.
//!
//! The engine never waits on speech: visual transitions proceed on their
//! own schedule whether or not anything is actually audible.

/// Vocalizes text in a given language.
///
/// # Implementations
///
/// - `NoopSpeech` - Capability absent; everything is skipped
/// - `CommandSpeech` (flashdeck-runtime) - Shells out to a local TTS program
/// - `RecordingSpeech` (feature `test-utils`) - Records calls for assertions
pub trait SpeechPort: Send + Sync {
    /// Request that `text` be spoken using the BCP-47 `language` tag.
    ///
    /// Must not block; queueing or spawning is up to the implementation.
    fn speak(&self, text: &str, language: &str);

    /// Halt any in-progress or queued speech.
    fn cancel_all(&self);

    /// Whether speech can be produced at all in this runtime.
    ///
    /// When `false` the engine skips every `speak`/`cancel_all` call.
    fn is_available(&self) -> bool {
        true
    }
}

/// Speech port for runtimes without a speech capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpeech;

impl NoopSpeech {
    /// Create a new no-op speech port.
    pub const fn new() -> Self {
        Self
    }
}

impl SpeechPort for NoopSpeech {
    fn speak(&self, _text: &str, _language: &str) {}

    fn cancel_all(&self) {}

    fn is_available(&self) -> bool {
        false
    }
}
