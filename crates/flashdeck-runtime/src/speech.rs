//! Speech through an external text-to-speech program.
//!
//! Each `speak` spawns the program with a voice argument and the text, and
//! keeps the child so that `cancel_all` (or the next `speak`) can kill it.
//! Nothing waits for the child to finish.

use std::env;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::{Mutex, PoisonError};

use flashdeck_core::SpeechPort;
use tracing::{debug, warn};

/// Default program, used when nothing else is configured.
pub const DEFAULT_SPEECH_PROGRAM: &str = "espeak-ng";

/// Speech port backed by a local TTS command such as `espeak-ng`.
#[derive(Debug)]
pub struct CommandSpeech {
    program: String,
    available: bool,
    current: Mutex<Option<Child>>,
}

impl CommandSpeech {
    /// Use `program`, reporting the capability absent if it is not on `PATH`.
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        let available = program_on_path(&program);
        if !available {
            debug!(%program, "Speech program not found on PATH");
        }
        Self {
            program,
            available,
            current: Mutex::new(None),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command_for(&self, text: &str, language: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-v").arg(voice_for(language)).arg(text);
        command
    }

    /// Replace the running child with one spawned from `command`.
    fn start(&self, mut command: Command) {
        self.kill_current();

        let spawned = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(child);
            }
            Err(e) => warn!(program = %self.program, error = %e, "Failed to start speech program"),
        }
    }

    fn kill_current(&self) {
        let child = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(mut child) = child {
            // Already-exited children report an error here; nothing to do.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl SpeechPort for CommandSpeech {
    fn speak(&self, text: &str, language: &str) {
        self.start(self.command_for(text, language));
    }

    fn cancel_all(&self) {
        self.kill_current();
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.kill_current();
    }
}

/// Map a BCP-47 tag to an espeak-style voice name.
///
/// English keeps its region (`en-us`, `en-gb`); other languages use the
/// primary subtag (`ko-KR` becomes `ko`).
pub fn voice_for(language: &str) -> String {
    let tag = language.trim().to_ascii_lowercase();
    match tag.split_once('-') {
        Some(("en", _)) => tag,
        Some((primary, _)) => primary.to_string(),
        None => tag,
    }
}

fn program_on_path(program: &str) -> bool {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file();
    }
    env::var_os("PATH").is_some_and(|paths| {
        env::split_paths(&paths).any(|dir| dir.join(program).is_file())
    })
}
