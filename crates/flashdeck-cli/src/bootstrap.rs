//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where concrete adapters are chosen:
//! - Session record store (via flashdeck-store)
//! - Speech output (via flashdeck-runtime, or silent)
//! - Card file source (via flashdeck-store)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use flashdeck_core::{
    CardSource, DeckStore, IngestReport, NoopSpeech, SessionEngine, SessionPorts, SessionStore,
    SpeechPort, StudyConfig,
};
use flashdeck_runtime::CommandSpeech;
use flashdeck_store::{JsonFileCardSource, JsonFileSessionStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::config::load_config;
use crate::error::CliError;
use crate::parser::{Cli, SpeechArgs};

/// Fully composed dependencies for commands that run a session.
pub struct CliContext {
    pub config: StudyConfig,
    pub store: Arc<dyn SessionStore>,
    pub speech: Arc<dyn SpeechPort>,
    pub record_path: PathBuf,
}

impl CliContext {
    /// Mount an engine over `deck`; a seed makes shuffles reproducible.
    pub fn engine(&self, deck: DeckStore, seed: Option<u64>) -> SessionEngine {
        let ports = SessionPorts::new(self.store.clone(), self.speech.clone());
        match seed {
            Some(seed) => {
                SessionEngine::with_rng(deck, ports, self.config.clone(), StdRng::seed_from_u64(seed))
            }
            None => SessionEngine::new(deck, ports, self.config.clone()),
        }
    }
}

/// Resolve configuration, storage, and speech for this invocation.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let config = load_config(cli.config.as_deref(), &cli.overrides)?;
    let file_store = JsonFileSessionStore::at_default_location()?;
    let record_path = file_store.path().to_path_buf();
    let store: Arc<dyn SessionStore> = Arc::new(file_store);

    Ok(CliContext {
        config,
        store,
        speech: build_speech(&cli.speech),
        record_path,
    })
}

/// Pick the speech adapter.
pub fn build_speech(args: &SpeechArgs) -> Arc<dyn SpeechPort> {
    if args.mute {
        return Arc::new(NoopSpeech::new());
    }
    Arc::new(CommandSpeech::new(args.speech_program.clone()))
}

/// Read and ingest a card file.
pub async fn load_deck(path: &Path) -> Result<(DeckStore, IngestReport), CliError> {
    let source = JsonFileCardSource::new(path);
    let records = source.fetch().await?;
    let (deck, report) = DeckStore::ingest(records);
    tracing::info!(
        source = %source.describe(),
        accepted = report.accepted,
        dropped = report.dropped,
        "Deck loaded"
    );
    Ok((deck, report))
}

/// Install the global tracing subscriber.
///
/// `-v` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `warn`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
