//! Root CLI parser and global options.

use std::path::PathBuf;

use clap::{Args, Parser};
use flashdeck_core::Level;
use flashdeck_runtime::DEFAULT_SPEECH_PROGRAM;

use crate::commands::Commands;

/// Flashcard study sessions in the terminal.
#[derive(Debug, Parser)]
#[command(name = "flashdeck")]
#[command(about = "Study vocabulary flashcards with autoplay and speech")]
#[command(version)]
pub struct Cli {
    /// JSON file with study settings
    #[arg(long, global = true, env = "FLASHDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub overrides: ConfigOverrides,

    #[command(flatten)]
    pub speech: SpeechArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-field overrides applied on top of the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Front display time during autoplay, in milliseconds
    #[arg(long, global = true, env = "FLASHDECK_FRONT_DISPLAY_MS")]
    pub front_ms: Option<u64>,

    /// Back display time during autoplay, in milliseconds
    #[arg(long, global = true, env = "FLASHDECK_BACK_DISPLAY_MS")]
    pub back_ms: Option<u64>,

    /// Minimum horizontal swipe distance
    #[arg(long, global = true, env = "FLASHDECK_SWIPE_THRESHOLD")]
    pub swipe_threshold: Option<f32>,

    /// Speech language for the front face
    #[arg(long, global = true, env = "FLASHDECK_FRONT_LANGUAGE")]
    pub front_language: Option<String>,

    /// Speech language for the back face
    #[arg(long, global = true, env = "FLASHDECK_BACK_LANGUAGE")]
    pub back_language: Option<String>,

    /// Level to open when nothing was saved (name or 1-5)
    #[arg(long, global = true, env = "FLASHDECK_DEFAULT_LEVEL")]
    pub level: Option<Level>,

    /// Return to each level's last card when switching levels
    #[arg(long, global = true, env = "FLASHDECK_RESUME_LEVEL_POSITIONS")]
    pub resume_level_positions: bool,

    /// Do not speak when a card is flipped by hand
    #[arg(long, global = true, env = "FLASHDECK_QUIET_FLIP")]
    pub quiet_flip: bool,
}

/// Speech output selection.
#[derive(Debug, Clone, Args)]
pub struct SpeechArgs {
    /// Text-to-speech program invoked as `<program> -v <voice> <text>`
    #[arg(long, global = true, env = "FLASHDECK_SPEECH_PROGRAM", default_value = DEFAULT_SPEECH_PROGRAM)]
    pub speech_program: String,

    /// Disable speech entirely
    #[arg(long, global = true, env = "FLASHDECK_MUTE")]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_study_command() {
        let cli = Cli::parse_from([
            "flashdeck",
            "study",
            "--cards",
            "deck.json",
            "--seed",
            "42",
        ]);
        match cli.command {
            Commands::Study { cards, seed } => {
                assert_eq!(cards, PathBuf::from("deck.json"));
                assert_eq!(seed, Some(42));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::parse_from([
            "flashdeck",
            "-v",
            "reset",
            "--front-ms",
            "1500",
            "--level",
            "upper-intermediate",
            "--mute",
        ]);
        assert!(cli.verbose);
        assert!(cli.speech.mute);
        assert_eq!(cli.overrides.front_ms, Some(1500));
        assert_eq!(cli.overrides.level, Some(Level::UpperIntermediate));
        assert!(matches!(cli.command, Commands::Reset));
    }

    #[test]
    fn test_level_accepts_rank() {
        let cli = Cli::parse_from(["flashdeck", "paths", "--level", "5"]);
        assert_eq!(cli.overrides.level, Some(Level::Advanced));
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = Cli::try_parse_from(["flashdeck", "paths", "--level", "expert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cards_is_required_for_stats() {
        let result = Cli::try_parse_from(["flashdeck", "stats"]);
        // Only passes when FLASHDECK_CARDS happens to be set in the environment.
        if std::env::var_os("FLASHDECK_CARDS").is_none() {
            assert!(result.is_err());
        }
    }
}
