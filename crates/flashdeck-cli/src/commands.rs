//! Subcommands.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Study a deck interactively (type `?` at the prompt for keys)
    Study {
        /// JSON file of card records
        #[arg(long, env = "FLASHDECK_CARDS")]
        cards: PathBuf,
        /// Seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how many cards each level has after ingestion
    Stats {
        /// JSON file of card records
        #[arg(long, env = "FLASHDECK_CARDS")]
        cards: PathBuf,
    },

    /// Forget the saved level and positions
    Reset,

    /// Show resolved data paths
    Paths,
}
