//! Stats command handler.

use std::path::Path;

use crate::bootstrap::load_deck;
use crate::error::CliError;
use crate::presentation::render_stats;

/// Print per-level card counts for a card file.
pub async fn execute(cards: &Path) -> Result<(), CliError> {
    let (deck, report) = load_deck(cards).await?;
    print!("{}", render_stats(&deck.counts(), report));
    Ok(())
}
