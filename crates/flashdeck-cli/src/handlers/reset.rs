//! Reset command handler.

use std::path::Path;

use flashdeck_core::SessionStore;

use crate::error::CliError;

/// Delete the persisted session record. Succeeds when none exists.
pub fn execute(store: &dyn SessionStore, record_path: &Path) -> Result<(), CliError> {
    store.clear()?;
    println!("Study progress cleared ({})", record_path.display());
    Ok(())
}
