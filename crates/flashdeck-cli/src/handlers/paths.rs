//! Paths command handler.
//!
//! Displays resolved paths for diagnostics in `key = value` format.

use std::path::Path;

use flashdeck_store::{data_root, session_record_path};

use crate::error::CliError;

/// Print the data directory, record path, and config file in use.
pub fn execute(config: Option<&Path>) -> Result<(), CliError> {
    println!("data_dir = {}", data_root()?.display());
    println!("session_record = {}", session_record_path()?.display());
    match config {
        Some(path) => println!("config = {}", path.display()),
        None => println!("config = (defaults)"),
    }
    Ok(())
}
