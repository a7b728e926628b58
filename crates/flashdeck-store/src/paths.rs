//! Data directory resolution.
//!
//! Resolution order for the data root:
//! 1. `FLASHDECK_DATA_DIR` environment variable (highest priority)
//! 2. System data directory (e.g. `~/.local/share/flashdeck`)
//!
//! The session record lives at `<data_root>/session.json`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "FLASHDECK_DATA_DIR";

/// File name of the persisted session record.
pub const SESSION_RECORD_FILE: &str = "session.json";

/// Errors that can occur while resolving or preparing data paths.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// An empty override was provided.
    #[error("FLASHDECK_DATA_DIR is set but empty")]
    EmptyPath,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Get the root directory for flashdeck data.
///
/// Does not touch the filesystem; see [`ensure_directory`].
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::data_local_dir())
}

/// Pure resolver behind [`data_root`].
pub fn resolve_data_root(
    override_dir: Option<PathBuf>,
    system_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(path) = override_dir {
        if path.as_os_str().is_empty() {
            return Err(PathError::EmptyPath);
        }
        return Ok(path);
    }

    system_dir
        .map(|dir| dir.join("flashdeck"))
        .ok_or(PathError::NoDataDir)
}

/// Path to the persisted session record.
pub fn session_record_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(SESSION_RECORD_FILE))
}

/// Create `path` (and parents) if missing.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
