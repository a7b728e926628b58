//! CLI-specific error types and exit codes.

use flashdeck_core::{ConfigError, SourceError, StoreError};
use flashdeck_runtime::RuntimeError;
use flashdeck_store::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable, malformed, or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Card file could not be loaded.
    #[error("{0}")]
    Source(#[from] SourceError),

    /// Session record could not be read, written, or located.
    #[error("Storage error: {0}")]
    Store(String),

    /// The study session stopped unexpectedly.
    #[error("Session error: {0}")]
    Session(#[from] RuntimeError),

    /// Terminal IO failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map error to a process exit code.
    ///
    /// Follows `sysexits.h` where a category fits:
    /// - 1: General error
    /// - 66: Input file missing or unreadable
    /// - 74: IO error
    /// - 78: Configuration error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Session(_) => 1,
            Self::Source(_) => 66,              // EX_NOINPUT
            Self::Store(_) | Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78,              // EX_CONFIG
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::from(PathError::NoDataDir).exit_code(), 74);
        assert_eq!(CliError::from(RuntimeError::Closed).exit_code(), 1);
    }

    #[test]
    fn test_config_error_message_is_kept() {
        let err = CliError::from(ConfigError::EmptyLanguage("Front"));
        assert_eq!(
            err.to_string(),
            "Configuration error: Front language tag cannot be empty"
        );
    }
}
