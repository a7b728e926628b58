//! Runtime error types.

use flashdeck_core::SessionError;
use thiserror::Error;

/// Errors returned by a [`StudySessionHandle`](crate::StudySessionHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The driver task has stopped; no further commands are accepted.
    #[error("Study session is no longer running")]
    Closed,

    /// The engine rejected the command.
    #[error(transparent)]
    Session(#[from] SessionError),
}
