//! Session engine error types.

/// Commands the engine refused.
///
/// None of these are fatal: the session state is unchanged and the caller
/// may keep issuing commands (except after [`SessionError::Disposed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Autoplay needs an active card.
    #[error("Cannot start autoplay: the selected deck is empty")]
    EmptyDeck,

    /// The engine has been torn down.
    #[error("Study session has been disposed")]
    Disposed,
}
