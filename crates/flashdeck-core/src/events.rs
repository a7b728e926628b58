//! Events emitted by the session engine.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag for frontend compatibility:
//!
//! ```json
//! { "type": "autoplay_stopped", "reason": "navigation" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Level;
use crate::session::Face;

/// Why autoplay left the `Playing` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Explicit stop or toggle.
    User,
    /// Manual next/previous/seek or a swipe.
    Navigation,
    LevelChange,
    Shuffle,
    /// Engine disposed.
    Teardown,
}

/// Observable changes, in the order they were committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    AutoplayStarted { level: Level, index: usize },

    AutoplayStopped { reason: StopReason },

    /// A `(level, index)` pair was committed and written to the store.
    PositionChanged { level: Level, index: usize },

    Flipped { face: Face },

    Shuffled { level: Level },
}
