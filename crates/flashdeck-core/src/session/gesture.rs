//! Horizontal swipe recognition.

use serde::{Deserialize, Serialize};

use crate::settings::DEFAULT_SWIPE_THRESHOLD;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeCommand {
    /// Finger moved right-to-left.
    Next,
    /// Finger moved left-to-right.
    Previous,
}

/// Converts a pointer/touch start, moves, and end into a [`SwipeCommand`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDetector {
    threshold: f32,
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureDetector {
    pub const fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
            last_x: None,
        }
    }

    pub const fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a gesture is being tracked.
    pub const fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn on_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = Some(x);
    }

    /// Moves without a preceding start are ignored.
    pub fn on_move(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Finish the gesture.
    ///
    /// `distance = start - last`: beyond `+threshold` is [`SwipeCommand::Next`],
    /// beyond `-threshold` is [`SwipeCommand::Previous`], anything in between
    /// (including a tap with no movement) is nothing.
    pub fn on_end(&mut self) -> Option<SwipeCommand> {
        let (start, last) = (self.start_x.take()?, self.last_x.take()?);
        let distance = start - last;
        if distance > self.threshold {
            Some(SwipeCommand::Next)
        } else if distance < -self.threshold {
            Some(SwipeCommand::Previous)
        } else {
            None
        }
    }

    /// Abandon the gesture without emitting anything.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}
