//! Which face of the active card is showing.

use serde::{Deserialize, Serialize};

/// A side of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Owns the face of whichever card is currently active.
///
/// The engine calls [`FlipController::reset_to_front`] whenever the
/// active card changes, so the face never leaks across cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipController {
    face: Face,
}

impl FlipController {
    pub const fn new() -> Self {
        Self { face: Face::Front }
    }

    pub const fn face(&self) -> Face {
        self.face
    }

    pub const fn is_front(&self) -> bool {
        matches!(self.face, Face::Front)
    }

    /// Toggle and return the newly shown face.
    pub fn flip(&mut self) -> Face {
        self.face = self.face.flipped();
        self.face
    }

    pub fn reset_to_front(&mut self) {
        self.face = Face::Front;
    }

    pub fn show_back(&mut self) {
        self.face = Face::Back;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_toggles() {
        let mut flip = FlipController::new();
        assert!(flip.is_front());
        assert_eq!(flip.flip(), Face::Back);
        assert!(!flip.is_front());
        assert_eq!(flip.flip(), Face::Front);
    }

    #[test]
    fn reset_and_show_back_are_idempotent() {
        let mut flip = FlipController::new();
        flip.show_back();
        flip.show_back();
        assert_eq!(flip.face(), Face::Back);
        flip.reset_to_front();
        flip.reset_to_front();
        assert!(flip.is_front());
    }
}
