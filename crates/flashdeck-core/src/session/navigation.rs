//! Level and index ownership.
//!
//! The controller never looks at cards; callers pass the active deck's
//! length so every published index is clamped against the deck it will be
//! used with.

use crate::domain::Level;

/// Constrain `value` to a valid index for a deck of `total` cards.
///
/// Returns `0` for an empty deck, otherwise `min(value, total - 1)`.
pub const fn clamp(value: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if value > total - 1 {
        total - 1
    } else {
        value
    }
}

/// Owns the selected level and the current index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    level: Level,
    index: usize,
}

impl NavigationController {
    /// Start at `index` within `level`, clamped to `total`.
    pub const fn new(level: Level, index: usize, total: usize) -> Self {
        Self {
            level,
            index: clamp(index, total),
        }
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Jump to `target` (slider). Returns whether the index changed.
    pub fn set_index(&mut self, target: usize, total: usize) -> bool {
        let next = clamp(target, total);
        let changed = next != self.index;
        self.index = next;
        changed
    }

    /// Manual forward step; a no-op on the last card or an empty deck.
    pub fn next(&mut self, total: usize) -> bool {
        if !self.can_go_next(total) {
            return false;
        }
        self.index += 1;
        true
    }

    /// Manual backward step; a no-op on the first card.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Autoplay step: wraps to the first card after the last one.
    pub fn advance_wrapping(&mut self, total: usize) {
        self.index = if total == 0 || self.index + 1 >= total {
            0
        } else {
            self.index + 1
        };
    }

    /// Switch level and move to `index` (clamped against the new deck).
    ///
    /// The plain level switch passes `0`; resuming a remembered position
    /// passes that instead.
    pub fn select_level(&mut self, level: Level, index: usize, total: usize) {
        self.level = level;
        self.index = clamp(index, total);
    }

    pub const fn can_go_next(&self, total: usize) -> bool {
        total > 0 && self.index + 1 < total
    }

    pub const fn can_go_previous(&self) -> bool {
        self.index > 0
    }
}
