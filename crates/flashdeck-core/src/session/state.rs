//! Session state and its render-ready snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Face;
use crate::domain::Level;

/// The engine's authoritative state, assembled from its controllers.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub selected_level: Level,
    pub current_index: usize,
    pub is_front_side: bool,
    pub is_auto_playing: bool,
}

/// Everything a view needs to draw the study widget.
///
/// An empty deck is `is_empty == true` with every affordance flag off.
// Wire-shape DTO: each bool is an independent affordance a UI toggles.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub level: Level,
    pub index: usize,
    pub total: usize,
    pub face: Face,
    pub front_text: Option<String>,
    pub alt_front_text: Option<String>,
    pub back_text: Option<String>,
    pub romanization: Option<String>,
    pub is_auto_playing: bool,
    pub is_empty: bool,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub can_autoplay: bool,
    pub counts: BTreeMap<Level, usize>,
}

impl SessionSnapshot {
    /// Text of the face currently showing.
    pub fn visible_text(&self) -> Option<&str> {
        match self.face {
            Face::Front => self.front_text.as_deref(),
            Face::Back => self.back_text.as_deref(),
        }
    }

    /// `"3 / 20"`-style progress label; `"0 / 0"` when empty.
    pub fn progress_label(&self) -> String {
        if self.is_empty {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.total)
        }
    }
}
