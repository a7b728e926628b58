//! Study configuration and validation.
//!
//! Pure domain types with no infrastructure dependencies. Adapters layer
//! file and environment overrides on top of [`StudyConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::Level;

/// Default front-face display time during autoplay.
pub const DEFAULT_FRONT_DISPLAY_MS: u64 = 3000;

/// Default back-face display time during autoplay.
pub const DEFAULT_BACK_DISPLAY_MS: u64 = 3000;

/// Default minimum horizontal distance for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Tunables for a study session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudyConfig {
    /// How long the front stays up before autoplay flips (T1).
    pub front_display_ms: u64,

    /// How long the back stays up before autoplay advances (T2).
    pub back_display_ms: u64,

    /// Minimum swipe distance that counts as navigation.
    pub swipe_threshold: f32,

    /// Speech language tag for the front face.
    pub front_language: String,

    /// Speech language tag for the back face.
    pub back_language: String,

    /// Level used when no session record exists.
    pub default_level: Level,

    /// Restore each level's remembered index when switching to it,
    /// instead of starting at the first card.
    pub resume_level_positions: bool,

    /// Whether a manual flip requests speech for the newly shown face.
    pub speak_on_flip: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            front_display_ms: DEFAULT_FRONT_DISPLAY_MS,
            back_display_ms: DEFAULT_BACK_DISPLAY_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            front_language: "ko-KR".to_string(),
            back_language: "en-US".to_string(),
            default_level: Level::Beginner,
            resume_level_positions: false,
            speak_on_flip: true,
        }
    }
}

impl StudyConfig {
    pub const fn front_display(&self) -> Duration {
        Duration::from_millis(self.front_display_ms)
    }

    pub const fn back_display(&self) -> Duration {
        Duration::from_millis(self.back_display_ms)
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be between 100 and 60000 ms, got {value}")]
    InvalidDuration { field: &'static str, value: u64 },

    #[error("Swipe threshold must be a positive finite number, got {0}")]
    InvalidSwipeThreshold(f32),

    #[error("{0} language tag cannot be empty")]
    EmptyLanguage(&'static str),
}

/// Validate configuration values.
pub fn validate_config(config: &StudyConfig) -> Result<(), ConfigError> {
    for (field, value) in [
        ("frontDisplayMs", config.front_display_ms),
        ("backDisplayMs", config.back_display_ms),
    ] {
        if !(100..=60_000).contains(&value) {
            return Err(ConfigError::InvalidDuration { field, value });
        }
    }

    if !config.swipe_threshold.is_finite() || config.swipe_threshold <= 0.0 {
        return Err(ConfigError::InvalidSwipeThreshold(config.swipe_threshold));
    }

    if config.front_language.trim().is_empty() {
        return Err(ConfigError::EmptyLanguage("Front"));
    }
    if config.back_language.trim().is_empty() {
        return Err(ConfigError::EmptyLanguage("Back"));
    }

    Ok(())
}
