//! Difficulty tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five fixed vocabulary tiers, ordered easiest to hardest.
///
/// This is a closed set: values that do not name a tier are rejected at
/// the boundary (ingestion, persisted-record decoding) and never
/// represented internally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Beginner,
    Elementary,
    Intermediate,
    UpperIntermediate,
    Advanced,
}

impl Level {
    /// All tiers in ascending difficulty.
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Elementary,
        Self::Intermediate,
        Self::UpperIntermediate,
        Self::Advanced,
    ];

    /// Canonical wire name (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Elementary => "elementary",
            Self::Intermediate => "intermediate",
            Self::UpperIntermediate => "upper_intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// 1-based rank, `1` for the easiest tier.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Elementary => 2,
            Self::Intermediate => 3,
            Self::UpperIntermediate => 4,
            Self::Advanced => 5,
        }
    }

    /// Inverse of [`Level::rank`].
    #[must_use]
    pub const fn from_rank(rank: u64) -> Option<Self> {
        match rank {
            1 => Some(Self::Beginner),
            2 => Some(Self::Elementary),
            3 => Some(Self::Intermediate),
            4 => Some(Self::UpperIntermediate),
            5 => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Interpret a raw JSON value from a card source or persisted record.
    ///
    /// Accepts the tier name (case-insensitive, `-`/space treated as `_`)
    /// or the 1-based rank as an integer or numeric string.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => s.parse().ok(),
            serde_json::Value::Number(n) => n.as_u64().and_then(Self::from_rank),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level: {0:?}")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        if let Ok(rank) = normalized.parse::<u64>() {
            return Self::from_rank(rank).ok_or_else(|| UnknownLevel(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}
