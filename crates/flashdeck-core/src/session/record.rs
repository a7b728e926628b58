//! The single durable session record.
//!
//! # Wire Format
//!
//! ```json
//! { "level": "intermediate", "positions": { "beginner": 4, "intermediate": 12 }, "savedAt": "2026-10-19T08:00:00Z" }
//! ```
//!
//! Decoding is lenient about tier names (unknown names are dropped) but
//! strict about shape: a `level` that is missing or neither a string nor a
//! rank, a non-object `positions`, or a negative/non-integer index makes the
//! whole record malformed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Level;

/// Last committed study position, one per user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireRecord", into = "WireRecord")]
pub struct PersistedRecord {
    /// Most recently selected level; `None` when the stored name is not a tier.
    pub level: Option<Level>,
    /// Remembered index per level.
    pub positions: BTreeMap<Level, usize>,
    /// When the record was written, if known.
    pub saved_at: Option<DateTime<Utc>>,
}

impl PersistedRecord {
    /// A record pointing at `index` within `level`.
    pub fn at(level: Level, index: usize) -> Self {
        let mut record = Self {
            level: Some(level),
            ..Self::default()
        };
        record.positions.insert(level, index);
        record
    }

    /// Remembered index for a level, if any.
    pub fn position(&self, level: Level) -> Option<usize> {
        self.positions.get(&level).copied()
    }

    /// Merge a committed position: the level's entry is replaced, other
    /// levels keep theirs, and `level` becomes the most recent one.
    pub fn commit(&mut self, level: Level, index: usize, saved_at: DateTime<Utc>) {
        self.level = Some(level);
        self.positions.insert(level, index);
        self.saved_at = Some(saved_at);
    }

    /// Decode from the stored JSON blob.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Encode to the stored JSON blob.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    level: WireLevel,
    #[serde(default)]
    positions: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// A stored tier: its name or 1-based rank. Any other JSON type is a
/// schema mismatch and fails the whole record.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WireLevel {
    Name(String),
    Rank(u64),
}

impl WireLevel {
    fn resolve(&self) -> Option<Level> {
        match self {
            Self::Name(name) => name.parse().ok(),
            Self::Rank(rank) => Level::from_rank(*rank),
        }
    }
}

impl From<WireRecord> for PersistedRecord {
    fn from(wire: WireRecord) -> Self {
        let positions = wire
            .positions
            .into_iter()
            .filter_map(|(name, index)| {
                let level = name.parse::<Level>().ok()?;
                let index = usize::try_from(index).ok()?;
                Some((level, index))
            })
            .collect();

        Self {
            level: wire.level.resolve(),
            positions,
            saved_at: wire.saved_at,
        }
    }
}

impl From<PersistedRecord> for WireRecord {
    fn from(record: PersistedRecord) -> Self {
        Self {
            level: WireLevel::Name(
                record.level.map_or_else(String::new, |l| l.as_str().to_string()),
            ),
            positions: record
                .positions
                .into_iter()
                .map(|(level, index)| (level.as_str().to_string(), index as u64))
                .collect(),
            saved_at: record.saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_tier_names() {
        let record = PersistedRecord::at(Level::UpperIntermediate, 3);
        let json = record.to_json().unwrap();
        assert!(json.contains("\"level\":\"upper_intermediate\""));
        assert!(json.contains("\"upper_intermediate\":3"));
        assert!(!json.contains("savedAt"));
    }

    #[test]
    fn decodes_what_it_encodes() {
        let mut record = PersistedRecord::at(Level::Beginner, 2);
        record.commit(Level::Advanced, 9, Utc::now());
        let decoded = PersistedRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(decoded.level, Some(Level::Advanced));
        assert_eq!(decoded.position(Level::Beginner), Some(2));
        assert_eq!(decoded.position(Level::Advanced), Some(9));
        assert!(decoded.saved_at.is_some());
    }

    #[test]
    fn unknown_level_names_are_dropped() {
        let decoded = PersistedRecord::from_json(
            r#"{"level":"expert","positions":{"expert":4,"elementary":1}}"#,
        )
        .unwrap();
        assert_eq!(decoded.level, None);
        assert_eq!(decoded.positions.len(), 1);
        assert_eq!(decoded.position(Level::Elementary), Some(1));
    }

    #[test]
    fn missing_positions_default_to_empty() {
        let decoded = PersistedRecord::from_json(r#"{"level":"advanced"}"#).unwrap();
        assert_eq!(decoded.level, Some(Level::Advanced));
        assert!(decoded.positions.is_empty());
    }

    #[test]
    fn level_may_be_stored_as_rank() {
        let decoded = PersistedRecord::from_json(r#"{"level":4,"positions":{}}"#).unwrap();
        assert_eq!(decoded.level, Some(Level::UpperIntermediate));

        let decoded = PersistedRecord::from_json(r#"{"level":9,"positions":{}}"#).unwrap();
        assert_eq!(decoded.level, None);
    }

    #[test]
    fn record_without_level_still_decodes_after_encoding() {
        let record = PersistedRecord::default();
        let decoded = PersistedRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn malformed_records_fail_to_decode() {
        for raw in [
            "",
            "not json",
            "[]",
            r#"{"positions":{"beginner":1}}"#,
            r#"{"level":true,"positions":{"beginner":2}}"#,
            r#"{"level":null,"positions":{"beginner":2}}"#,
            r#"{"level":{"x":1},"positions":{"beginner":2}}"#,
            r#"{"level":["beginner"],"positions":{"beginner":2}}"#,
            r#"{"level":"beginner","positions":{"beginner":-1}}"#,
            r#"{"level":"beginner","positions":{"beginner":"two"}}"#,
            r#"{"level":"beginner","positions":[1,2]}"#,
        ] {
            assert!(PersistedRecord::from_json(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn commit_merges_into_existing_positions() {
        let mut record = PersistedRecord::at(Level::Beginner, 5);
        record.commit(Level::Intermediate, 0, Utc::now());
        assert_eq!(record.level, Some(Level::Intermediate));
        assert_eq!(record.position(Level::Beginner), Some(5));
        assert_eq!(record.position(Level::Intermediate), Some(0));
    }
}
