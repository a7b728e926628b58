//! Vocabulary card types.

use serde::{Deserialize, Serialize};

use super::Level;

/// A single immutable study card.
///
/// The front carries the word being studied (source language), the back
/// its translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabCard {
    front_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    alt_front_text: Option<String>,
    back_text: String,
    level: Level,
    #[serde(skip_serializing_if = "Option::is_none")]
    romanization: Option<String>,
}

impl VocabCard {
    /// Build a card from already-validated parts.
    pub fn new(front_text: impl Into<String>, back_text: impl Into<String>, level: Level) -> Self {
        Self {
            front_text: front_text.into(),
            alt_front_text: None,
            back_text: back_text.into(),
            level,
            romanization: None,
        }
    }

    /// Attach an alternative spelling of the front text.
    #[must_use]
    pub fn with_alt_front_text(mut self, alt: impl Into<String>) -> Self {
        self.alt_front_text = Some(alt.into());
        self
    }

    /// Attach a romanized reading of the front text.
    #[must_use]
    pub fn with_romanization(mut self, romanization: impl Into<String>) -> Self {
        self.romanization = Some(romanization.into());
        self
    }

    pub fn front_text(&self) -> &str {
        &self.front_text
    }

    pub fn alt_front_text(&self) -> Option<&str> {
        self.alt_front_text.as_deref()
    }

    pub fn back_text(&self) -> &str {
        &self.back_text
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub fn romanization(&self) -> Option<&str> {
        self.romanization.as_deref()
    }
}

/// A card record exactly as it arrives from a card source.
///
/// Every field is optional and `level` is kept as raw JSON so that a
/// single bad record never fails the whole batch; [`RawCard::validate`]
/// decides whether it becomes a [`VocabCard`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub front_text: Option<String>,
    pub alt_front_text: Option<String>,
    pub back_text: Option<String>,
    pub level: Option<serde_json::Value>,
    pub romanization: Option<String>,
}

impl RawCard {
    /// Convert into a [`VocabCard`], or `None` when a required field is
    /// missing/blank or the level is outside the closed tier set.
    pub fn validate(self) -> Option<VocabCard> {
        let front_text = non_blank(self.front_text)?;
        let back_text = non_blank(self.back_text)?;
        let level = self.level.as_ref().and_then(Level::from_json)?;

        Some(VocabCard {
            front_text,
            alt_front_text: non_blank(self.alt_front_text),
            back_text,
            level,
            romanization: non_blank(self.romanization),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawCard {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn complete_record_validates() {
        let card = raw(json!({
            "frontText": "사과",
            "altFrontText": "沙果",
            "backText": "apple",
            "level": "beginner",
            "romanization": "sagwa"
        }))
        .validate()
        .unwrap();

        assert_eq!(card.front_text(), "사과");
        assert_eq!(card.alt_front_text(), Some("沙果"));
        assert_eq!(card.back_text(), "apple");
        assert_eq!(card.level(), Level::Beginner);
        assert_eq!(card.romanization(), Some("sagwa"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let card = raw(json!({"frontText": "물", "backText": "water", "level": 2}))
            .validate()
            .unwrap();
        assert_eq!(card.level(), Level::Elementary);
        assert!(card.alt_front_text().is_none());
        assert!(card.romanization().is_none());
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(raw(json!({"backText": "water", "level": 1})).validate().is_none());
        assert!(raw(json!({"frontText": "물", "level": 1})).validate().is_none());
        assert!(raw(json!({"frontText": "물", "backText": "water"})).validate().is_none());
        assert!(
            raw(json!({"frontText": "  ", "backText": "water", "level": 1}))
                .validate()
                .is_none()
        );
    }

    #[test]
    fn unknown_level_is_rejected() {
        let record = raw(json!({"frontText": "물", "backText": "water", "level": "expert"}));
        assert!(record.validate().is_none());
    }

    #[test]
    fn blank_optional_fields_collapse_to_none() {
        let card = raw(json!({
            "frontText": "물",
            "backText": "water",
            "level": 1,
            "romanization": ""
        }))
        .validate()
        .unwrap();
        assert!(card.romanization().is_none());
    }
}
