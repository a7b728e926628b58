//! Per-level card collections.
//!
//! The store is populated once from raw source records and is read-only
//! afterwards, except for [`DeckStore::shuffle`], which permutes a single
//! level in place.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{Level, RawCard, VocabCard};

/// Outcome of ingesting a batch of raw records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// Records that became cards.
    pub accepted: usize,
    /// Records silently dropped (missing field, unknown level, wrong shape).
    pub dropped: usize,
}

/// Card collections for every level, in insertion order until shuffled.
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    decks: BTreeMap<Level, Vec<VocabCard>>,
}

impl DeckStore {
    /// An empty store with no cards at any level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated cards, preserving order.
    pub fn from_cards(cards: impl IntoIterator<Item = VocabCard>) -> Self {
        let mut store = Self::new();
        for card in cards {
            store.decks.entry(card.level()).or_default().push(card);
        }
        store
    }

    /// Build a store from raw JSON records.
    ///
    /// Records that fail to decode, miss a required field, or name a level
    /// outside the tier set are dropped. This is a tolerance policy, not a
    /// validation gate, so nothing here returns an error.
    pub fn ingest(records: impl IntoIterator<Item = serde_json::Value>) -> (Self, IngestReport) {
        let mut report = IngestReport::default();
        let cards: Vec<VocabCard> = records
            .into_iter()
            .filter_map(|value| {
                let card = serde_json::from_value::<RawCard>(value)
                    .ok()
                    .and_then(RawCard::validate);
                if card.is_some() {
                    report.accepted += 1;
                } else {
                    report.dropped += 1;
                }
                card
            })
            .collect();

        if report.dropped > 0 {
            tracing::debug!(
                accepted = report.accepted,
                dropped = report.dropped,
                "Dropped malformed card records during ingestion"
            );
        }

        (Self::from_cards(cards), report)
    }

    /// Read-only view of a level's cards in current order.
    pub fn cards_for(&self, level: Level) -> &[VocabCard] {
        self.decks.get(&level).map_or(&[], Vec::as_slice)
    }

    /// Number of cards at a level.
    pub fn len(&self, level: Level) -> usize {
        self.cards_for(level).len()
    }

    /// Whether a level has no cards.
    pub fn is_empty(&self, level: Level) -> bool {
        self.len(level) == 0
    }

    /// Card at `index` within a level, if any.
    pub fn card(&self, level: Level, index: usize) -> Option<&VocabCard> {
        self.cards_for(level).get(index)
    }

    /// Total cards across all levels.
    pub fn total(&self) -> usize {
        self.decks.values().map(Vec::len).sum()
    }

    /// Card count for every level, including empty ones.
    pub fn counts(&self) -> BTreeMap<Level, usize> {
        Level::ALL
            .into_iter()
            .map(|level| (level, self.len(level)))
            .collect()
    }

    /// Replace a level's order with a uniform random permutation.
    ///
    /// Fisher–Yates, in place. Other levels are untouched and decks of
    /// length zero or one are left as they are.
    pub fn shuffle<R: Rng>(&mut self, level: Level, rng: &mut R) {
        let Some(cards) = self.decks.get_mut(&level) else {
            return;
        };
        if cards.len() <= 1 {
            return;
        }
        cards.shuffle(rng);
    }
}
