//! Card source port - where raw vocabulary records come from.

use async_trait::async_trait;

use super::SourceError;

/// Supplies the raw card records loaded once at startup.
///
/// Records are returned as untyped JSON so that ingestion, not the source,
/// decides which ones survive.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetch every raw record.
    async fn fetch(&self) -> Result<Vec<serde_json::Value>, SourceError>;

    /// Human-readable origin for logs.
    fn describe(&self) -> String;
}

/// A card source backed by records already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCardSource {
    records: Vec<serde_json::Value>,
}

impl StaticCardSource {
    pub const fn new(records: Vec<serde_json::Value>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CardSource for StaticCardSource {
    async fn fetch(&self) -> Result<Vec<serde_json::Value>, SourceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} records>", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeckStore, Level};
    use serde_json::json;

    #[tokio::test]
    async fn static_source_feeds_ingestion() {
        let source = StaticCardSource::new(vec![
            json!({"frontText": "책", "backText": "book", "level": "elementary"}),
            json!({"frontText": "broken"}),
        ]);

        let (store, report) = DeckStore::ingest(source.fetch().await.unwrap());
        assert_eq!(report.accepted, 1);
        assert_eq!(report.dropped, 1);
        assert_eq!(store.len(Level::Elementary), 1);
        assert_eq!(source.describe(), "<memory: 2 records>");
    }
}
