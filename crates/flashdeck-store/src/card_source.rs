//! JSON file card source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use flashdeck_core::{CardSource, SourceError};
use serde_json::Value;

/// Reads raw card records from a JSON file.
///
/// The file holds either a top-level array of records or an object with a
/// `cards` array. Individual records are not validated here.
#[derive(Debug, Clone)]
pub struct JsonFileCardSource {
    path: PathBuf,
}

impl JsonFileCardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_error(&self, reason: impl Into<String>) -> SourceError {
        SourceError::Format {
            location: self.describe(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CardSource for JsonFileCardSource {
    async fn fetch(&self) -> Result<Vec<Value>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                location: self.describe(),
                source,
            })?;

        let document: Value =
            serde_json::from_str(&raw).map_err(|e| self.format_error(e.to_string()))?;

        let records = match document {
            Value::Array(records) => records,
            Value::Object(mut map) => match map.remove("cards") {
                Some(Value::Array(records)) => records,
                _ => return Err(self.format_error("object has no \"cards\" array")),
            },
            _ => return Err(self.format_error("expected an array of card records")),
        };

        tracing::debug!(path = %self.path.display(), count = records.len(), "Card records read");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
