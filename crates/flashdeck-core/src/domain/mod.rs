//! Core domain types.
//!
//! These types represent the pure vocabulary model, independent of any
//! infrastructure concerns (files, speech engines, timers).
//!
//! # Structure
//!
//! - `level` - The closed set of difficulty tiers
//! - `card` - Immutable cards and their raw source shape
//! - `deck` - Per-level collections with ingestion and shuffle

mod card;
mod deck;
mod level;

pub use card::{RawCard, VocabCard};
pub use deck::{DeckStore, IngestReport};
pub use level::{Level, UnknownLevel};
