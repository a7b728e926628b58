//! Infrastructure adapters for flashdeck.
//!
//! Implements the persistence and card-source ports from `flashdeck-core`
//! against the local filesystem, plus an in-memory store for embedding and
//! tests.

#![deny(unused_crate_dependencies)]

pub mod card_source;
pub mod paths;
pub mod session_store;

pub use card_source::JsonFileCardSource;
pub use paths::{PathError, data_root, ensure_directory, session_record_path};
pub use session_store::{JsonFileSessionStore, MemorySessionStore};

#[cfg(test)]
use tokio_test as _;
