//! Terminal front end for flashdeck.
//!
//! Parses arguments, composes the adapters, and runs an interactive study
//! prompt on top of the async session driver.

#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for crates only integration tests use
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod input;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
