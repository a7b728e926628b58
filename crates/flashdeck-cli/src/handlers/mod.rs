//! Command handlers.
//!
//! Handlers are thin: resolve what they need from the bootstrap, call into
//! the core or adapters, and format output for the terminal.

pub mod paths;
pub mod reset;
pub mod stats;
pub mod study;
