//! Infrastructure adapters for Liuyao.
//!
//! This crate implements the ports defined in `liuyao-core::application::ports`.
//! It contains all external dependencies and I/O operations: the hexagram text
//! catalog, the filesystem loader for custom text collections, and the coin
//! oracles (random and scripted).

pub mod builtin_texts;
pub mod catalog;
pub mod catalog_loader;
pub mod oracle;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use oracle::{RandomOracle, ScriptedOracle};
