//! Text catalog implementations.

pub mod memory;

pub use memory::InMemoryCatalog;
