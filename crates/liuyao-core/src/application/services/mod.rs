//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "cast with coins" or "show a hexagram".

pub mod catalog_service;
pub mod divination_service;

pub use catalog_service::{CatalogService, HexagramSelector, HexagramSummary};
pub use divination_service::{DivinationService, Reading};
