//! Liuyao Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Liuyao
//! I Ching divination tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           liuyao-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (DivinationService, CatalogService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: TextCatalog, CoinOracle)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     liuyao-adapters (Infrastructure)    │
//! │   (InMemoryCatalog, RandomOracle, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Line, Hexagram, Cast, the 7-case      │
//! │   ruling)  No External Dependencies     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use liuyao_core::application::DivinationService;
//!
//! // catalog: Box<dyn TextCatalog>, oracle: impl CoinOracle
//! let service = DivinationService::new(catalog);
//! let reading = service.cast_coins(&mut oracle)?;
//! println!("{}", reading.primary_text);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, DivinationService, HexagramSelector, HexagramSummary, Reading,
        ports::{CoinOracle, TextCatalog},
    };
    pub use crate::domain::{
        Cast, CoinFace, CoinToss, Hexagram, HexagramText, HexagramUsed, Line, LineKind, Polarity,
        Ruling, TextKind, Trigram, resolve,
    };
    pub use crate::error::{LiuyaoError, LiuyaoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
