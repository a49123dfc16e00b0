//! Application layer for Liuyao.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DivinationService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    DivinationService,
    HexagramSelector,
    HexagramSummary, // DTO for listing
    Reading,         // DTO for a resolved casting
};

// Re-export port traits (for adapter implementation)
pub use ports::{CoinOracle, TextCatalog};

pub use error::ApplicationError;
