// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Liuyao.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All randomness and text data arrive via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No randomness**: Coin throws come in through the `CoinOracle` port
//! - **Immutable values**: Lines and hexagrams are fixed at generation time
//! - **Rich domain model**: Behavior lives on the value objects, not services
//!
// Public API - what the world sees
pub mod cast;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod resolution;
pub mod text;
pub mod trigram;

// Re-exports for convenience
pub use cast::{Cast, MAX_CAST_NUMBER};
pub use error::{DomainError, ErrorCategory};
pub use hexagram::Hexagram;
pub use line::{CoinFace, CoinToss, Line, LineKind, Polarity, line_name};
pub use resolution::{HexagramUsed, Ruling, TextKind, resolve};
pub use text::HexagramText;
pub use trigram::Trigram;
