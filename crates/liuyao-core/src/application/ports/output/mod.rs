//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `liuyao-adapters` crate provides implementations.

use crate::domain::{CoinToss, HexagramText};
use crate::error::LiuyaoResult;

/// Port for hexagram text lookup.
///
/// Implemented by:
/// - `liuyao_adapters::catalog::InMemoryCatalog` (built-in dataset)
/// - stub catalogs in tests
///
/// ## Design Notes
///
/// - Read-only from the core's perspective; safe to share across calls
/// - Lookup is by canonical six-bit key or King Wen number — the key ↔
///   number bijection lives in the data, never in core code
#[cfg_attr(test, mockall::automock)]
pub trait TextCatalog: Send + Sync {
    /// Entry for the hexagram with the given canonical key.
    fn by_key(&self, key: &str) -> LiuyaoResult<HexagramText>;

    /// Entry for the given King Wen sequence number (1–64).
    fn by_number(&self, number: u8) -> LiuyaoResult<HexagramText>;

    /// All entries, ordered by King Wen number.
    fn list(&self) -> LiuyaoResult<Vec<HexagramText>>;
}

/// Port for coin randomness.
///
/// Implemented by:
/// - `liuyao_adapters::oracle::RandomOracle` (OS entropy or a fixed seed)
/// - `liuyao_adapters::oracle::ScriptedOracle` (replays real-world throws)
///
/// Randomness never lives in the core crate; a casting consumes exactly six
/// tosses from whichever oracle the host supplies.
pub trait CoinOracle: Send {
    /// One throw of three coins.
    fn toss(&mut self) -> CoinToss;
}
