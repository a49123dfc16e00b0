//! Coin oracle implementations.

pub mod random;
pub mod scripted;

pub use random::RandomOracle;
pub use scripted::ScriptedOracle;
