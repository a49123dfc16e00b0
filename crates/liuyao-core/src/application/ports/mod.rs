//! Application ports (traits) implemented by infrastructure.

pub mod output;

pub use output::{CoinOracle, TextCatalog};

#[cfg(test)]
pub use output::MockTextCatalog;
