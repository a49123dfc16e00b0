//! Catalog Service - hexagram browsing operations.
//!
//! Handles entry lookup by selector and catalog listing. Separated from
//! DivinationService for single responsibility.

use std::fmt;
use std::str::FromStr;

use crate::{
    application::{ApplicationError, ports::TextCatalog},
    domain::{Hexagram, HexagramText},
    error::LiuyaoResult,
};

/// How the user names a hexagram: King Wen number or canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexagramSelector {
    Number(u8),
    Key(String),
}

impl FromStr for HexagramSelector {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || ApplicationError::HexagramNotFound {
            selector: s.to_string(),
        };

        if let Ok(number) = s.parse::<u8>() {
            if (1..=64).contains(&number) {
                return Ok(Self::Number(number));
            }
            return Err(not_found());
        }
        let hexagram = Hexagram::from_key(s).map_err(|_| not_found())?;
        Ok(Self::Key(hexagram.key()))
    }
}

impl fmt::Display for HexagramSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// One row of a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagramSummary {
    pub number: u8,
    pub key: String,
    pub name: String,
    pub full_name: String,
}

impl From<&HexagramText> for HexagramSummary {
    fn from(entry: &HexagramText) -> Self {
        Self {
            number: entry.number,
            key: entry.key.clone(),
            name: entry.name.clone(),
            full_name: entry.full_name.clone(),
        }
    }
}

/// Service for catalog operations.
pub struct CatalogService {
    catalog: Box<dyn TextCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Box<dyn TextCatalog>) -> Self {
        Self { catalog }
    }

    /// Full entry for a selector.
    pub fn entry(&self, selector: &HexagramSelector) -> LiuyaoResult<HexagramText> {
        match selector {
            HexagramSelector::Number(number) => self.catalog.by_number(*number),
            HexagramSelector::Key(key) => self.catalog.by_key(key),
        }
    }

    /// Summaries of every hexagram, ordered by King Wen number.
    pub fn list(&self) -> LiuyaoResult<Vec<HexagramSummary>> {
        let mut entries = self.catalog.list()?;
        entries.sort_by_key(|e| e.number);
        Ok(entries.iter().map(HexagramSummary::from).collect())
    }
}
