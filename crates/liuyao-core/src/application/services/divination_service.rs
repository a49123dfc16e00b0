//! Divination Service - main application orchestrator.
//!
//! This service coordinates the entire divination workflow:
//! 1. Build a cast (six coin throws, or three numbers)
//! 2. Resolve the ruling for its changing-line count
//! 3. Fetch every text the ruling requires from the catalog
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CoinOracle, TextCatalog},
    },
    domain::{Cast, CoinToss, HexagramText, HexagramUsed, LineKind, Ruling, TextKind, resolve},
    error::LiuyaoResult,
};

/// A fully resolved reading, ready for the host application to render and
/// optionally persist. The core keeps no copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub cast_at: DateTime<Utc>,
    /// Line kinds bottom to top, as shown during the ceremony.
    pub lines: [LineKind; 6],
    pub changing_positions: BTreeSet<usize>,
    /// Catalog entry for the source (本卦) hexagram.
    pub source: HexagramText,
    /// Catalog entry for the transformed (变卦) hexagram, when lines moved.
    pub transformed: Option<HexagramText>,
    pub ruling: Ruling,
    /// The authoritative text the ruling selected.
    pub primary_text: String,
    /// The transformed hexagram's judgment, only in the three-changing case
    /// (secondary to the source's).
    pub secondary_text: Option<String>,
}

/// Main divination service.
///
/// Orchestrates casting, resolution, and text lookup.
pub struct DivinationService {
    catalog: Box<dyn TextCatalog>,
}

impl DivinationService {
    /// Create a new divination service with the given catalog.
    pub fn new(catalog: Box<dyn TextCatalog>) -> Self {
        Self { catalog }
    }

    /// Cast with coins: consumes exactly six tosses from the oracle.
    #[instrument(skip_all)]
    pub fn cast_coins(&self, oracle: &mut dyn CoinOracle) -> LiuyaoResult<Reading> {
        let tosses: [CoinToss; 6] = std::array::from_fn(|_| oracle.toss());
        debug!(?tosses, "coins thrown");
        let cast = Cast::from_tosses(tosses);
        self.reading(&cast)
    }

    /// Cast with three numbers (number casting always moves exactly one
    /// line).
    #[instrument(skip(self))]
    pub fn cast_numbers(&self, n1: u32, n2: u32, n3: u32) -> LiuyaoResult<Reading> {
        let cast = Cast::from_numbers(n1, n2, n3)?;
        self.reading(&cast)
    }

    /// Resolve an already-assembled cast into a reading.
    #[instrument(skip_all, fields(source = %cast.source()))]
    pub fn reading(&self, cast: &Cast) -> LiuyaoResult<Reading> {
        let source_hexagram = cast.source();
        let changing = cast.changing_positions();
        let transformed_hexagram = cast.transformed();

        let ruling = resolve(&changing, &source_hexagram, transformed_hexagram.as_ref())?;
        info!(
            changing = changing.len(),
            rule = %ruling.rule,
            "ruling resolved"
        );

        let source = self.catalog.by_key(&source_hexagram.key())?;
        let transformed = transformed_hexagram
            .as_ref()
            .map(|hexagram| self.catalog.by_key(&hexagram.key()))
            .transpose()?;

        let (primary_text, secondary_text) = select_texts(&ruling, &source, transformed.as_ref())?;

        Ok(Reading {
            cast_at: Utc::now(),
            lines: cast.lines().map(|line| line.kind()),
            changing_positions: changing,
            source,
            transformed,
            ruling,
            primary_text,
            secondary_text,
        })
    }
}

// -------------------------------------------------------------------------
// Internal Helpers
// -------------------------------------------------------------------------

/// Fetch the texts the ruling names, failing loudly when one is absent.
fn select_texts(
    ruling: &Ruling,
    source: &HexagramText,
    transformed: Option<&HexagramText>,
) -> LiuyaoResult<(String, Option<String>)> {
    let authoritative = match ruling.hexagram_used {
        HexagramUsed::Source | HexagramUsed::Both => source,
        HexagramUsed::Transformed => transformed.ok_or(ApplicationError::ValidationFailed(
            "ruling names the transformed hexagram but none was resolved".into(),
        ))?,
    };

    let primary = match ruling.text_kind {
        TextKind::Judgment => judgment_of(authoritative)?,
        TextKind::LineText => {
            let position = ruling
                .target_line
                .ok_or(ApplicationError::ValidationFailed(
                    "line-text ruling without a target line".into(),
                ))?;
            authoritative
                .line_text(position)
                .ok_or_else(|| missing(authoritative, line_label(ruling, position)))?
                .to_string()
        }
        TextKind::UseNine => authoritative
            .use_nine
            .clone()
            .ok_or_else(|| missing(authoritative, "用九".into()))?,
        TextKind::UseSix => authoritative
            .use_six
            .clone()
            .ok_or_else(|| missing(authoritative, "用六".into()))?,
    };

    let secondary = match ruling.hexagram_used {
        HexagramUsed::Both => {
            let transformed = transformed.ok_or(ApplicationError::ValidationFailed(
                "three-changing ruling without a transformed hexagram".into(),
            ))?;
            Some(judgment_of(transformed)?)
        }
        _ => None,
    };

    Ok((primary, secondary))
}

fn judgment_of(entry: &HexagramText) -> LiuyaoResult<String> {
    if entry.judgment.is_empty() {
        return Err(missing(entry, "卦辞".into()).into());
    }
    Ok(entry.judgment.clone())
}

fn line_label(ruling: &Ruling, position: usize) -> String {
    ruling
        .line_name
        .clone()
        .unwrap_or_else(|| format!("line {position}"))
}

fn missing(entry: &HexagramText, text: String) -> ApplicationError {
    ApplicationError::MissingHexagramData {
        hexagram: format!("{} ({})", entry.name, entry.key),
        text,
    }
}
