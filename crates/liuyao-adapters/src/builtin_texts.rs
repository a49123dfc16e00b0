//! Built-in hexagram text discovery.
//!
//! This module provides [`all_texts`], the single entry-point for loading the
//! hexagram texts that ship with Liuyao.  It abstracts over the discovery
//! strategy so callers do not need to know where text collections live.
//!
//! # Text resolution order
//!
//! Texts are searched in this priority order, stopping at the first source
//! that yields at least one valid entry:
//!
//! 1. **`$LIUYAO_TEXTS_DIR`** — environment variable override.  Set this in
//!    `.env` or your shell profile to point at a custom text collection laid
//!    out as one JSON file per hexagram (see [`crate::catalog_loader`]).
//! 2. **Embedded dataset** — the complete received text of the 64 hexagrams,
//!    compiled into the binary.  This is always available, so unlike a
//!    directory probe it can never come back empty.
//!
//! Entries from an override directory that fail validation are skipped with a
//! `WARN`; a directory that exists but yields nothing valid falls through to
//! the embedded dataset.
//!
//! # Environment variable
//!
//! ```env
//! LIUYAO_TEXTS_DIR=./texts
//! ```
//!
//! Relative paths are resolved against the current working directory at the
//! time [`all_texts`] is called.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use liuyao_core::{application::ApplicationError, domain::HexagramText, error::LiuyaoResult};

use crate::catalog_loader::FilesystemTextLoader;

/// The received text of all 64 hexagrams: judgments, line texts, and the two
/// special texts (用九 on 乾, 用六 on 坤).
const BUILTIN_DATA: &str = include_str!("../data/hexagrams.json");

// ── Public API ────────────────────────────────────────────────────────────────

/// Load all hexagram texts using the resolution order described in the module
/// docs.
///
/// # Return value
///
/// Always a non-empty `Vec` on success: when no override directory is set (or
/// it yields nothing), the embedded dataset is returned.  An error means the
/// embedded dataset itself failed to parse or validate, which is a packaging
/// defect rather than a user mistake.
///
/// # Observability
///
/// - `DEBUG` — which source was checked and whether it was used.
/// - `INFO`  — how many entries were loaded and from where.
/// - `WARN`  — if an override directory produced no usable entries.
#[instrument]
pub fn all_texts() -> LiuyaoResult<Vec<HexagramText>> {
    if let Some(dir) = override_dir() {
        debug!(path = %dir.display(), "checking $LIUYAO_TEXTS_DIR override");

        if dir.exists() {
            let loader = FilesystemTextLoader::new(&dir);
            let texts = loader.load_all()?; // propagate directory-read failures

            if texts.is_empty() {
                warn!(
                    path = %dir.display(),
                    "override directory contains no valid texts, using embedded dataset"
                );
            } else {
                info!(
                    path  = %dir.display(),
                    count = texts.len(),
                    "hexagram texts loaded from override directory"
                );
                return Ok(texts);
            }
        } else {
            warn!(
                path = %dir.display(),
                "$LIUYAO_TEXTS_DIR does not exist, using embedded dataset"
            );
        }
    }

    let texts = embedded()?;
    info!(count = texts.len(), "embedded hexagram texts loaded");
    Ok(texts)
}

/// Parse and validate the embedded dataset.
pub fn embedded() -> LiuyaoResult<Vec<HexagramText>> {
    let texts: Vec<HexagramText> =
        serde_json::from_str(BUILTIN_DATA).map_err(|e| ApplicationError::CatalogLoadError {
            reason: format!("embedded hexagram data is malformed: {e}"),
        })?;

    for text in &texts {
        text.validate()
            .map_err(|e| ApplicationError::CatalogLoadError {
                reason: format!("embedded entry {} is invalid: {e}", text.key),
            })?;
    }

    Ok(texts)
}

// ── Resolution helpers ────────────────────────────────────────────────────────

fn override_dir() -> Option<PathBuf> {
    std::env::var("LIUYAO_TEXTS_DIR").ok().map(PathBuf::from)
}
