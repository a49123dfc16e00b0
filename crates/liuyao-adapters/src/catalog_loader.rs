//! Filesystem-based hexagram text loader.
//!
//! Discovers and parses per-hexagram JSON files from a directory tree,
//! converting them into domain [`HexagramText`] entries ready for a catalog.
//!
//! # Directory layout expected
//!
//! ```text
//! texts/
//! ├── 01-qian.json          ← one entry per file; names are free-form
//! ├── 02-kun.json
//! └── extra/
//!     └── 41-sun.json       ← subdirectories are walked too
//! ```
//!
//! # File format
//!
//! ```json
//! {
//!   "number": 1,
//!   "key": "111111",
//!   "name": "乾",
//!   "full_name": "乾为天",
//!   "judgment": "乾：元，亨，利，贞。",
//!   "lines": ["潜龙勿用。", "…", "…", "…", "…", "亢龙有悔。"],
//!   "use_nine": "见群龙无首，吉。"
//! }
//! ```
//!
//! `lines` is positional, bottom line first.  `use_nine` / `use_six` are only
//! accepted on the pure-yang / pure-yin hexagram.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use liuyao_core::{application::ApplicationError, domain::HexagramText, error::LiuyaoResult};

/// Loads [`HexagramText`] entries from a directory of JSON files.
///
/// Every `*.json` file under `texts_dir` (recursively) is parsed as one
/// entry.  Files that fail to parse or validate emit a `WARN` log and are
/// skipped — they do not prevent other entries from loading.
pub struct FilesystemTextLoader {
    texts_dir: PathBuf,
}

impl FilesystemTextLoader {
    /// Create a loader pointed at `texts_dir`.
    ///
    /// The directory does not need to exist yet; [`load_all`] will return an
    /// error if it is missing when called.
    ///
    /// [`load_all`]: Self::load_all
    pub fn new(texts_dir: impl Into<PathBuf>) -> Self {
        Self {
            texts_dir: texts_dir.into(),
        }
    }

    /// Load every valid entry found under `texts_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::CatalogLoadError`] if the directory does
    /// not exist or cannot be walked.  Individual files that are malformed or
    /// fail validation are **skipped with a `WARN` log** rather than failing
    /// the whole batch.
    #[instrument(skip(self), fields(dir = %self.texts_dir.display()))]
    pub fn load_all(&self) -> LiuyaoResult<Vec<HexagramText>> {
        if !self.texts_dir.exists() {
            return Err(ApplicationError::CatalogLoadError {
                reason: format!("texts directory not found: {}", self.texts_dir.display()),
            }
            .into());
        }

        let mut texts = Vec::new();

        for entry_result in WalkDir::new(&self.texts_dir) {
            let entry = entry_result.map_err(|e| ApplicationError::CatalogLoadError {
                reason: format!(
                    "failed to walk texts directory '{}': {e}",
                    self.texts_dir.display()
                ),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match load_file(path) {
                Ok(text) => {
                    debug!(key = %text.key, name = %text.name, "loaded hexagram text");
                    texts.push(text);
                }
                Err(e) => {
                    // One bad file must not block all others.
                    warn!(
                        file  = %path.display(),
                        error = %e,
                        "skipping text file due to load error"
                    );
                }
            }
        }

        debug!(count = texts.len(), "finished loading hexagram texts");
        Ok(texts)
    }
}

fn load_file(path: &Path) -> LiuyaoResult<HexagramText> {
    let raw = fs::read_to_string(path).map_err(|e| ApplicationError::CatalogLoadError {
        reason: format!("failed to read '{}': {e}", path.display()),
    })?;

    let text: HexagramText =
        serde_json::from_str(&raw).map_err(|e| ApplicationError::CatalogLoadError {
            reason: format!("failed to parse '{}': {e}", path.display()),
        })?;

    text.validate()
        .map_err(liuyao_core::error::LiuyaoError::Domain)?;
    Ok(text)
}
