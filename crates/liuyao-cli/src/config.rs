//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`LIUYAO_OUTPUT__NO_COLOR=true`, ...)
//! 3. Config file (`--config FILE`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Hexagram text settings.
    pub texts: TextsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextsConfig {
    /// Directory of per-hexagram JSON files to use instead of the embedded
    /// dataset.  `$LIUYAO_TEXTS_DIR` takes priority over this.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            texts: TextsConfig { data_dir: None },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  When given
    /// it must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.clone()).required(true)),
            None => builder.add_source(File::from(Self::config_path()).required(false)),
        };

        // LIUYAO_OUTPUT__FORMAT=plain → output.format
        builder = builder.add_source(Environment::with_prefix("LIUYAO").separator("__"));

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.liuyao.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "liuyao", "liuyao")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".liuyao.toml"))
    }
}
