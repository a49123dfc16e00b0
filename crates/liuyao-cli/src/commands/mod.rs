//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments into
//! core service calls and render the results.  No business logic lives here.

pub mod cast;
pub mod completions;
pub mod config;
pub mod list;
pub mod show;

use liuyao_core::application::TextCatalog;
use liuyao_adapters::{InMemoryCatalog, catalog_loader::FilesystemTextLoader};

use crate::{config::AppConfig, error::CliResult};

/// Build the text catalog the services read from.
///
/// `$LIUYAO_TEXTS_DIR` (handled inside the adapter) beats the config file's
/// `texts.data_dir`, which beats the embedded dataset.
pub fn build_catalog(config: &AppConfig) -> CliResult<Box<dyn TextCatalog>> {
    if std::env::var_os("LIUYAO_TEXTS_DIR").is_none() {
        if let Some(dir) = &config.texts.data_dir {
            let catalog = InMemoryCatalog::new();
            for text in FilesystemTextLoader::new(dir).load_all()? {
                catalog.insert(text)?;
            }
            return Ok(Box::new(catalog));
        }
    }

    Ok(Box::new(InMemoryCatalog::with_builtin()?))
}
