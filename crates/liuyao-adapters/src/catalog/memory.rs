//! In-memory hexagram text catalog with the built-in dataset.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use liuyao_core::{
    application::{ApplicationError, ports::TextCatalog},
    domain::HexagramText,
    error::LiuyaoResult,
};

use crate::builtin_texts;

/// Thread-safe in-memory catalog, keyed by the canonical six-bit key.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<String, HexagramText>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog with the built-in texts loaded (honouring the
    /// `$LIUYAO_TEXTS_DIR` override).
    pub fn with_builtin() -> LiuyaoResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load the built-in texts into this catalog.
    pub fn load_builtin(&self) -> LiuyaoResult<()> {
        let texts = builtin_texts::all_texts()?;

        for text in texts {
            self.insert(text)?;
        }

        Ok(())
    }

    /// Insert one entry, validating it first.  Re-inserting a key replaces
    /// the previous entry.
    pub fn insert(&self, text: HexagramText) -> LiuyaoResult<()> {
        text.validate().map_err(liuyao_core::error::LiuyaoError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner.insert(text.key.clone(), text);
        Ok(())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    pub fn clear(&self) -> LiuyaoResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCatalog for InMemoryCatalog {
    fn by_key(&self, key: &str) -> LiuyaoResult<HexagramText> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner.get(key).cloned().ok_or_else(|| {
            ApplicationError::HexagramNotFound {
                selector: key.to_string(),
            }
            .into()
        })
    }

    fn by_number(&self, number: u8) -> LiuyaoResult<HexagramText> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        inner
            .values()
            .find(|text| text.number == number)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::HexagramNotFound {
                    selector: number.to_string(),
                }
                .into()
            })
    }

    fn list(&self) -> LiuyaoResult<Vec<HexagramText>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        // The port promises King Wen order; the map iterates arbitrarily.
        let mut entries: Vec<HexagramText> = inner.values().cloned().collect();
        entries.sort_by_key(|text| text.number);
        Ok(entries)
    }
}
