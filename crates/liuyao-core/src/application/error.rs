//! Application layer errors.
//!
//! These errors represent failures in orchestration and catalog access, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog has no entry for a hexagram the ruling requires.
    #[error("no catalog entry for hexagram {selector}")]
    HexagramNotFound { selector: String },

    /// The catalog entry exists, but the specific text the ruling selected
    /// (judgment, a line's text, 用九 or 用六) is missing. Never silently
    /// replaced with a default message — callers decide how to surface it.
    #[error("hexagram {hexagram} is missing its {text}")]
    MissingHexagramData { hexagram: String, text: String },

    /// Catalog access failed (lock poisoned, etc.).
    #[error("text catalog error")]
    CatalogLockError,

    /// Catalog data could not be loaded or parsed.
    #[error("failed to load catalog data: {reason}")]
    CatalogLoadError { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HexagramNotFound { selector } => vec![
                format!("No entry found for: {}", selector),
                "Use a King Wen number 1-64 or a six-digit key like 111010".into(),
                "Try: liuyao list to see every hexagram".into(),
            ],
            Self::MissingHexagramData { hexagram, text } => vec![
                format!("The dataset entry for {} has no {}", hexagram, text),
                "If you loaded a custom data directory, check that file".into(),
                "The built-in dataset carries every required text".into(),
            ],
            Self::CatalogLockError => vec![
                "The text catalog is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::CatalogLoadError { reason } => vec![
                format!("Load failed: {}", reason),
                "Check the data directory and file format".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HexagramNotFound { .. } => ErrorCategory::NotFound,
            Self::MissingHexagramData { .. } => ErrorCategory::NotFound,
            Self::CatalogLockError => ErrorCategory::Internal,
            Self::CatalogLoadError { .. } => ErrorCategory::Configuration,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
