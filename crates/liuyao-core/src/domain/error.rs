// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (values, not I/O handles)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Assembly Errors
    // ========================================================================
    /// A hexagram needs exactly six lines, bottom to top. Anything else is
    /// rejected outright — never truncated or padded.
    #[error("a hexagram requires exactly 6 lines, got {supplied}")]
    InvalidLineCount { supplied: usize },

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// The changing-line set handed to the resolver is structurally broken
    /// (more than six positions, a position outside 0..=5, or a non-empty
    /// set without a transformed hexagram). Cast construction makes these
    /// unreachable; the resolver still refuses to guess.
    #[error("invalid changing-line set: {reason}")]
    InvalidChangingCount { reason: String },

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Numeric-mode input outside the accepted 1–999 range.
    #[error("invalid numeric input {value}: {reason}")]
    InvalidNumericInput { value: i64, reason: String },

    /// A hexagram key that is not six '0'/'1' characters.
    #[error("invalid hexagram key '{key}': expected six binary digits")]
    InvalidHexagramKey { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidLineCount { supplied } => vec![
                format!("A casting produced {} lines instead of 6", supplied),
                "Each casting must supply six throws, bottom line first".into(),
            ],
            Self::InvalidChangingCount { reason } => vec![
                format!("Details: {}", reason),
                "This should be impossible for a generated cast — please report it".into(),
            ],
            Self::InvalidNumericInput { value, .. } => vec![
                format!("'{}' is not usable for number casting", value),
                "Supply three whole numbers between 1 and 999".into(),
                "Example: liuyao cast numbers 385 812 204".into(),
            ],
            Self::InvalidHexagramKey { key } => vec![
                format!("'{}' is not a hexagram key", key),
                "Keys are six binary digits, bottom line first (e.g. 111111 for 乾)".into(),
                "King Wen numbers 1-64 are also accepted".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidLineCount { .. }
            | Self::InvalidNumericInput { .. }
            | Self::InvalidHexagramKey { .. } => ErrorCategory::Validation,
            Self::InvalidChangingCount { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
