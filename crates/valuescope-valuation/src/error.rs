//! Valuation errors.

use thiserror::Error;

/// Result type for valuation operations.
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors raised while collecting inputs or evaluating a formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// A formula precondition or an input bound was violated
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No valuation method with this name
    #[error("Unknown valuation method: {0}")]
    UnknownMethod(String),

    /// The method has no input field with this key
    #[error("{method} has no input '{field}'")]
    UnknownField {
        /// Method short name
        method: &'static str,
        /// Requested field key
        field: String,
    },
}

impl ValuationError {
    /// Shorthand for [`ValuationError::InvalidInput`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
