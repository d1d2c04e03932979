//! # Error Types
//!
//! Structured error types for quote_core. The quote engine itself is total
//! and never returns an error; these cover the surfaces around it (currency
//! formatting, JSON requests, CLI input).
//!
//! ## Example
//!
//! ```rust
//! use quote_core::errors::{QuoteError, QuoteResult};
//!
//! fn require_code(code: &str) -> QuoteResult<()> {
//!     if code.len() != 3 {
//!         return Err(QuoteError::invalid_currency_code(code));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_code("MX").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quote operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
    /// Currency code is not a three-letter alphabetic code
    #[error("Invalid currency code: '{code}'")]
    InvalidCurrencyCode { code: String },

    /// Currency code is well-formed but not in the supported list
    #[error("Unsupported currency: '{code}'")]
    UnsupportedCurrency { code: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Input could not be read from its source (stdin, file, prompt)
    #[error("Input error: {source_name} - {reason}")]
    InputError { source_name: String, reason: String },
}

impl QuoteError {
    /// Create an InvalidCurrencyCode error
    pub fn invalid_currency_code(code: impl Into<String>) -> Self {
        QuoteError::InvalidCurrencyCode { code: code.into() }
    }

    /// Create an UnsupportedCurrency error
    pub fn unsupported_currency(code: impl Into<String>) -> Self {
        QuoteError::UnsupportedCurrency { code: code.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        QuoteError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create an InputError
    pub fn input_error(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        QuoteError::InputError {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::InvalidCurrencyCode { .. } => "INVALID_CURRENCY_CODE",
            QuoteError::UnsupportedCurrency { .. } => "UNSUPPORTED_CURRENCY",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
            QuoteError::InputError { .. } => "INPUT_ERROR",
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        QuoteError::serialization(err.to_string())
    }
}
