//! Error handling for TaxonBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the TaxonBuddy application
#[derive(Error, Debug)]
pub enum TaxonBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("iNaturalist API error: {0}")]
    Taxa(#[from] TaxaError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// iNaturalist taxa API specific errors
#[derive(Error, Debug)]
pub enum TaxaError {
    #[error("taxa API request failed: {0}")]
    RequestFailed(String),

    #[error("taxa API timeout")]
    Timeout,

    #[error("malformed taxa response: {0}")]
    InvalidResponse(String),

    #[error("taxa service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for TaxonBuddy operations
pub type Result<T> = std::result::Result<T, TaxonBuddyError>;

/// Result type alias for taxa API operations
pub type TaxaResult<T> = std::result::Result<T, TaxaError>;

impl TaxonBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TaxonBuddyError::Telegram(_) => true,
            TaxonBuddyError::Taxa(_) => true,
            TaxonBuddyError::Config(_) => false,
            TaxonBuddyError::Http(_) => true,
            TaxonBuddyError::Serialization(_) => false,
            TaxonBuddyError::Io(_) => true,
            TaxonBuddyError::UrlParse(_) => false,
            TaxonBuddyError::InvalidInput(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = TaxonBuddyError::Config("missing token".to_string());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_taxa_errors_are_recoverable() {
        let err = TaxonBuddyError::Taxa(TaxaError::Timeout);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_taxa_error_display() {
        let err = TaxaError::InvalidResponse("missing field `name`".to_string());
        assert_eq!(
            err.to_string(),
            "malformed taxa response: missing field `name`"
        );
    }
}
