//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the legal corpus search engine, providing
//! the error taxonomy shared by all system components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from corpus loading, configuration, and queries
//! - **Output**: Structured error types with context
//! - **Error Categories**: Corpus, Configuration, Query, Internal
//!
//! ## Propagation Policy
//! - Startup errors (`CorpusUnreadable`, `Config`) are fatal: the process must
//!   not begin serving.
//! - Per-request errors (`InvalidSearchQuery`) are isolated to the request and
//!   surfaced to the caller as a rejected request.
//! - A single malformed corpus entry is never an error at all: the loader skips
//!   it with a warning and the corpus proceeds with the remaining entries.
//! - `Internal` indicates an invariant violation (a programming defect), not a
//!   recoverable runtime condition.

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error types for the legal corpus search engine
#[derive(Debug, Error)]
pub enum SearchError {
    /// Corpus source missing or unreadable entirely; fatal at startup
    #[error("Corpus at '{path}' is unreadable: {details}")]
    CorpusUnreadable { path: String, details: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Invalid search query, rejected per request
    #[error("Invalid search query: {query} - {reason}")]
    InvalidSearchQuery { query: String, reason: String },

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl SearchError {
    /// Whether the error aborts the process rather than a single request
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SearchError::CorpusUnreadable { .. } | SearchError::Config { .. }
        )
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            SearchError::CorpusUnreadable { .. } => "corpus",
            SearchError::Config { .. } | SearchError::ValidationFailed { .. } => "configuration",
            SearchError::InvalidSearchQuery { .. } => "query",
            SearchError::Internal { .. } => "internal",
            SearchError::Io(_) | SearchError::Json(_) | SearchError::Toml(_) => "io",
        }
    }
}

/// Helper macro for internal invariant violations
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::errors::SearchError::Internal {
            message: $msg.to_string(),
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::errors::SearchError::Internal {
            message: format!($fmt, $($arg)*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let load = SearchError::CorpusUnreadable {
            path: "./docs".to_string(),
            details: "not found".to_string(),
        };
        assert!(load.is_fatal());

        let query = SearchError::InvalidSearchQuery {
            query: "".to_string(),
            reason: "empty".to_string(),
        };
        assert!(!query.is_fatal());
        assert_eq!(query.category(), "query");
    }
}
