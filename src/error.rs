//! Unified error types for simscore.
//!
//! Scoring itself is infallible: empty inputs and degenerate vectors score
//! 0, never error. Errors arise only at the edges, when resolving a strategy
//! identifier or loading external data.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for simscore operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SimscoreError {
    /// Errors while resolving or configuring a matching strategy
    #[error("Strategy selection failed: {context}")]
    Strategy {
        context: String,
        #[source]
        source: StrategyErrorKind,
    },

    /// Errors while loading an abbreviation table
    #[error("Abbreviation table load failed: {context}")]
    Table {
        context: String,
        #[source]
        source: TableErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific strategy error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StrategyErrorKind {
    #[error("Unknown strategy '{name}' (registered: {registered})")]
    Unknown { name: String, registered: String },
}

/// Specific abbreviation table error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TableErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for simscore operations
pub type Result<T> = std::result::Result<T, SimscoreError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SimscoreError {
    /// Create a strategy error with context
    pub fn strategy(context: impl Into<String>, source: StrategyErrorKind) -> Self {
        Self::Strategy {
            context: context.into(),
            source,
        }
    }

    /// Create an error for an unrecognized strategy identifier
    pub fn unknown_strategy(name: impl Into<String>, registered: impl Into<String>) -> Self {
        Self::strategy(
            "identifier lookup",
            StrategyErrorKind::Unknown {
                name: name.into(),
                registered: registered.into(),
            },
        )
    }

    /// Create a table error with context
    pub fn table(context: impl Into<String>, source: TableErrorKind) -> Self {
        Self::Table {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SimscoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SimscoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::table(
            "JSON deserialization",
            TableErrorKind::InvalidJson(err.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_display() {
        let err = SimscoreError::unknown_strategy("sorensen-dice", "bigram-cosine, jaccard");
        let display = err.to_string();
        assert!(
            display.contains("Strategy"),
            "Error message should mention strategy: {}",
            display
        );
    }

    #[test]
    fn test_unknown_strategy_source_lists_registered() {
        let err = SimscoreError::unknown_strategy("bogus", "bigram-cosine, jaccard");
        match err {
            SimscoreError::Strategy { source, .. } => {
                let msg = source.to_string();
                assert!(msg.contains("bogus"));
                assert!(msg.contains("bigram-cosine"));
            }
            _ => panic!("Expected Strategy error"),
        }
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SimscoreError::io("/tmp/abbreviations.json", io_err);
        assert!(err.to_string().contains("/tmp/abbreviations.json"));
    }

    #[test]
    fn test_json_error_becomes_table_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SimscoreError = parse_err.into();
        assert!(matches!(err, SimscoreError::Table { .. }));
    }
}
