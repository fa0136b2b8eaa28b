//! Error types for configuration loading and classification

use thiserror::Error;

/// Errors raised while building a title caser
///
/// Conversions themselves never fail; only loading word tables can.
#[derive(Debug, Error)]
pub enum CasesError {
    /// Configuration parsing or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by a part-of-speech classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// The tagging backend could not be reached or initialised
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, CasesError>;
