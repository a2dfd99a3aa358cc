//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input path does not exist
    InputNotFound(String),
    /// Neither an input file nor an input string was given, or options conflict
    ConfigError(String),
    /// Encoding label not known to the WHATWG encoding standard
    UnknownEncoding(String),
    /// Text could not be decoded or encoded
    EncodingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => write!(f, "Input not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownEncoding(label) => write!(f, "Unknown encoding: {label}"),
            CliError::EncodingError(msg) => write!(f, "Encoding error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
