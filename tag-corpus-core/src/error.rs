//! Error types for pipeline construction, annotation and formatting

use thiserror::Error;

/// Errors raised while building or running an annotation pipeline
#[derive(Error, Debug)]
pub enum TagError {
    /// Bad or missing option combination
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested model or language could not be located or downloaded
    #[error("model '{model}' is unavailable: {reason}")]
    ModelUnavailable {
        /// Model name or language code as given by the user
        model: String,
        /// Failure reported by the toolkit
        reason: String,
    },

    /// Option requested for a vendor that has no equivalent
    #[error("option '{option}' is not supported by {vendor}")]
    UnsupportedOption {
        /// Name of the rejected option
        option: String,
        /// Vendor that rejected it
        vendor: String,
    },

    /// A requested attribute was not populated on a token
    ///
    /// The adapter enables every stage a requested attribute needs, so this
    /// signals an adapter bug rather than bad input.
    #[error("token {token} of sentence {sentence} has no '{attribute}' annotation")]
    MissingAttribute {
        /// Abstract attribute name
        attribute: String,
        /// Sentence index within the batch
        sentence: usize,
        /// Token index within the sentence
        token: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text could not be decoded or encoded
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The toolkit host broke protocol or failed while annotating
    #[error("toolkit bridge error: {0}")]
    Bridge(String),
}

impl From<serde_json::Error> for TagError {
    fn from(err: serde_json::Error) -> Self {
        TagError::Bridge(format!("malformed message: {err}"))
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, TagError>;
