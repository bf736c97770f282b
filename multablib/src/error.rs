//! Error types for multablib

use thiserror::Error;

/// Errors that can occur while acquiring a table dimension
#[derive(Error, Debug)]
pub enum MultabError {
    /// Input text could not be parsed as a base-10 integer
    #[error("invalid number: '{input}'")]
    InvalidNumber { input: String },

    /// Input ended before a syntactically valid number was read
    #[error("input ended before a valid number was entered")]
    InputClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
