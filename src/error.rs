//! Error types for the blog-list library.
//!
//! Aggregation itself only ever fails with [`Error::InvalidArgument`];
//! the remaining variants come from loading and validating blog lists.

use thiserror::Error;

/// Errors produced by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition on the input sequence was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A record failed validation (missing title, missing url, bad likes).
    #[error("invalid blog post at index {index}: {reason}")]
    InvalidPost { index: usize, reason: String },

    /// The input was not a JSON array of objects.
    #[error("failed to parse blog list: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a file or stdin failed.
    #[error("failed to read blog list: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status.
    #[error("remote source returned HTTP {0}")]
    HttpStatus(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
