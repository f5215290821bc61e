//! Error types for data operations.
//!
//! This module defines [`RetailError`] which covers all error cases that can
//! occur when locating, parsing, or caching the transaction datasets.

use thiserror::Error;

use crate::types::Dataset;

/// Errors that can occur during data operations.
#[derive(Error, Debug)]
pub enum RetailError {
    /// No probe path for the dataset's backing file exists on disk.
    #[error("Source file not found for the {dataset} dataset: {file_name}")]
    SourceNotFound {
        /// The dataset whose backing file was probed for.
        dataset: Dataset,
        /// The file name that was probed for.
        file_name: String,
    },

    /// An I/O failure while reading a backing file.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// The path that was being read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// Error parsing data from a source.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error interacting with the cache.
    #[error("Cache error: {0}")]
    Cache(String),

    /// A requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using [`RetailError`].
pub type Result<T> = std::result::Result<T, RetailError>;
