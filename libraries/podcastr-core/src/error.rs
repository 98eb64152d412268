//! Core error types for Podcastr Player

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    CatalogIo {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not valid JSON of the expected shape
    #[error("Invalid catalog format: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// An episode record is present but cannot be played
    #[error("Invalid episode at index {index}: {reason}")]
    InvalidEpisode {
        /// Position of the record in the catalog
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}
