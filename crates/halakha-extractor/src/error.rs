//! Error types for the extractors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Source file or directory does not exist
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Reading a source failed (permissions, invalid UTF-8, ...)
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ExtractorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            path: path.into(),
            source,
        }
    }
}
