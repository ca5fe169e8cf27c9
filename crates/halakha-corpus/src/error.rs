//! Error types for corpus tree operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while building or maintaining the corpus tree
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A pre-existing tree could not be removed
    ///
    /// Fatal: the pipeline must stop before writing anything.
    #[error(
        "Can't delete the folder at {}: {source}. Please delete it manually before rerunning.",
        path.display()
    )]
    Cleanup {
        /// Entry that could not be removed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error while creating or writing the tree
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CorpusError {
    pub(crate) fn cleanup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Cleanup {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
