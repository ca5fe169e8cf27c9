//! Error types for the CLI application.

use halakha_corpus::CorpusError;
use halakha_pipeline::PipelineError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pipeline configuration or run failed
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Corpus tree maintenance failed
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
