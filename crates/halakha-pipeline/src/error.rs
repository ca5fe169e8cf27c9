//! Error types for the pipeline

use halakha_corpus::CorpusError;
use halakha_extractor::ExtractorError;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while configuring or running the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Settings are out of range or contradict each other
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A source could not be extracted
    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    /// The corpus tree could not be built or maintained
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
