//! Configuration loading for the CLI.

use crate::error::{CliError, Result};
use halakha_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// Load the pipeline configuration from a file, or use the defaults.
///
/// An explicitly named file that does not exist is an error rather than a
/// silent fallback.
pub fn load(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::InvalidInput(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!("Loading configuration from {}", path.display());
            Ok(PipelineConfig::from_file(path)?)
        }
        None => Ok(PipelineConfig::default()),
    }
}
