//! Summary of one pipeline run

use halakha_corpus::BuildMetrics;
use serde::Serialize;
use std::path::PathBuf;

/// What a single source build contributed
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    /// Source identifier (`rambam`, `chinuch`, ...)
    pub source: String,
    /// Partition strategy used
    pub strategy: String,
    /// Labels extracted
    pub labels: usize,
    /// Segments extracted
    pub segments: usize,
    /// Files the build wrote
    pub metrics: BuildMetrics,
}

/// Outcome of [`Pipeline::run`](crate::Pipeline::run)
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Training set folder
    pub train_set_path: PathBuf,
    /// Test set folder
    pub test_set_path: PathBuf,
    /// One entry per source build, in run order
    pub sources: Vec<SourceReport>,
    /// Primary train files removed before auxiliary sources merged
    pub pruned_files: usize,
    /// Empty test labels created to mirror train labels
    pub filled_labels: usize,
}

impl PipelineReport {
    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Train set: {}", self.train_set_path.display()),
            format!("Test set: {}", self.test_set_path.display()),
        ];
        for source in &self.sources {
            lines.push(format!(
                "{} ({}): {} labels, {} segments",
                source.source, source.strategy, source.labels, source.segments
            ));
        }
        lines.push(format!("Pruned files: {}", self.pruned_files));
        lines.push(format!("Filled labels: {}", self.filled_labels));
        lines.join("\n")
    }
}
