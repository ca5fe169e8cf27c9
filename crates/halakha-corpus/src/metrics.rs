//! Metrics collected while building sets

use serde::Serialize;
use std::collections::BTreeMap;

/// Files written for one label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    /// Files written under the main path
    pub main: usize,
    /// Files written under the secondary path
    pub secondary: usize,
}

/// Metrics for one or more set builds
///
/// Tracks files written per label and segments that had nowhere to go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildMetrics {
    /// Files written per label
    pub labels: BTreeMap<String, LabelCounts>,

    /// Secondary segments dropped because no secondary path was given
    pub dropped_segments: usize,
}

impl BuildMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the files written for a label
    pub fn record_label(&mut self, label: &str, main: usize, secondary: usize) {
        let counts = self.labels.entry(label.to_string()).or_default();
        counts.main += main;
        counts.secondary += secondary;
    }

    /// Record segments that were not written
    pub fn record_dropped(&mut self, count: usize) {
        self.dropped_segments += count;
    }

    /// Fold another build's metrics into these
    pub fn merge(&mut self, other: &BuildMetrics) {
        for (label, counts) in &other.labels {
            self.record_label(label, counts.main, counts.secondary);
        }
        self.dropped_segments += other.dropped_segments;
    }

    /// Number of labels processed
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Files written under the main path, across all labels
    pub fn total_main(&self) -> usize {
        self.labels.values().map(|c| c.main).sum()
    }

    /// Files written under the secondary path, across all labels
    pub fn total_secondary(&self) -> usize {
        self.labels.values().map(|c| c.secondary).sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Labels: {}", self.label_count()),
            format!("Main files: {}", self.total_main()),
            format!("Secondary files: {}", self.total_secondary()),
        ];
        if self.dropped_segments > 0 {
            lines.push(format!("Dropped segments: {}", self.dropped_segments));
        }
        lines.join("\n")
    }
}
