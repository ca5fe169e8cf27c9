//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use halakha_pipeline::PipelineReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a pipeline report.
    pub fn format_report(&self, report: &PipelineReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(format!(
                "{}\n{}",
                report.train_set_path.display(),
                report.test_set_path.display()
            )),
        }
    }

    /// Format a report as a table of per-source builds.
    fn format_report_table(&self, report: &PipelineReport) -> String {
        let mut builder = Builder::default();
        builder.push_record([
            "Source", "Strategy", "Labels", "Segments", "Main", "Secondary", "Dropped",
        ]);

        for source in &report.sources {
            builder.push_record([
                source.source.clone(),
                source.strategy.clone(),
                source.labels.to_string(),
                source.segments.to_string(),
                source.metrics.total_main().to_string(),
                source.metrics.total_secondary().to_string(),
                source.metrics.dropped_segments.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![table.to_string()];
        if report.pruned_files > 0 {
            lines.push(self.info(&format!(
                "Pruned {} primary train files",
                report.pruned_files
            )));
        }
        if report.filled_labels > 0 {
            lines.push(self.info(&format!(
                "Created {} empty test labels",
                report.filled_labels
            )));
        }
        lines.push(self.success(&format!(
            "Train set: {}",
            report.train_set_path.display()
        )));
        lines.push(self.success(&format!(
            "Test set: {}",
            report.test_set_path.display()
        )));
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}
