//! Single-file sources with in-text label headings
//!
//! The Chinuch and Noda Biyhudah corpora are each one file. A line whose first
//! token is the source's heading marker closes the running section and names
//! the label for the text that follows. The same label may recur; each label
//! keeps at most `max_segments_per_label` sections and drops the rest.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalize::{append_line, clean_line, strip_bold_markup, strip_punctuation};
use crate::source::read_source;
use crate::windowing::WordWindower;
use halakha_domain::{LabeledSegments, SegmentExtractor};
use std::path::Path;
use tracing::{debug, info};

/// Per-source heading rules
#[derive(Debug, Clone, Copy)]
pub struct HeadingRules {
    /// First token of a heading line
    pub marker: &'static str,
    /// Label named by a heading line (empty when the heading has none)
    pub label: fn(&str) -> String,
    /// Cleanup applied to body lines
    pub clean: fn(&str) -> String,
}

/// Chinuch: `# <label>`
pub const CHINUCH_RULES: HeadingRules = HeadingRules {
    marker: "#",
    label: label_after_first_token,
    clean: strip_punctuation,
};

/// Noda Biyhudah: `Teshuva <index> <label>`, body may carry `<b>` markup
pub const NODA_BIYHUDAH_RULES: HeadingRules = HeadingRules {
    marker: "Teshuva",
    label: label_after_second_token,
    clean: clean_responsum_line,
};

fn label_after_first_token(line: &str) -> String {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}

fn label_after_second_token(line: &str) -> String {
    line.splitn(3, char::is_whitespace)
        .nth(2)
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

fn clean_responsum_line(line: &str) -> String {
    strip_punctuation(&strip_bold_markup(line))
}

/// Accumulates sections per label under a per-label cap
struct CappedSections {
    data: LabeledSegments,
    cap: usize,
}

impl CappedSections {
    fn close(&mut self, label: &str, section: String) {
        if label.is_empty() || section.is_empty() {
            return;
        }
        // Checked before touching the map so a zero cap never creates the label.
        if self.data.segment_count(label) >= self.cap {
            debug!("Label '{}' reached its cap of {} sections", label, self.cap);
            return;
        }
        self.data.push(label, section);
    }
}

/// Split one file's contents into capped sections per label
pub fn split_headed(contents: &str, rules: &HeadingRules, cap: usize) -> LabeledSegments {
    let mut sections = CappedSections {
        data: LabeledSegments::new(),
        cap,
    };
    let mut label = String::new();
    let mut current = String::new();

    for raw in contents.lines() {
        let Some(line) = clean_line(raw) else {
            continue;
        };

        if line.split_whitespace().next() == Some(rules.marker) {
            sections.close(&label, std::mem::take(&mut current));
            label = (rules.label)(line);
        } else {
            append_line(&mut current, &(rules.clean)(line));
        }
    }
    sections.close(&label, current);

    sections.data
}

fn extract_headed(
    source: &Path,
    rules: &HeadingRules,
    config: &ExtractorConfig,
) -> Result<LabeledSegments, ExtractorError> {
    let mut data = split_headed(&read_source(source)?, rules, config.max_segments_per_label);

    if let Some(window) = config.section_window() {
        data = WordWindower::new(window).rewindow(data);
    }

    info!(
        "Extracted {} labels, {} segments from {}",
        data.len(),
        data.total_segments(),
        source.display()
    );
    Ok(data)
}

/// Extractor for the Sefer HaChinuch file
#[derive(Debug, Clone, Default)]
pub struct ChinuchExtractor {
    config: ExtractorConfig,
}

impl ChinuchExtractor {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl SegmentExtractor for ChinuchExtractor {
    type Error = ExtractorError;

    fn name(&self) -> &'static str {
        "chinuch"
    }

    fn extract(&self, source: &Path) -> Result<LabeledSegments, ExtractorError> {
        extract_headed(source, &CHINUCH_RULES, &self.config)
    }
}

/// Extractor for the Noda Biyhudah responsa file
#[derive(Debug, Clone, Default)]
pub struct NodaBiyhudahExtractor {
    config: ExtractorConfig,
}

impl NodaBiyhudahExtractor {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }
}

impl SegmentExtractor for NodaBiyhudahExtractor {
    type Error = ExtractorError;

    fn name(&self) -> &'static str {
        "noda-biyhudah"
    }

    fn extract(&self, source: &Path) -> Result<LabeledSegments, ExtractorError> {
        extract_headed(source, &NODA_BIYHUDAH_RULES, &self.config)
    }
}
