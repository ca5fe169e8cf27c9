//! Mishneh Torah (Rambam) extractor
//!
//! One file per book of laws; the file stem is the label. Each verse line
//! carries its number, a double space, then the text. Lines naming the
//! count of laws (`הלכות`) are headers and are skipped. All verses of a file
//! are joined and always re-windowed. When several files share a stem, the
//! last one in name order supplies the label.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalize::{append_line, clean_line, clean_rambam_verse};
use crate::source::{label_from_path, list_source_files, read_source};
use crate::windowing::WordWindower;
use halakha_domain::{LabeledSegments, SegmentExtractor};
use std::path::Path;
use tracing::{debug, info, warn};

/// Header marker naming the count of laws in a chapter
pub const HEADER_MARKER: &str = "הלכות";

/// Separator between a verse number and its text
const VERSE_SEPARATOR: &str = "  ";

/// Extractor for the Rambam directory
#[derive(Debug, Clone, Default)]
pub struct RambamExtractor {
    config: ExtractorConfig,
}

impl RambamExtractor {
    /// Create a new Rambam extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    fn extract_text(&self, contents: &str) -> String {
        let mut text = String::new();
        for raw in contents.lines() {
            let Some(line) = clean_line(raw) else {
                continue;
            };
            if line.contains(HEADER_MARKER) {
                continue;
            }
            match line.split_once(VERSE_SEPARATOR) {
                Some((_, body)) => append_line(&mut text, &clean_rambam_verse(body)),
                None => debug!("Skipping verse without number separator: {}", line),
            }
        }
        text
    }
}

impl SegmentExtractor for RambamExtractor {
    type Error = ExtractorError;

    fn name(&self) -> &'static str {
        "rambam"
    }

    fn extract(&self, source: &Path) -> Result<LabeledSegments, ExtractorError> {
        let windower = WordWindower::new(self.config.rambam_window());
        let mut data = LabeledSegments::new();

        for file in list_source_files(source)? {
            let label = label_from_path(&file);
            let text = self.extract_text(&read_source(&file)?);
            let segments = windower.window(&text);
            debug!("{}: {} segments from {}", label, segments.len(), file.display());

            if segments.is_empty() {
                continue;
            }
            // One label's segments always come from a single file; the last wins.
            if data.contains_label(&label) {
                warn!("{} replaces an earlier file for label '{}'", file.display(), label);
            }
            data.insert(label, segments);
        }

        info!(
            "Extracted {} labels, {} segments from {}",
            data.len(),
            data.total_segments(),
            source.display()
        );
        Ok(data)
    }
}
