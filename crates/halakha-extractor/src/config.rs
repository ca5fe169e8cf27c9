//! Configuration for the extractors

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Window used by the Rambam extractor when none is configured
pub const DEFAULT_WORDS_PER_SEGMENT: usize = 100;

/// Default cap on sections kept per label by the single-file sources
pub const DEFAULT_MAX_SEGMENTS_PER_LABEL: usize = 15;

const DEFAULT_WINDOW: NonZeroUsize = NonZeroUsize::new(DEFAULT_WORDS_PER_SEGMENT).unwrap();

/// Tunables shared by every extractor
///
/// Threaded into each extractor at construction so several configurations
/// can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Words per segment when re-windowing
    ///
    /// `0` keeps the natural section boundaries of the sectioned sources.
    /// The Rambam always windows and falls back to 100 on `0`.
    pub words_per_segment: usize,

    /// Maximum sections kept per label by the Chinuch and Noda Biyhudah sources
    pub max_segments_per_label: usize,
}

impl ExtractorConfig {
    /// Window for sources that always re-window
    pub fn rambam_window(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.words_per_segment).unwrap_or(DEFAULT_WINDOW)
    }

    /// Window for sources that re-window only when configured
    pub fn section_window(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.words_per_segment)
    }

    /// Keep section boundaries instead of re-windowing
    pub fn by_section() -> Self {
        Self {
            words_per_segment: 0,
            ..Self::default()
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            words_per_segment: DEFAULT_WORDS_PER_SEGMENT,
            max_segments_per_label: DEFAULT_MAX_SEGMENTS_PER_LABEL,
        }
    }
}
