//! Fixed-size word windowing

use halakha_domain::{LabeledSegments, Segment};
use std::num::NonZeroUsize;

/// Re-chunks text into segments of a fixed word count
///
/// Windowing overrides natural section boundaries: a label's segments are
/// joined and split again so every segment but the last holds exactly
/// `window` words.
#[derive(Debug, Clone, Copy)]
pub struct WordWindower {
    window: NonZeroUsize,
}

impl WordWindower {
    /// Create a windower producing `window` words per segment
    pub fn new(window: NonZeroUsize) -> Self {
        Self { window }
    }

    /// Split `text` into `ceil(words / window)` segments
    ///
    /// Empty or whitespace-only text yields no segments.
    pub fn window(&self, text: &str) -> Vec<Segment> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.window.get())
            .map(|chunk| chunk.join(" "))
            .collect()
    }

    /// Join each label's segments and re-window them
    ///
    /// Labels left without any words are dropped.
    pub fn rewindow(&self, data: LabeledSegments) -> LabeledSegments {
        let mut windowed: LabeledSegments = data
            .into_iter()
            .map(|(label, segments)| {
                let joined = segments.join(" ");
                (label, self.window(&joined))
            })
            .collect();
        windowed.retain_non_empty();
        windowed
    }
}
