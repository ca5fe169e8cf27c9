//! Partition strategies
//!
//! A strategy splits one label's ordered segments into two disjoint sequences.
//! The set builder writes [`Partition::main`] under its main path and
//! [`Partition::secondary`] under its secondary path, so every strategy here
//! is expressed in those terms.
//!
//! | Strategy | `main` | `secondary` | Escape hatch |
//! |----------|--------|-------------|--------------|
//! | Ratio    | first `floor(ratio × N)` | the rest | `1.0` → all in `main` |
//! | Amount   | the rest | first `amount` | `0` → all in `main` |
//! | Keyword  | non-matching remainder | keyword hits + back-fill | none |

use crate::segments::Segment;

/// Substrings that mark a segment as quoting the Rambam
pub const KEYWORD_MARKERS: [&str; 2] = ["רמב\"ם", "רמבם"];

/// Result of splitting one label's segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Sequence written under the builder's main path
    pub main: Vec<Segment>,
    /// Sequence written under the builder's secondary path (may be empty)
    pub secondary: Vec<Segment>,
}

impl Partition {
    /// Total number of segments across both sides
    pub fn len(&self) -> usize {
        self.main.len() + self.secondary.len()
    }

    /// True when both sides are empty
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.secondary.is_empty()
    }
}

/// Policy for splitting a label's segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartitionStrategy {
    /// Keep the first `floor(ratio × N)` segments in `main`
    ///
    /// A ratio of `1.0` sends everything to `main`. Values outside `[0, 1]`
    /// are clamped.
    Ratio(f64),

    /// Carve the first `amount` segments off into `secondary`
    ///
    /// An amount of `0` sends everything to `main`.
    Amount(usize),

    /// Divert up to `amount` segments quoting the Rambam into `secondary`
    ///
    /// Segments containing one of [`KEYWORD_MARKERS`] are taken in order until
    /// `amount` are found; any shortfall is back-filled from the front of the
    /// non-matching remainder. The remainder stays in `main`.
    ///
    /// The pipeline calls this with `main` = test set and `secondary` = train
    /// set, so the keyword hits end up as training data.
    Keyword {
        /// Number of segments to send to `secondary`
        amount: usize,
    },
}

impl PartitionStrategy {
    /// Strategy that sends every segment to `main`
    pub fn everything_to_main() -> Self {
        PartitionStrategy::Ratio(1.0)
    }

    /// Split `segments` according to this policy
    pub fn partition(&self, segments: Vec<Segment>) -> Partition {
        match *self {
            PartitionStrategy::Ratio(ratio) => split_by_ratio(segments, ratio),
            PartitionStrategy::Amount(amount) => split_by_amount(segments, amount),
            PartitionStrategy::Keyword { amount } => split_by_keyword(segments, amount),
        }
    }

    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            PartitionStrategy::Ratio(_) => "ratio",
            PartitionStrategy::Amount(_) => "amount",
            PartitionStrategy::Keyword { .. } => "keyword",
        }
    }
}

fn split_by_ratio(mut segments: Vec<Segment>, ratio: f64) -> Partition {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    // Truncating cast mirrors floor() for non-negative products.
    let cut = ((segments.len() as f64) * ratio) as usize;
    let secondary = segments.split_off(cut.min(segments.len()));
    Partition {
        main: segments,
        secondary,
    }
}

fn split_by_amount(mut segments: Vec<Segment>, amount: usize) -> Partition {
    let main = segments.split_off(amount.min(segments.len()));
    Partition {
        main,
        secondary: segments,
    }
}

fn split_by_keyword(segments: Vec<Segment>, amount: usize) -> Partition {
    let mut remaining = amount;
    let mut hits = Vec::new();
    let mut rest = Vec::new();

    for segment in segments {
        if remaining > 0 && contains_keyword(&segment) {
            remaining -= 1;
            hits.push(segment);
        } else {
            rest.push(segment);
        }
    }

    if remaining > 0 {
        let take = remaining.min(rest.len());
        let tail = rest.split_off(take);
        hits.extend(rest);
        rest = tail;
    }

    Partition {
        main: rest,
        secondary: hits,
    }
}

fn contains_keyword(segment: &str) -> bool {
    KEYWORD_MARKERS.iter().any(|marker| segment.contains(marker))
}
