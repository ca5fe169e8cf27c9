//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates.

use crate::LabeledSegments;
use std::path::Path;

/// Trait for turning a raw source corpus into labeled segments
///
/// Implemented by the extraction layer (halakha-extractor), one type per
/// source format. A source is either a single file holding several labels or
/// a directory holding one file per label.
pub trait SegmentExtractor {
    /// Error type for extraction operations
    type Error;

    /// Human-readable source name, used in logs
    fn name(&self) -> &'static str;

    /// Read `source` and return its segments grouped by label
    ///
    /// Labels that end up with no text are not present in the result.
    fn extract(&self, source: &Path) -> Result<LabeledSegments, Self::Error>;
}
