//! Halakha Domain Layer
//!
//! This crate contains the core data model for the halakha dataset builder.
//! It has no external runtime dependencies and defines the value types, the
//! partition policies, and the trait interfaces that the other crates build on.
//!
//! ## Key Concepts
//!
//! - **Segment**: A normalized chunk of text, one training or testing example
//! - **Label**: The classification target a group of segments belongs to
//! - **LabeledSegments**: Ordered mapping from label to its segments
//! - **Partition Strategy**: A pure policy splitting one label's segments in two
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure logic only, no filesystem access
//! - Extraction and persistence live in other crates behind [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod partition;
pub mod segments;
pub mod traits;

// Re-exports for convenience
pub use partition::{Partition, PartitionStrategy, KEYWORD_MARKERS};
pub use segments::{Label, LabeledSegments, Segment};
pub use traits::SegmentExtractor;
