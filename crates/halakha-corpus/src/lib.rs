//! Halakha Corpus
//!
//! On-disk train/test corpus: set building and tree maintenance.
//!
//! # Overview
//!
//! This crate owns everything under the corpus root:
//! - **Set building**: shuffling, partitioning and writing labeled segments
//!   as numbered files ([`SetBuilder`])
//! - **Lifecycle**: resetting and initializing the tree ([`CorpusTree`])
//! - **Label maintenance**: mirroring train labels into the test set and
//!   capping label folders ([`fill_missing_labels`], [`reduce_label_files`])
//! - **Metrics**: counting what each build wrote ([`BuildMetrics`])
//!
//! # Usage
//!
//! ```no_run
//! use halakha_corpus::{CorpusTree, SetBuilder, ShuffleMode};
//! use halakha_domain::{LabeledSegments, PartitionStrategy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = CorpusTree::new("data_set").initialize()?;
//!
//! let mut data = LabeledSegments::new();
//! data.push("Shabbat", "text of the first segment");
//!
//! let mut builder = SetBuilder::new(ShuffleMode::Random);
//! builder.build(data, &PartitionStrategy::Ratio(0.8), &paths.train, Some(&paths.test))?;
//!
//! halakha_corpus::fill_missing_labels(&paths.train, &paths.test)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod lifecycle;
pub mod metrics;

pub use builder::{write_segments, SetBuilder, ShuffleMode};
pub use error::{CorpusError, Result};
pub use lifecycle::{
    fill_missing_labels, label_dirs, parse_segment_index, reduce_label_files, segment_file_name,
    CorpusPaths, CorpusTree, SEGMENT_EXTENSION, TEST_SET_DIR, TRAIN_SET_DIR,
};
pub use metrics::{BuildMetrics, LabelCounts};
