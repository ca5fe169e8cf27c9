//! Halakha Extractor
//!
//! Turns the raw text corpora into labeled segments.
//!
//! # Overview
//!
//! Each supported corpus has its own layout and in-text markers. This crate
//! ships one [`SegmentExtractor`] per corpus, all producing the same
//! [`LabeledSegments`] contract, plus the shared [`WordWindower`] that
//! re-chunks a label's text into fixed-size word windows.
//!
//! # Sources
//!
//! | Source | Layout | Boundary |
//! |--------|--------|----------|
//! | Rambam | directory, label per file | none, always windowed |
//! | Ben Ish Hai | directory | `אות <n>` |
//! | Kizur Shulchan Aruch | directory | `סעיף <n>` |
//! | Tur | directory | `סימן <n>` |
//! | Chinuch | single file | `# <label>` |
//! | Noda Biyhudah | single file | `Teshuva <n> <label>` |
//!
//! # Example Usage
//!
//! ```no_run
//! use halakha_extractor::{ExtractorConfig, SourceKind};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractorConfig::default();
//! let extractor = SourceKind::Tur.extractor(&config);
//!
//! let data = extractor.extract(Path::new("data/test_data/Tur"))?;
//! for (label, segments) in data.iter() {
//!     println!("{}: {} segments", label, segments.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`SegmentExtractor`]: halakha_domain::SegmentExtractor
//! [`LabeledSegments`]: halakha_domain::LabeledSegments

#![warn(missing_docs)]

mod config;
mod error;
mod headed;
mod normalize;
mod rambam;
mod sectioned;
mod source;
mod windowing;


pub use config::{ExtractorConfig, DEFAULT_MAX_SEGMENTS_PER_LABEL, DEFAULT_WORDS_PER_SEGMENT};
pub use error::ExtractorError;
pub use headed::{ChinuchExtractor, NodaBiyhudahExtractor};
pub use rambam::RambamExtractor;
pub use sectioned::{BenIshHaiExtractor, KizurShulchanAruchExtractor, TurExtractor};
pub use source::{BoxedExtractor, SourceKind};
pub use windowing::WordWindower;

pub use halakha_domain::SegmentExtractor;
