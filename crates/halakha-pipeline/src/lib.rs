//! Halakha Pipeline
//!
//! Orchestrates extraction and set building into a train/test corpus tree.
//!
//! # Stages
//!
//! 1. Reset `set_path` and create empty `train_set/` and `test_set/`
//! 2. Split the Rambam by `train_ratio` into train and test
//! 3. Unless training on the Rambam alone, cap each train label at
//!    `reduce_to` files and merge the Chinuch and Noda Biyhudah into train
//! 4. When the test set comes from another corpus, extract it into test,
//!    diverting part of it to train according to `test_sorter`
//! 5. Create an empty test folder for every train label that lacks one
//!
//! # Usage
//!
//! ```no_run
//! use halakha_pipeline::{Pipeline, PipelineConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::from_file("halakha.toml")?;
//! let report = Pipeline::new(config)?.run()?;
//! println!("train: {}", report.train_set_path.display());
//! println!("test: {}", report.test_set_path.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::{
    PipelineConfig, SourcePaths, TestSorter, TestSource, DEFAULT_REDUCE_TO, DEFAULT_TEST_AMOUNT,
};
pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use report::{PipelineReport, SourceReport};
