//! Halakha CLI library.
//!
//! This library provides the command-line surface for building the train and
//! test corpora, including argument parsing, configuration loading, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::OutputFormat;
pub use error::{CliError, Result};
pub use output::Formatter;
