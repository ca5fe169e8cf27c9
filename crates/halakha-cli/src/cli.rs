//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use halakha_pipeline::{TestSorter, TestSource};
use std::path::PathBuf;

/// Halakha - Build labeled train/test sets from halakhic corpora.
#[derive(Debug, Parser)]
#[command(name = "halakha")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug details (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (set paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rebuild the train and test sets
    ///
    /// Deletes everything under the set path first. Do not run two builds
    /// against the same set path at once.
    Build(BuildArgs),

    /// Delete a previously built corpus tree
    Clean(CleanArgs),
}

/// Arguments for the build command.
///
/// Every flag overrides the matching key of the config file.
#[derive(Debug, Default, Parser)]
pub struct BuildArgs {
    /// TOML configuration file
    #[arg(short, long, env = "HALAKHA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root of the training corpora
    #[arg(long)]
    pub train_path: Option<PathBuf>,

    /// Root of the test corpora
    #[arg(long)]
    pub test_path: Option<PathBuf>,

    /// Where to write the corpus tree (deleted first)
    #[arg(long)]
    pub set_path: Option<PathBuf>,

    /// Keep extraction order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Share of each Rambam label kept for training (0.5-1.0)
    #[arg(long)]
    pub train_ratio: Option<f64>,

    /// Segments per label moved from the test source to train
    #[arg(long)]
    pub test_amount: Option<usize>,

    /// How the test source is split between test and train
    #[arg(long, value_enum)]
    pub test_sorter: Option<TestSorterArg>,

    /// Train on the Rambam alone
    #[arg(long)]
    pub only_rambam: bool,

    /// Where the test set comes from
    #[arg(long, value_enum)]
    pub test_source: Option<TestSourceArg>,

    /// Words per segment (0 keeps natural sections where supported)
    #[arg(long)]
    pub words_per_segment: Option<usize>,
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Corpus tree to delete
    #[arg(long, default_value = "./data_set/")]
    pub set_path: PathBuf,
}

/// Test sorter argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TestSorterArg {
    /// Everything to the test set
    Full,
    /// A fixed amount per label to train
    Amount,
    /// Segments quoting the Rambam to train
    #[value(alias = "rambam")]
    Keyword,
}

/// Test source argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TestSourceArg {
    /// Held-out share of the Rambam
    Rambam,
    /// Ben Ish Hai
    #[value(alias = "ben")]
    BenIshHai,
    /// Kizur Shulchan Aruch
    Kizur,
    /// Tur
    Tur,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TestSorterArg> for TestSorter {
    fn from(sorter: TestSorterArg) -> Self {
        match sorter {
            TestSorterArg::Full => TestSorter::Full,
            TestSorterArg::Amount => TestSorter::Amount,
            TestSorterArg::Keyword => TestSorter::Keyword,
        }
    }
}

impl From<TestSourceArg> for TestSource {
    fn from(source: TestSourceArg) -> Self {
        match source {
            TestSourceArg::Rambam => TestSource::Rambam,
            TestSourceArg::BenIshHai => TestSource::BenIshHai,
            TestSourceArg::Kizur => TestSource::Kizur,
            TestSourceArg::Tur => TestSource::Tur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command() {
        let cli = Cli::parse_from([
            "halakha",
            "build",
            "--train-ratio",
            "0.8",
            "--test-source",
            "ben",
            "--test-sorter",
            "rambam",
            "--no-shuffle",
        ]);
        match cli.command {
            Command::Build(args) => {
                assert_eq!(args.train_ratio, Some(0.8));
                assert!(matches!(args.test_source, Some(TestSourceArg::BenIshHai)));
                assert!(matches!(args.test_sorter, Some(TestSorterArg::Keyword)));
                assert!(args.no_shuffle);
                assert!(!args.only_rambam);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_clean_command_default_path() {
        let cli = Cli::parse_from(["halakha", "clean"]);
        match cli.command {
            Command::Clean(args) => assert_eq!(args.set_path, PathBuf::from("./data_set/")),
            _ => panic!("Expected Clean command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["halakha", "clean", "--format", "json", "-v", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_unknown_test_source() {
        let result = Cli::try_parse_from(["halakha", "build", "--test-source", "zohar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(TestSource::from(TestSourceArg::Kizur), TestSource::Kizur);
        assert_eq!(TestSorter::from(TestSorterArg::Amount), TestSorter::Amount);
    }
}
