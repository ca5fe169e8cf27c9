//! Pipeline configuration
//!
//! Loaded from TOML with every key optional, or built in code from
//! [`PipelineConfig::default`] and one of the presets.

use crate::error::{PipelineError, Result};
use halakha_domain::PartitionStrategy;
use halakha_extractor::{ExtractorConfig, SourceKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default cap applied to primary train labels before auxiliary sources merge
pub const DEFAULT_REDUCE_TO: usize = 40;

/// Default number of test-source segments moved to train
pub const DEFAULT_TEST_AMOUNT: usize = 20;

/// How the external test source is split between test and train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestSorter {
    /// Everything goes to the test set
    #[default]
    Full,
    /// `test_amount` segments per label go to train, the rest to test
    Amount,
    /// Up to `test_amount` segments quoting the Rambam go to train
    #[serde(alias = "rambam")]
    Keyword,
}

impl TestSorter {
    /// Partition strategy for a test-source build (main = test, secondary = train)
    pub fn strategy(self, test_amount: usize) -> PartitionStrategy {
        match self {
            TestSorter::Full => PartitionStrategy::Amount(0),
            TestSorter::Amount => PartitionStrategy::Amount(test_amount),
            TestSorter::Keyword => PartitionStrategy::Keyword {
                amount: test_amount,
            },
        }
    }

    /// Stable identifier
    pub fn as_str(self) -> &'static str {
        match self {
            TestSorter::Full => "full",
            TestSorter::Amount => "amount",
            TestSorter::Keyword => "keyword",
        }
    }
}

impl fmt::Display for TestSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the test set comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestSource {
    /// Held-out share of the Rambam itself
    #[default]
    Rambam,
    /// Ben Ish Hai
    #[serde(alias = "ben")]
    BenIshHai,
    /// Kizur Shulchan Aruch
    #[serde(alias = "kizur-shulchan-aruch")]
    Kizur,
    /// Tur
    Tur,
}

impl TestSource {
    /// External corpus to extract, or `None` when the Rambam split is the test set
    pub fn external(self) -> Option<SourceKind> {
        match self {
            TestSource::Rambam => None,
            TestSource::BenIshHai => Some(SourceKind::BenIshHai),
            TestSource::Kizur => Some(SourceKind::KizurShulchanAruch),
            TestSource::Tur => Some(SourceKind::Tur),
        }
    }

    /// Stable identifier
    pub fn as_str(self) -> &'static str {
        match self {
            TestSource::Rambam => "rambam",
            TestSource::BenIshHai => "ben-ish-hai",
            TestSource::Kizur => "kizur",
            TestSource::Tur => "tur",
        }
    }
}

impl fmt::Display for TestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of each corpus relative to its data root
///
/// Rambam, Chinuch and Noda Biyhudah resolve against `train_path`; the test
/// sources resolve against `test_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePaths {
    /// Rambam directory
    pub rambam: PathBuf,
    /// Chinuch file
    pub chinuch: PathBuf,
    /// Noda Biyhudah file
    pub noda_biyhudah: PathBuf,
    /// Ben Ish Hai directory
    pub ben_ish_hai: PathBuf,
    /// Kizur Shulchan Aruch directory
    pub kizur_shulchan_aruch: PathBuf,
    /// Tur directory
    pub tur: PathBuf,
}

impl SourcePaths {
    /// Configured location of `kind`
    pub fn location(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Rambam => &self.rambam,
            SourceKind::Chinuch => &self.chinuch,
            SourceKind::NodaBiyhudah => &self.noda_biyhudah,
            SourceKind::BenIshHai => &self.ben_ish_hai,
            SourceKind::KizurShulchanAruch => &self.kizur_shulchan_aruch,
            SourceKind::Tur => &self.tur,
        }
    }
}

impl Default for SourcePaths {
    fn default() -> Self {
        let at = |kind: SourceKind| PathBuf::from(kind.default_location());
        Self {
            rambam: at(SourceKind::Rambam),
            chinuch: at(SourceKind::Chinuch),
            noda_biyhudah: at(SourceKind::NodaBiyhudah),
            ben_ish_hai: at(SourceKind::BenIshHai),
            kizur_shulchan_aruch: at(SourceKind::KizurShulchanAruch),
            tur: at(SourceKind::Tur),
        }
    }
}

/// Configuration for one pipeline run
///
/// # Examples
///
/// ```
/// use halakha_pipeline::{PipelineConfig, TestSource};
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.train_ratio, 1.0);
/// assert_eq!(config.test_source, TestSource::Rambam);
///
/// // The default pairs a held-out Rambam test set with no held-out share
/// assert!(config.validate().is_err());
/// assert!(PipelineConfig::rambam_holdout().validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root of the training corpora
    pub train_path: PathBuf,

    /// Root of the test corpora
    pub test_path: PathBuf,

    /// Root of the generated corpus tree (deleted and rebuilt on every run)
    pub set_path: PathBuf,

    /// Shuffle each label's segments before partitioning
    pub shuffle: bool,

    /// Seed for reproducible shuffles; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_seed: Option<u64>,

    /// Share of each Rambam label kept for training, in `[0.5, 1.0]`
    pub train_ratio: f64,

    /// Segments per label moved from the test source to train
    pub test_amount: usize,

    /// Split policy for the test source
    pub test_sorter: TestSorter,

    /// Train on the Rambam alone
    pub only_primary_source: bool,

    /// Where the test set comes from
    pub test_source: TestSource,

    /// Files kept per primary train label before auxiliary sources merge
    pub reduce_to: usize,

    /// Segmentation settings shared by every extractor
    pub extractor: ExtractorConfig,

    /// Per-source locations
    pub sources: SourcePaths,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            train_path: PathBuf::from("./data/train_data/"),
            test_path: PathBuf::from("./data/test_data/"),
            set_path: PathBuf::from("./data_set/"),
            shuffle: true,
            shuffle_seed: None,
            train_ratio: 1.0,
            test_amount: DEFAULT_TEST_AMOUNT,
            test_sorter: TestSorter::Full,
            only_primary_source: false,
            test_source: TestSource::Rambam,
            reduce_to: DEFAULT_REDUCE_TO,
            extractor: ExtractorConfig::default(),
            sources: SourcePaths::default(),
        }
    }
}

impl PipelineConfig {
    /// Hold out a fifth of the Rambam as the test set
    pub fn rambam_holdout() -> Self {
        Self {
            train_ratio: 0.8,
            test_source: TestSource::Rambam,
            ..Self::default()
        }
    }

    /// Train on the whole Rambam and test against another corpus
    pub fn cross_source(test_source: TestSource) -> Self {
        Self {
            train_ratio: 1.0,
            test_source,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject out-of-range or contradictory settings
    pub fn validate(&self) -> Result<()> {
        if !(0.5..=1.0).contains(&self.train_ratio) {
            return Err(PipelineError::InvalidConfig(format!(
                "train_ratio must be between 0.5 and 1.0, got {}",
                self.train_ratio
            )));
        }

        if self.test_source == TestSource::Rambam && self.train_ratio == 1.0 {
            return Err(PipelineError::InvalidConfig(
                "using the Rambam as the test set requires a train_ratio below 1.0".to_string(),
            ));
        }

        Ok(())
    }

    /// Location of `kind` joined onto its data root
    pub fn source_path(&self, kind: SourceKind) -> PathBuf {
        let root = match kind {
            SourceKind::Rambam | SourceKind::Chinuch | SourceKind::NodaBiyhudah => {
                &self.train_path
            }
            SourceKind::BenIshHai | SourceKind::KizurShulchanAruch | SourceKind::Tur => {
                &self.test_path
            }
        };
        root.join(self.sources.location(kind))
    }
}
