//! Set builder: partition labeled segments and persist them as files

use crate::error::{CorpusError, Result};
use crate::lifecycle::segment_file_name;
use crate::metrics::BuildMetrics;
use halakha_domain::{LabeledSegments, PartitionStrategy, Segment};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, info, warn};

/// How a label's segments are ordered before partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// Keep extraction order
    Disabled,
    /// Uniform shuffle seeded from the OS
    #[default]
    Random,
    /// Uniform shuffle from a fixed seed, reproducible across runs
    Seeded(u64),
}

impl ShuffleMode {
    /// Mode for a shuffle flag and an optional seed
    pub fn from_options(shuffle: bool, seed: Option<u64>) -> Self {
        match (shuffle, seed) {
            (false, _) => ShuffleMode::Disabled,
            (true, Some(seed)) => ShuffleMode::Seeded(seed),
            (true, None) => ShuffleMode::Random,
        }
    }
}

/// Writes partitioned segments into label folders
///
/// Shuffling happens before partitioning so ratio and amount cuts act as
/// random samples rather than positional slices. Writes always append to
/// whatever a label folder already holds.
///
/// # Examples
///
/// ```no_run
/// use halakha_corpus::{SetBuilder, ShuffleMode};
/// use halakha_domain::{LabeledSegments, PartitionStrategy};
/// use std::path::{Component, Path};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut data = LabeledSegments::new();
/// data.push("Shabbat", "first segment");
///
/// let mut builder = SetBuilder::new(ShuffleMode::Seeded(42));
/// let metrics = builder.build(
///     data,
///     &PartitionStrategy::Ratio(0.8),
///     Path::new("data_set/train_set"),
///     Some(Path::new("data_set/test_set")),
/// )?;
/// println!("{}", metrics.summary());
/// # Ok(())
/// # }
/// ```
pub struct SetBuilder {
    rng: Option<StdRng>,
}

impl SetBuilder {
    /// Create a builder with the given shuffle mode
    pub fn new(mode: ShuffleMode) -> Self {
        let rng = match mode {
            ShuffleMode::Disabled => None,
            ShuffleMode::Random => Some(StdRng::from_os_rng()),
            ShuffleMode::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
        Self { rng }
    }

    /// Partition every label and write both sides
    ///
    /// `main` is always written under `main_path/<label>/`, creating the
    /// folder even when it is empty. `secondary` is written under
    /// `secondary_path/<label>/` when non-empty; without a secondary path it
    /// is dropped and counted in the metrics.
    pub fn build(
        &mut self,
        data: LabeledSegments,
        strategy: &PartitionStrategy,
        main_path: &Path,
        secondary_path: Option<&Path>,
    ) -> Result<BuildMetrics> {
        let mut metrics = BuildMetrics::new();

        for (label, mut segments) in data {
            if !is_safe_label(&label) {
                warn!(
                    "Label '{}' is not a plain folder name; dropping {} segments",
                    label,
                    segments.len()
                );
                metrics.record_dropped(segments.len());
                continue;
            }
            if let Some(rng) = self.rng.as_mut() {
                segments.shuffle(rng);
            }
            let partition = strategy.partition(segments);

            write_segments(&main_path.join(&label), &partition.main)?;

            let mut secondary_written = 0;
            if !partition.secondary.is_empty() {
                match secondary_path {
                    Some(path) => {
                        write_segments(&path.join(&label), &partition.secondary)?;
                        secondary_written = partition.secondary.len();
                    }
                    None => {
                        warn!(
                            "No secondary path for label '{}'; dropping {} segments",
                            label,
                            partition.secondary.len()
                        );
                        metrics.record_dropped(partition.secondary.len());
                    }
                }
            }

            debug!(
                "{}: {} main, {} secondary ({} strategy)",
                label,
                partition.main.len(),
                secondary_written,
                strategy.name()
            );
            metrics.record_label(&label, partition.main.len(), secondary_written);
        }

        info!(
            "Wrote {} files to {} and {} secondary files across {} labels",
            metrics.total_main(),
            main_path.display(),
            metrics.total_secondary(),
            metrics.label_count()
        );
        Ok(metrics)
    }
}

/// Whether `label` names exactly one folder directly under a set path
///
/// Rejects empty names, `.`/`..`, absolute paths and anything holding a
/// path separator.
fn is_safe_label(label: &str) -> bool {
    if label.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(label).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Append `segments` to a label folder as numbered files
///
/// Creates the folder if absent. Numbering continues from the number of
/// entries already present, so repeated calls never overwrite. Returns the
/// index of the first file written.
pub fn write_segments(label_dir: &Path, segments: &[Segment]) -> Result<usize> {
    if !label_dir.is_dir() {
        fs::create_dir(label_dir).map_err(|e| CorpusError::io(label_dir, e))?;
    }

    let start = fs::read_dir(label_dir)
        .map_err(|e| CorpusError::io(label_dir, e))?
        .count();

    for (offset, segment) in segments.iter().enumerate() {
        let path = label_dir.join(segment_file_name(start + offset));
        fs::write(&path, segment).map_err(|e| CorpusError::io(&path, e))?;
    }
    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn data(label: &str, count: usize) -> LabeledSegments {
        let mut data = LabeledSegments::new();
        for i in 0..count {
            data.push(label, format!("segment {}", i));
        }
        data
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
    }

    #[test]
    fn test_shuffle_mode_from_options() {
        assert_eq!(ShuffleMode::from_options(false, Some(1)), ShuffleMode::Disabled);
        assert_eq!(ShuffleMode::from_options(true, Some(1)), ShuffleMode::Seeded(1));
        assert_eq!(ShuffleMode::from_options(true, None), ShuffleMode::Random);
    }

    #[test]
    fn test_write_segments_appends() {
        let dir = TempDir::new().unwrap();
        let label = dir.path().join("Shabbat");

        let segments: Vec<Segment> = (0..5).map(|i| format!("s{}", i)).collect();
        assert_eq!(write_segments(&label, &segments).unwrap(), 0);
        assert_eq!(write_segments(&label, &["late".to_string()]).unwrap(), 5);

        assert_eq!(file_count(&label), 6);
        assert_eq!(fs::read_to_string(label.join("#0.txt")).unwrap(), "s0");
        assert_eq!(fs::read_to_string(label.join("#5.txt")).unwrap(), "late");
    }

    #[test]
    fn test_build_ratio_splits_into_both_sets() {
        let dir = TempDir::new().unwrap();
        let (train, test) = (dir.path().join("train"), dir.path().join("test"));
        fs::create_dir(&train).unwrap();
        fs::create_dir(&test).unwrap();

        let mut builder = SetBuilder::new(ShuffleMode::Disabled);
        let metrics = builder
            .build(data("A", 10), &PartitionStrategy::Ratio(0.8), &train, Some(&test))
            .unwrap();

        assert_eq!(file_count(&train.join("A")), 8);
        assert_eq!(file_count(&test.join("A")), 2);
        assert_eq!(metrics.total_main(), 8);
        assert_eq!(metrics.total_secondary(), 2);
        // Extraction order kept when shuffling is disabled
        assert_eq!(fs::read_to_string(test.join("A").join("#0.txt")).unwrap(), "segment 8");
    }

    #[test]
    fn test_build_creates_empty_main_folder() {
        let dir = TempDir::new().unwrap();
        let (train, test) = (dir.path().join("train"), dir.path().join("test"));
        fs::create_dir(&train).unwrap();
        fs::create_dir(&test).unwrap();

        let mut builder = SetBuilder::new(ShuffleMode::Disabled);
        builder
            .build(data("A", 1), &PartitionStrategy::Ratio(0.5), &train, Some(&test))
            .unwrap();

        assert!(train.join("A").is_dir());
        assert_eq!(file_count(&train.join("A")), 0);
        assert_eq!(file_count(&test.join("A")), 1);
    }

    #[test]
    fn test_build_without_secondary_path_drops() {
        let dir = TempDir::new().unwrap();
        let main = dir.path().join("main");
        fs::create_dir(&main).unwrap();

        let mut builder = SetBuilder::new(ShuffleMode::Disabled);
        let metrics = builder
            .build(data("A", 4), &PartitionStrategy::Amount(1), &main, None)
            .unwrap();

        assert_eq!(file_count(&main.join("A")), 3);
        assert_eq!(metrics.dropped_segments, 1);
    }

    #[test]
    fn test_is_safe_label() {
        assert!(is_safe_label("Shabbat"));
        assert!(is_safe_label("הלכות שבת"));
        assert!(!is_safe_label(""));
        assert!(!is_safe_label("."));
        assert!(!is_safe_label(".."));
        assert!(!is_safe_label("/abs/dir"));
        assert!(!is_safe_label("a/b"));
        assert!(!is_safe_label("a\\b"));
    }

    #[test]
    fn test_build_skips_labels_escaping_the_set() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data_set");
        let train = root.join("train_set");
        fs::create_dir_all(&train).unwrap();
        let outside = dir.path().join("outside");

        let mut labeled = data("Shabbat", 2);
        labeled.push("..", "climbs out");
        labeled.push(&outside.to_string_lossy(), "absolute");
        labeled.push("", "unnamed");

        let mut builder = SetBuilder::new(ShuffleMode::Disabled);
        let metrics = builder
            .build(labeled, &PartitionStrategy::everything_to_main(), &train, None)
            .unwrap();

        assert!(!outside.exists());
        assert_eq!(file_count(&root), 1);
        assert_eq!(file_count(&train), 1);
        assert_eq!(file_count(&train.join("Shabbat")), 2);
        assert_eq!(metrics.dropped_segments, 3);
        assert_eq!(metrics.label_count(), 1);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let read_all = |seed: u64| {
            let dir = TempDir::new().unwrap();
            let main = dir.path().join("main");
            fs::create_dir(&main).unwrap();
            SetBuilder::new(ShuffleMode::Seeded(seed))
                .build(data("A", 20), &PartitionStrategy::everything_to_main(), &main, None)
                .unwrap();
            (0..20)
                .map(|i| fs::read_to_string(main.join("A").join(segment_file_name(i))).unwrap())
                .collect::<Vec<_>>()
        };

        let first = read_all(7);
        assert_eq!(first, read_all(7));

        let mut sorted = first.clone();
        sorted.sort();
        let mut expected: Vec<String> = (0..20).map(|i| format!("segment {}", i)).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
