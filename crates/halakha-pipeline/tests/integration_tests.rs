//! Integration tests for full pipeline runs over fixture corpora

use halakha_pipeline::{
    Pipeline, PipelineConfig, PipelineError, TestSorter, TestSource,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixture corpora laid out at their default locations
struct Fixture {
    _dir: TempDir,
    train_root: PathBuf,
    test_root: PathBuf,
    set_root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let train_root = dir.path().join("train_data");
        let test_root = dir.path().join("test_data");
        let set_root = dir.path().join("data_set");
        fs::create_dir_all(train_root.join("Rambam")).unwrap();
        fs::create_dir_all(test_root.join("Tur")).unwrap();
        Self {
            _dir: dir,
            train_root,
            test_root,
            set_root,
        }
    }

    fn write(&self, path: PathBuf, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    /// A Rambam label file of `verses` verses, 50 words each
    fn rambam(&self, label: &str, verses: usize) {
        let mut contents = String::from("הלכות\n");
        for v in 0..verses {
            let words: Vec<String> = (0..50).map(|i| format!("w{}x{}", v, i)).collect();
            contents.push_str(&format!("{}  {}\n", v, words.join(" ")));
        }
        self.write(self.train_root.join("Rambam").join(format!("{}.txt", label)), &contents);
    }

    fn config(&self, test_source: TestSource) -> PipelineConfig {
        PipelineConfig {
            train_path: self.train_root.clone(),
            test_path: self.test_root.clone(),
            set_path: self.set_root.clone(),
            shuffle: false,
            ..PipelineConfig::cross_source(test_source)
        }
    }

    fn train(&self, label: &str) -> PathBuf {
        self.set_root.join("train_set").join(label)
    }

    fn test(&self, label: &str) -> PathBuf {
        self.set_root.join("test_set").join(label)
    }
}

fn files_in(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

#[test]
fn test_rambam_only_with_empty_test_source() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 5);

    let config = PipelineConfig {
        only_primary_source: true,
        ..fixture.config(TestSource::Tur)
    };
    let report = Pipeline::new(config).unwrap().run().unwrap();

    assert_eq!(report.train_set_path, fixture.set_root.join("train_set"));
    assert_eq!(files_in(&fixture.train("Shabbat")), 3);
    let last = fs::read_to_string(fixture.train("Shabbat").join("#2.txt")).unwrap();
    assert_eq!(last.split_whitespace().count(), 50);

    // Mirrored as an empty label
    assert!(fixture.test("Shabbat").is_dir());
    assert_eq!(files_in(&fixture.test("Shabbat")), 0);
    assert_eq!(report.filled_labels, 1);
}

#[test]
fn test_rambam_holdout_splits_by_ratio() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 10);

    let config = PipelineConfig {
        train_ratio: 0.8,
        only_primary_source: true,
        extractor: halakha_extractor::ExtractorConfig {
            words_per_segment: 50,
            ..Default::default()
        },
        ..fixture.config(TestSource::Rambam)
    };
    let report = Pipeline::new(config).unwrap().run().unwrap();

    assert_eq!(files_in(&fixture.train("Shabbat")), 8);
    assert_eq!(files_in(&fixture.test("Shabbat")), 2);
    assert_eq!(report.sources.len(), 1);
    assert_eq!(report.filled_labels, 0);
}

#[test]
fn test_auxiliary_sources_merge_after_reduction() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 5);
    fixture.write(
        fixture.train_root.join("Chinuch").join("Chinuch.txt"),
        "# Shabbat\nא ב ג\n# Shabbat\nד ה ו\n",
    );
    fixture.write(
        fixture.train_root.join("Noda_Biyhudah").join("Noda Biyhudah.txt"),
        "Teshuva 1 Eruvin\n<b>ז</b> ח\n",
    );
    let tur_words: Vec<String> = (0..30).map(|i| format!("t{}", i)).collect();
    fixture.write(
        fixture.test_root.join("Tur").join("Shabbat.txt"),
        &format!("סימן א\n{}\n", tur_words.join(" ")),
    );

    let config = PipelineConfig {
        reduce_to: 4,
        test_sorter: TestSorter::Amount,
        test_amount: 1,
        extractor: halakha_extractor::ExtractorConfig {
            words_per_segment: 10,
            ..Default::default()
        },
        ..fixture.config(TestSource::Tur)
    };
    let report = Pipeline::new(config).unwrap().run().unwrap();

    // 250 Rambam words -> 25 segments, capped at 4
    assert_eq!(report.pruned_files, 21);
    // 4 Rambam + 1 Chinuch + 1 diverted from the Tur
    assert_eq!(files_in(&fixture.train("Shabbat")), 6);
    let chinuch = fs::read_to_string(fixture.train("Shabbat").join("#4.txt")).unwrap();
    assert_eq!(chinuch, "א ב ג ד ה ו");
    assert_eq!(
        fs::read_to_string(fixture.train("Eruvin").join("#0.txt")).unwrap(),
        "ז ח"
    );

    assert_eq!(files_in(&fixture.test("Shabbat")), 2);
    assert!(fixture.test("Eruvin").is_dir());
    assert_eq!(report.filled_labels, 1);

    let names: Vec<&str> = report.sources.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(names, ["rambam", "chinuch", "noda-biyhudah", "tur"]);
}

#[test]
fn test_rerun_replaces_previous_tree() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 2);
    let config = PipelineConfig {
        only_primary_source: true,
        ..fixture.config(TestSource::Tur)
    };
    let pipeline = Pipeline::new(config).unwrap();

    pipeline.run().unwrap();
    fs::write(fixture.train("Shabbat").join("#9.txt"), "stale").unwrap();
    pipeline.run().unwrap();

    assert_eq!(files_in(&fixture.train("Shabbat")), 1);
}

#[test]
fn test_path_like_headings_stay_out_of_the_tree() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 1);
    fixture.write(
        fixture.train_root.join("Chinuch").join("Chinuch.txt"),
        "# ..\nבורח\n# /tmp/elsewhere\nבחוץ\n# Shabbat\nבפנים\n",
    );
    fixture.write(
        fixture.train_root.join("Noda_Biyhudah").join("Noda Biyhudah.txt"),
        "",
    );
    let pipeline = Pipeline::new(fixture.config(TestSource::Tur)).unwrap();

    let report = pipeline.run().unwrap();
    assert_eq!(report.sources[1].metrics.dropped_segments, 2);
    assert_eq!(files_in(&fixture.set_root), 2);
    assert_eq!(files_in(&fixture.train("Shabbat")), 2);

    // A second run can still clear the tree
    pipeline.run().unwrap();
    assert_eq!(files_in(&fixture.train("Shabbat")), 2);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 10);
    let config = PipelineConfig {
        train_ratio: 0.5,
        shuffle: true,
        shuffle_seed: Some(42),
        only_primary_source: true,
        extractor: halakha_extractor::ExtractorConfig {
            words_per_segment: 25,
            ..Default::default()
        },
        ..fixture.config(TestSource::Rambam)
    };
    let pipeline = Pipeline::new(config).unwrap();

    let snapshot = || {
        (0..10)
            .map(|i| fs::read_to_string(fixture.test("Shabbat").join(format!("#{}.txt", i))).unwrap())
            .collect::<Vec<_>>()
    };
    pipeline.run().unwrap();
    let first = snapshot();
    pipeline.run().unwrap();
    assert_eq!(first, snapshot());
}

#[test]
fn test_contradictory_config_is_rejected() {
    let fixture = Fixture::new();
    let config = PipelineConfig {
        train_ratio: 1.0,
        ..fixture.config(TestSource::Rambam)
    };

    let result = Pipeline::new(config);

    assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
    assert!(!fixture.set_root.exists());
}

#[test]
fn test_missing_source_fails_the_run() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 1);

    // Auxiliary sources are absent from the fixture
    let result = Pipeline::new(fixture.config(TestSource::Tur)).unwrap().run();

    assert!(matches!(result, Err(PipelineError::Extractor(_))));
}

#[test]
fn test_report_serializes() {
    let fixture = Fixture::new();
    fixture.rambam("Shabbat", 1);
    let config = PipelineConfig {
        only_primary_source: true,
        ..fixture.config(TestSource::Tur)
    };
    let report = Pipeline::new(config).unwrap().run().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["sources"][0]["source"], "rambam");
    assert_eq!(json["sources"][0]["metrics"]["labels"]["Shabbat"]["main"], 1);
    assert!(report.summary().contains("rambam (ratio)"));
}
