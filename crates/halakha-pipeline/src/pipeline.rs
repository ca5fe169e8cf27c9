//! End-to-end dataset build

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::report::{PipelineReport, SourceReport};
use halakha_corpus::{
    fill_missing_labels, reduce_label_files, CorpusPaths, CorpusTree, SetBuilder, ShuffleMode,
};
use halakha_domain::PartitionStrategy;
use halakha_extractor::SourceKind;
use std::path::Path;
use tracing::{debug, info};

/// Builds the train/test corpus tree from the raw sources
///
/// Each run deletes whatever is at `set_path` and rebuilds it from scratch.
/// Running two pipelines against the same `set_path` at once is unsupported
/// and leaves the tree in an undefined state.
///
/// # Examples
///
/// ```no_run
/// use halakha_pipeline::{Pipeline, PipelineConfig, TestSource};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = Pipeline::new(PipelineConfig::cross_source(TestSource::Tur))?;
/// let report = pipeline.run()?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline, rejecting invalid configurations up front
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage and return where the sets were written
    pub fn run(&self) -> Result<PipelineReport> {
        let config = &self.config;

        info!("Cleaning the set path {}", config.set_path.display());
        let paths = CorpusTree::new(&config.set_path).initialize()?;

        let mut builder = SetBuilder::new(ShuffleMode::from_options(
            config.shuffle,
            config.shuffle_seed,
        ));
        let mut sources = Vec::new();
        let mut pruned_files = 0;

        info!("Building the Rambam train set");
        sources.push(self.build_source(
            &mut builder,
            SourceKind::Rambam,
            &PartitionStrategy::Ratio(config.train_ratio),
            &paths.train,
            &paths.test,
        )?);

        if !config.only_primary_source {
            info!("Building the auxiliary train sources");
            pruned_files = reduce_label_files(&paths.train, config.reduce_to)?;

            for kind in [SourceKind::Chinuch, SourceKind::NodaBiyhudah] {
                sources.push(self.build_source(
                    &mut builder,
                    kind,
                    &PartitionStrategy::everything_to_main(),
                    &paths.train,
                    &paths.test,
                )?);
            }
        }

        if let Some(kind) = config.test_source.external() {
            info!("Building the {} test set", kind);
            // Test source drives main; whatever the sorter diverts lands in train
            sources.push(self.build_source(
                &mut builder,
                kind,
                &config.test_sorter.strategy(config.test_amount),
                &paths.test,
                &paths.train,
            )?);
        }

        let filled_labels = fill_missing_labels(&paths.train, &paths.test)?;

        let CorpusPaths { train, test, .. } = paths;
        Ok(PipelineReport {
            train_set_path: train,
            test_set_path: test,
            sources,
            pruned_files,
            filled_labels,
        })
    }

    fn build_source(
        &self,
        builder: &mut SetBuilder,
        kind: SourceKind,
        strategy: &PartitionStrategy,
        main_path: &Path,
        secondary_path: &Path,
    ) -> Result<SourceReport> {
        let location = self.config.source_path(kind);
        let data = kind.extractor(&self.config.extractor).extract(&location)?;

        let labels = data.len();
        let segments = data.total_segments();
        debug!(
            "{} yielded {} labels and {} segments from {}",
            kind,
            labels,
            segments,
            location.display()
        );

        let metrics = builder.build(data, strategy, main_path, Some(secondary_path))?;
        Ok(SourceReport {
            source: kind.to_string(),
            strategy: strategy.name().to_string(),
            labels,
            segments,
            metrics,
        })
    }
}
