//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use halakha_pipeline::{Pipeline, PipelineConfig};

/// Execute the build command.
pub fn execute_build(args: BuildArgs, formatter: &Formatter) -> Result<()> {
    let mut pipeline_config = config::load(args.config.as_deref())?;
    apply_overrides(&args, &mut pipeline_config)?;

    let report = Pipeline::new(pipeline_config)?.run()?;

    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_overrides(args: &BuildArgs, config: &mut PipelineConfig) -> Result<()> {
    if let Some(path) = &args.train_path {
        config.train_path = path.clone();
    }
    if let Some(path) = &args.test_path {
        config.test_path = path.clone();
    }
    if let Some(path) = &args.set_path {
        config.set_path = path.clone();
    }
    if args.no_shuffle {
        config.shuffle = false;
    }
    if let Some(seed) = args.seed {
        config.shuffle_seed = Some(seed);
    }
    if let Some(ratio) = args.train_ratio {
        if ratio.is_nan() {
            return Err(CliError::InvalidInput("train ratio must be a number".to_string()));
        }
        config.train_ratio = ratio;
    }
    if let Some(amount) = args.test_amount {
        config.test_amount = amount;
    }
    if let Some(sorter) = args.test_sorter {
        config.test_sorter = sorter.into();
    }
    if args.only_rambam {
        config.only_primary_source = true;
    }
    if let Some(source) = args.test_source {
        config.test_source = source.into();
    }
    if let Some(words) = args.words_per_segment {
        config.extractor.words_per_segment = words;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{TestSorterArg, TestSourceArg};
    use halakha_pipeline::{TestSorter, TestSource};
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = BuildArgs {
            set_path: Some(PathBuf::from("/tmp/set")),
            no_shuffle: true,
            seed: Some(9),
            train_ratio: Some(0.75),
            test_sorter: Some(TestSorterArg::Keyword),
            test_source: Some(TestSourceArg::Tur),
            only_rambam: true,
            words_per_segment: Some(0),
            ..BuildArgs::default()
        };
        let mut config = PipelineConfig::default();

        apply_overrides(&args, &mut config).unwrap();

        assert_eq!(config.set_path, PathBuf::from("/tmp/set"));
        assert!(!config.shuffle);
        assert_eq!(config.shuffle_seed, Some(9));
        assert_eq!(config.train_ratio, 0.75);
        assert_eq!(config.test_sorter, TestSorter::Keyword);
        assert_eq!(config.test_source, TestSource::Tur);
        assert!(config.only_primary_source);
        assert_eq!(config.extractor.words_per_segment, 0);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = PipelineConfig::rambam_holdout();
        apply_overrides(&BuildArgs::default(), &mut config).unwrap();
        assert_eq!(config, PipelineConfig::rambam_holdout());
    }

    #[test]
    fn test_nan_ratio_rejected() {
        let args = BuildArgs {
            train_ratio: Some(f64::NAN),
            ..BuildArgs::default()
        };
        let result = apply_overrides(&args, &mut PipelineConfig::default());
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
