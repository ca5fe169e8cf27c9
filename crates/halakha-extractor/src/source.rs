//! Source catalogue and raw-source file access

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::headed::{ChinuchExtractor, NodaBiyhudahExtractor};
use crate::rambam::RambamExtractor;
use crate::sectioned::{BenIshHaiExtractor, KizurShulchanAruchExtractor, TurExtractor};
use halakha_domain::SegmentExtractor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Boxed extractor as handed out by [`SourceKind::extractor`]
pub type BoxedExtractor = Box<dyn SegmentExtractor<Error = ExtractorError>>;

/// The six supported raw corpora
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Mishneh Torah, one file per book of laws
    Rambam,
    /// Ben Ish Hai, one file per portion, sections marked `אות`
    BenIshHai,
    /// Sefer HaChinuch, a single file with `#` label headings
    Chinuch,
    /// Kizur Shulchan Aruch, one file per chapter group, sections marked `סעיף`
    KizurShulchanAruch,
    /// Noda Biyhudah responsa, a single file with `Teshuva` headings
    NodaBiyhudah,
    /// Arba'ah Turim, one file per section, sub-sections marked `סימן`
    Tur,
}

impl SourceKind {
    /// Build the extractor for this source
    pub fn extractor(self, config: &ExtractorConfig) -> BoxedExtractor {
        let config = config.clone();
        match self {
            SourceKind::Rambam => Box::new(RambamExtractor::new(config)),
            SourceKind::BenIshHai => Box::new(BenIshHaiExtractor::new(config)),
            SourceKind::Chinuch => Box::new(ChinuchExtractor::new(config)),
            SourceKind::KizurShulchanAruch => Box::new(KizurShulchanAruchExtractor::new(config)),
            SourceKind::NodaBiyhudah => Box::new(NodaBiyhudahExtractor::new(config)),
            SourceKind::Tur => Box::new(TurExtractor::new(config)),
        }
    }

    /// Location of this source relative to its data root
    pub fn default_location(self) -> &'static str {
        match self {
            SourceKind::Rambam => "Rambam/",
            SourceKind::BenIshHai => "Ben-Ish Hai/",
            SourceKind::Chinuch => "Chinuch/Chinuch.txt",
            SourceKind::KizurShulchanAruch => "Kizur Shulchan Aruch/",
            SourceKind::NodaBiyhudah => "Noda_Biyhudah/Noda Biyhudah.txt",
            SourceKind::Tur => "Tur/",
        }
    }

    /// Stable identifier
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Rambam => "rambam",
            SourceKind::BenIshHai => "ben-ish-hai",
            SourceKind::Chinuch => "chinuch",
            SourceKind::KizurShulchanAruch => "kizur-shulchan-aruch",
            SourceKind::NodaBiyhudah => "noda-biyhudah",
            SourceKind::Tur => "tur",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of a per-label file: its name up to the first `.`
pub fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Regular files directly under `dir`, sorted by file name
pub fn list_source_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractorError> {
    if !dir.is_dir() {
        return Err(ExtractorError::SourceNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| ExtractorError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractorError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a UTF-8 source file
pub fn read_source(path: &Path) -> Result<String, ExtractorError> {
    if !path.is_file() {
        return Err(ExtractorError::SourceNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_path() {
        assert_eq!(label_from_path(Path::new("/data/Rambam/Shabbat.txt")), "Shabbat");
        assert_eq!(label_from_path(Path::new("Tur/אורח חיים.part1.txt")), "אורח חיים");
        assert_eq!(label_from_path(Path::new("noext")), "noext");
    }

    #[test]
    fn test_extractor_names_match_kind() {
        let config = ExtractorConfig::default();
        for kind in [
            SourceKind::Rambam,
            SourceKind::BenIshHai,
            SourceKind::Chinuch,
            SourceKind::KizurShulchanAruch,
            SourceKind::NodaBiyhudah,
            SourceKind::Tur,
        ] {
            assert_eq!(kind.extractor(&config).name(), kind.as_str());
        }
    }

    #[test]
    fn test_missing_directory() {
        let result = list_source_files(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(ExtractorError::SourceNotFound(_))));
    }
}
