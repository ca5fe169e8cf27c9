//! Directory sources split by two-token section markers
//!
//! Ben Ish Hai, Kizur Shulchan Aruch and Tur all ship one file per label.
//! Inside a file, a line of exactly two tokens whose first token is the
//! source's marker (e.g. `סעיף ג`) closes the running section. Each source
//! also has its own rule for header lines to skip outright.

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalize::{append_line, clean_line, strip_punctuation};
use crate::source::{label_from_path, list_source_files, read_source};
use crate::windowing::WordWindower;
use halakha_domain::{LabeledSegments, Segment, SegmentExtractor};
use std::path::Path;
use tracing::{debug, info};

/// Per-source boundary and skip rules
#[derive(Debug, Clone, Copy)]
pub struct SectionRules {
    /// First token of a section boundary line
    pub marker: &'static str,
    /// Lines to drop before any other processing
    pub skip: fn(&str) -> bool,
}

impl SectionRules {
    fn is_boundary(&self, line: &str) -> bool {
        let mut tokens = line.split_whitespace();
        matches!(
            (tokens.next(), tokens.next(), tokens.next()),
            (Some(first), Some(_), None) if first == self.marker
        )
    }
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn skip_ben_ish_hai(line: &str) -> bool {
    starts_with_digit(line) || line.contains(BEN_ISH_HAI_TITLE)
}

fn skip_nothing(_line: &str) -> bool {
    false
}

fn skip_tur(line: &str) -> bool {
    starts_with_digit(line) || line.contains("www")
}

/// Title line repeated at the top of every Ben Ish Hai file
pub const BEN_ISH_HAI_TITLE: &str = "בן איש חי – הלכות";

/// Ben Ish Hai: sections marked `אות`, skip numbered lines and the title
pub const BEN_ISH_HAI_RULES: SectionRules = SectionRules {
    marker: "אות",
    skip: skip_ben_ish_hai,
};

/// Kizur Shulchan Aruch: sections marked `סעיף`, nothing extra to skip
pub const KIZUR_SHULCHAN_ARUCH_RULES: SectionRules = SectionRules {
    marker: "סעיף",
    skip: skip_nothing,
};

/// Tur: sections marked `סימן`, skip numbered lines and site footers
pub const TUR_RULES: SectionRules = SectionRules {
    marker: "סימן",
    skip: skip_tur,
};

/// Split one file's contents into sections
pub fn split_sections(contents: &str, rules: &SectionRules) -> Vec<Segment> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for raw in contents.lines() {
        let Some(line) = clean_line(raw) else {
            continue;
        };
        if (rules.skip)(line) {
            continue;
        }

        if rules.is_boundary(line) {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            append_line(&mut current, &strip_punctuation(line));
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

/// Shared extraction for every sectioned directory source
fn extract_sectioned(
    source: &Path,
    rules: &SectionRules,
    config: &ExtractorConfig,
) -> Result<LabeledSegments, ExtractorError> {
    let mut data = LabeledSegments::new();

    for file in list_source_files(source)? {
        let label = label_from_path(&file);
        let sections = split_sections(&read_source(&file)?, rules);
        debug!("{}: {} sections from {}", label, sections.len(), file.display());

        if !sections.is_empty() {
            data.segments_mut(&label).extend(sections);
        }
    }

    if let Some(window) = config.section_window() {
        data = WordWindower::new(window).rewindow(data);
    }

    info!(
        "Extracted {} labels, {} segments from {}",
        data.len(),
        data.total_segments(),
        source.display()
    );
    Ok(data)
}

macro_rules! sectioned_extractor {
    ($(#[$doc:meta])* $name:ident, $rules:expr, $source_name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            config: ExtractorConfig,
        }

        impl $name {
            /// Create a new extractor
            pub fn new(config: ExtractorConfig) -> Self {
                Self { config }
            }
        }

        impl SegmentExtractor for $name {
            type Error = ExtractorError;

            fn name(&self) -> &'static str {
                $source_name
            }

            fn extract(&self, source: &Path) -> Result<LabeledSegments, ExtractorError> {
                extract_sectioned(source, &$rules, &self.config)
            }
        }
    };
}

sectioned_extractor!(
    /// Extractor for the Ben Ish Hai directory
    BenIshHaiExtractor,
    BEN_ISH_HAI_RULES,
    "ben-ish-hai"
);

sectioned_extractor!(
    /// Extractor for the Kizur Shulchan Aruch directory
    KizurShulchanAruchExtractor,
    KIZUR_SHULCHAN_ARUCH_RULES,
    "kizur-shulchan-aruch"
);

sectioned_extractor!(
    /// Extractor for the Tur directory
    TurExtractor,
    TUR_RULES,
    "tur"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_requires_exactly_two_tokens() {
        assert!(KIZUR_SHULCHAN_ARUCH_RULES.is_boundary("סעיף א"));
        assert!(!KIZUR_SHULCHAN_ARUCH_RULES.is_boundary("סעיף"));
        assert!(!KIZUR_SHULCHAN_ARUCH_RULES.is_boundary("סעיף א ב"));
        assert!(!KIZUR_SHULCHAN_ARUCH_RULES.is_boundary("אות א"));
    }

    #[test]
    fn test_split_sections_on_marker() {
        let contents = "סעיף א\nראשון, שורה.\nהמשך\nסעיף ב\nשני\n";
        let sections = split_sections(contents, &KIZUR_SHULCHAN_ARUCH_RULES);
        assert_eq!(sections, ["ראשון שורה המשך", "שני"]);
    }

    #[test]
    fn test_consecutive_markers_make_no_empty_sections() {
        let contents = "סימן א\nסימן ב\nטקסט\nסימן ג\n";
        assert_eq!(split_sections(contents, &TUR_RULES), ["טקסט"]);
    }

    #[test]
    fn test_ben_ish_hai_skips_title_and_numbered_lines() {
        let contents = "\u{feff}בן איש חי – הלכות שנה ראשונה\n12 הערה\nאות א\nדין (ראשון)\n";
        assert_eq!(split_sections(contents, &BEN_ISH_HAI_RULES), ["דין ראשון"]);
    }

    #[test]
    fn test_only_ascii_digits_start_a_skipped_line() {
        let contents = "אות א\n½ כוס\nⅧ פרקים\n7 הערה\n";
        assert_eq!(split_sections(contents, &BEN_ISH_HAI_RULES), ["½ כוס Ⅷ פרקים"]);
    }

    #[test]
    fn test_tur_skips_site_lines() {
        let contents = "סימן א\nwww.example.org\nתוכן\n";
        assert_eq!(split_sections(contents, &TUR_RULES), ["תוכן"]);
    }

    #[test]
    fn test_digit_lines_kept_for_kizur() {
        let contents = "3 שורה\n";
        assert_eq!(split_sections(contents, &KIZUR_SHULCHAN_ARUCH_RULES), ["3 שורה"]);
    }
}
