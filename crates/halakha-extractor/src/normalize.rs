//! Line-level text normalization shared by the extractors

use regex::Regex;
use std::sync::LazyLock;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Punctuation removed by the sectioned and single-file sources
const SECTION_PUNCTUATION: &[char] = &[',', '.', ';', ':', ')', '('];

/// Punctuation removed from Rambam verses (adds the double quote)
const RAMBAM_PUNCTUATION: &[char] = &[',', '.', ';', ':', ')', '(', '"'];

/// `(commentary)` preceded by whitespace
static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\([^()]*\)").expect("parenthetical pattern is valid"));

/// `[reference]` followed by whitespace
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^()]*\]\s").expect("bracketed pattern is valid"));

/// Trim a line and drop a leading byte-order mark
///
/// Returns `None` for blank lines.
pub fn clean_line(raw: &str) -> Option<&str> {
    let line = raw.trim_start_matches(BYTE_ORDER_MARK).trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Remove the sectioned-source punctuation set
pub fn strip_punctuation(line: &str) -> String {
    line.replace(SECTION_PUNCTUATION, "")
}

/// Remove inline `<b>` / `</b>` markup
pub fn strip_bold_markup(line: &str) -> String {
    line.replace("<b>", "").replace("</b>", "")
}

/// Normalize the body of one Rambam verse
///
/// Drops inline annotations, strips punctuation and turns dashes into
/// word breaks.
pub fn clean_rambam_verse(body: &str) -> String {
    let text = PARENTHETICAL.replace_all(body, "");
    let text = BRACKETED.replace_all(&text, "");
    text.replace(RAMBAM_PUNCTUATION, "")
        .replace("--", " ")
        .replace('-', " ")
        .replace("  ", " ")
}

/// Append `line` to a running text with a single separating space
pub fn append_line(text: &mut String, line: &str) {
    if line.is_empty() {
        return;
    }
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(line);
}
