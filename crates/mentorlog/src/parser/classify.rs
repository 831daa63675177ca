//! Line classification.
//!
//! Every line of a history document is exactly one of: a year heading
//! (`#### 2023`), a term heading (`##### Term 1`), a table row, or noise.
//! Checks run in that order and the first match wins.

use std::sync::LazyLock;

use regex::Regex;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{4}\s([0-9]{4})").unwrap());
static TERM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{5}\s(.*)$").unwrap());
static YEAR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}\s+").unwrap());

/// What a single line of the document is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `#### YYYY`: sets the year for the rows that follow.
    YearMarker(u32),
    /// `##### Label`: sets the term. `None` when the label normalizes to nothing.
    TermMarker(Option<String>),
    /// A pipe-delimited project row.
    TableRow,
    /// Anything else.
    Noise,
}

/// Classify one line.
#[must_use]
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();

    if let Some(caps) = YEAR_RE.captures(line) {
        // Four ASCII digits always fit in a u32.
        if let Ok(year) = caps[1].parse() {
            return LineKind::YearMarker(year);
        }
    }

    if let Some(caps) = TERM_RE.captures(line) {
        return LineKind::TermMarker(normalize_term(&caps[1]));
    }

    if is_table_row(line) {
        return LineKind::TableRow;
    }

    LineKind::Noise
}

/// `2025 Term 1: Mar - May` and `Term 1` both become `Term 1`.
fn normalize_term(raw: &str) -> Option<String> {
    let label = raw.split(':').next().unwrap_or_default().trim();
    let label = YEAR_PREFIX_RE.replace(label, "");
    let label = label.trim();
    (!label.is_empty()).then(|| label.to_string())
}

fn is_table_row(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('|') else {
        return false;
    };
    rest.contains('|') && !line.split('|').any(is_separator_cell)
}

/// `---`, `:---`, `---:` and `:---:` mark the header/body divider.
fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.trim().trim_start_matches(':').trim_end_matches(':');
    !dashes.is_empty() && dashes.chars().all(|c| c == '-')
}
