//! Record extraction from a single table row.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Cells of one project row, before any title normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Link text of the first cell, or the whole cell when it has no link.
    pub title: String,
    /// Link target, empty when the first cell has no link.
    pub url: String,
    /// Mentors, trimmed, blanks dropped.
    pub mentors: Vec<String>,
    /// Mentee cell, trimmed. Empty when absent or blank.
    pub mentee: String,
}

/// Split a table row into a [`RawRow`].
///
/// Returns `None` for rows with fewer than two cells and for the
/// `| Project | Mentors | Mentee |` header.
#[must_use]
pub fn extract_row(line: &str) -> Option<RawRow> {
    let cells = split_cells(line);

    let [project, mentors, rest @ ..] = cells.as_slice() else {
        debug!(line, "Dropping row with fewer than two cells");
        return None;
    };

    if project.eq_ignore_ascii_case("project") {
        return None;
    }

    let (title, url) = match LINK_RE.captures(project) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => ((*project).to_string(), String::new()),
    };

    Some(RawRow {
        title,
        url,
        mentors: split_mentors(mentors),
        mentee: rest.first().map(|m| (*m).to_string()).unwrap_or_default(),
    })
}

/// Trimmed cells, without the empty edges produced by leading and trailing pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

fn split_mentors(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}
