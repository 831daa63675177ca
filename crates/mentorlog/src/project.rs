//! Core record types for mentorlog.
//!
//! A [`Project`] is one table row of the history document after its year and
//! term context has been attached and its title has been normalized.

use serde::{Deserialize, Serialize};

/// Stable identifier of a parsed project.
///
/// Derived from the row's position and raw text, so parsing the same
/// document twice yields the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Number of hex characters kept from the BLAKE3 digest.
    const LEN: usize = 16;

    /// Derive the id of the row at `line` in document `document`.
    #[must_use]
    pub fn derive(document: usize, line: usize, raw_line: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(document as u64).to_le_bytes());
        hasher.update(&(line as u64).to_le_bytes());
        hasher.update(raw_line.as_bytes());
        let mut hex = hasher.finalize().to_hex().to_string();
        hex.truncate(Self::LEN);
        Self(hex)
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single mentorship project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier within one parsed collection.
    pub id: ProjectId,

    /// Program year the project ran in.
    pub year: u32,

    /// Term label, without any year prefix (e.g. `Term 1`).
    pub term: String,

    /// Canonical organization name; `Other` when none could be extracted.
    pub organization: String,

    /// Title with the organization prefix and term annotation removed.
    pub title: String,

    /// Project link, empty when the title cell had none.
    pub url: String,

    /// Mentor names in document order.
    pub mentors: Vec<String>,

    /// Mentee name. Empty for an unfilled slot.
    pub mentee: String,

    /// The source line, kept for diagnostics.
    pub raw_line: String,
}

impl Project {
    /// Whether the mentee slot has been filled.
    #[must_use]
    pub fn has_mentee(&self) -> bool {
        !self.mentee.trim().is_empty()
    }
}
