//! Aggregation over parsed projects.
//!
//! Every function here is a pure function of the project slice (and, for
//! [`trend_for_organization`], the selected organization). Nothing is cached:
//! callers recompute when the collection or the selection changes. Empty
//! input and unknown selections produce empty or all-zero results.

mod new_orgs;
mod summary;
mod trend;

use serde::{Deserialize, Serialize};

pub use new_orgs::new_organizations_by_year;
pub use summary::{summarize, Summary};
pub use trend::{trend_for_organization, year_range};

/// Number of projects for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgStat {
    /// Canonical organization name.
    pub name: String,
    /// Projects attributed to it.
    pub count: usize,
}

/// Number of projects in one year. Also used for trend points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearStat {
    /// Program year.
    pub year: u32,
    /// Projects in that year.
    pub count: usize,
}
