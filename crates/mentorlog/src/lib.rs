//! `mentorlog` - Statistics from a mentorship program's history document
//!
//! This library parses a markdown-like history document (year and term
//! headings, each followed by a table of projects) into [`Project`] records
//! and derives per-organization and per-year statistics from them.
//!
//! ```
//! let doc = "#### 2023\n##### Term 1\n\
//!            | [CNCF - Kubernetes: Improve scheduler](http://x) | Alice, Bob | Carol |\n";
//! let projects = mentorlog::parse(doc);
//! assert_eq!(projects[0].organization, "Kubernetes");
//!
//! let summary = mentorlog::stats::summarize(&projects);
//! assert_eq!(summary.total_mentees, 1);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod project;
pub mod report;
pub mod source;
pub mod stats;

pub use config::Config;
pub use error::{Error, Result};
pub use filter::{FilterOptions, ProjectFilter};
pub use logging::init_logging;
pub use parser::{parse, Parser};
pub use project::{Project, ProjectId};
pub use stats::{OrgStat, Summary, YearStat};
