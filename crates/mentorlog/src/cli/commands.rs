//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::filter::ProjectFilter;
use crate::report::OutputFormat;

/// History documents to read.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// History documents (`-` for stdin). Defaults to `input.documents` from the configuration
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<PathBuf>,

    /// Output format (defaults to `report.format` from the configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Summary command arguments.
#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Input documents and output format
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of organizations in the ranking
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// New organizations command arguments.
#[derive(Debug, Args)]
pub struct NewOrgsCommand {
    /// Input documents and output format
    #[command(flatten)]
    pub input: InputArgs,

    /// Only show this year (defaults to every year)
    #[arg(short, long, conflicts_with = "latest")]
    pub year: Option<u32>,

    /// Only show the most recent year in the documents
    #[arg(short, long)]
    pub latest: bool,
}

impl NewOrgsCommand {
    /// The single year to show, if any. `latest_year` is the newest year
    /// present in the documents.
    #[must_use]
    pub fn selected_year(&self, latest_year: Option<u32>) -> Option<u32> {
        if self.latest {
            latest_year
        } else {
            self.year
        }
    }
}

/// Trend command arguments.
#[derive(Debug, Args)]
pub struct TrendCommand {
    /// Organization to chart (canonical name)
    pub organization: String,

    /// Input documents and output format
    #[command(flatten)]
    pub input: InputArgs,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Input documents and output format
    #[command(flatten)]
    pub input: InputArgs,

    /// Case-insensitive search in titles, mentors and mentees
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only projects from this year
    #[arg(short, long)]
    pub year: Option<u32>,

    /// Only projects from this term (e.g. "Term 1")
    #[arg(short = 'T', long)]
    pub term: Option<String>,

    /// Only projects from this organization
    #[arg(short, long = "org")]
    pub organization: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ListCommand {
    /// The selection described by the flags.
    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter {
            search: self.search.clone(),
            year: self.year,
            term: self.term.clone(),
            organization: self.organization.clone(),
        }
    }
}

/// Options command arguments.
#[derive(Debug, Args)]
pub struct OptionsCommand {
    /// Input documents and output format
    #[command(flatten)]
    pub input: InputArgs,
}

/// Convert command arguments.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// Upstream README listing the term's projects
    pub readme: PathBuf,

    /// Program year written into each title (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<u32>,

    /// Term number written into each title
    #[arg(short, long, default_value = "1")]
    pub term: u8,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
