//! Command-line interface for mentorlog.
//!
//! This module provides the CLI structure for the `mentorlog` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ConvertCommand, InputArgs, ListCommand, NewOrgsCommand, OptionsCommand,
    SummaryCommand, TrendCommand,
};

/// mentorlog - Statistics from a mentorship program's history
///
/// Parses a history document (year and term headings followed by project
/// tables) and reports per-organization and per-year statistics.
#[derive(Debug, Parser)]
#[command(name = "mentorlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Project, organization, mentor and mentee totals
    Summary(SummaryCommand),

    /// Organizations grouped by the year they first took part
    NewOrgs(NewOrgsCommand),

    /// Yearly project counts for one organization
    Trend(TrendCommand),

    /// List and filter projects
    List(ListCommand),

    /// Years, terms and organizations the `list` filters accept
    Options(OptionsCommand),

    /// Turn an upstream term README into history table rows
    Convert(ConvertCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
