//! Text renderings of projects and aggregates.
//!
//! Each renderer returns the full report as a `String`; the binary only
//! prints it.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FilterOptions;
use crate::project::Project;
use crate::stats::{OrgStat, Summary, YearStat};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Aligned table
    Table,
    /// JSON output
    Json,
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat((count * width).div_ceil(max))
}

/// Headline numbers, top organizations and yearly counts.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_summary(summary: &Summary, top: usize, format: OutputFormat) -> Result<String> {
    let top_orgs = summary.top_organizations(top);

    if format == OutputFormat::Json {
        let report = serde_json::json!({
            "total_projects": summary.total_projects,
            "total_orgs": summary.total_orgs,
            "total_mentors": summary.total_mentors,
            "total_mentees": summary.total_mentees,
            "top_organizations": top_orgs,
            "year_stats": summary.year_stats,
        });
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(out, "Total projects:   {}", summary.total_projects)?;
    writeln!(out, "Organizations:    {}", summary.total_orgs)?;
    writeln!(out, "Mentors involved: {}", summary.total_mentors)?;
    writeln!(out, "Mentees accepted: {}", summary.total_mentees)?;
    writeln!(out)?;
    out.push_str(&render_org_stats(top_orgs, format)?);
    writeln!(out)?;
    out.push_str(&render_year_stats(&summary.year_stats, "Projects by year", format)?);
    Ok(out)
}

fn render_org_stats(orgs: &[OrgStat], format: OutputFormat) -> Result<String> {
    let mut out = String::from("Top organizations\n");
    match format {
        OutputFormat::Table => {
            let max = orgs.first().map_or(0, |o| o.count);
            writeln!(out, "{:>3} | {:<28} | {:>5} |", "#", "Organization", "Count")?;
            writeln!(out, "{}", "-".repeat(44))?;
            for (i, org) in orgs.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3} | {:<28} | {:>5} | {}",
                    i + 1,
                    truncate(&org.name, 28),
                    org.count,
                    bar(org.count, max, 20)
                )?;
            }
        }
        _ => {
            for (i, org) in orgs.iter().enumerate() {
                writeln!(out, "  {}. {} ({})", i + 1, org.name, org.count)?;
            }
        }
    }
    Ok(out)
}

fn render_year_stats(years: &[YearStat], heading: &str, format: OutputFormat) -> Result<String> {
    let mut out = format!("{heading}\n");
    match format {
        OutputFormat::Table => {
            let max = years.iter().map(|y| y.count).max().unwrap_or(0);
            writeln!(out, "{:>4} | {:>5} |", "Year", "Count")?;
            writeln!(out, "{}", "-".repeat(15))?;
            for y in years {
                writeln!(
                    out,
                    "{:>4} | {:>5} | {}",
                    y.year,
                    y.count,
                    bar(y.count, max, 20)
                )?;
            }
        }
        _ => {
            for y in years {
                writeln!(out, "  {}: {}", y.year, y.count)?;
            }
        }
    }
    Ok(out)
}

/// Organizations by the year they first appeared.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_new_orgs(
    new_orgs: &BTreeMap<u32, Vec<String>>,
    format: OutputFormat,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(new_orgs)?);
    }

    let mut out = String::new();
    for (year, orgs) in new_orgs {
        writeln!(out, "{year}: {} new", orgs.len())?;
        for org in orgs {
            writeln!(out, "  - {org}")?;
        }
    }
    Ok(out)
}

/// Year-by-year trend for one organization.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_trend(organization: &str, trend: &[YearStat], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let report = serde_json::json!({
            "organization": organization,
            "trend": trend,
        });
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    render_year_stats(trend, &format!("Projects per year: {organization}"), format)
}

/// Values the `list` filters accept.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_options(options: &FilterOptions, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(options)?);
    }

    let years: Vec<String> = options.years.iter().map(u32::to_string).collect();
    let mut out = String::new();
    writeln!(out, "Years:         {}", years.join(", "))?;
    writeln!(out, "Terms:         {}", options.terms.join(", "))?;
    writeln!(out, "Organizations: {}", options.organizations.join(", "))?;
    Ok(out)
}

/// Project listing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_projects(projects: &[&Project], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => return Ok(serde_json::to_string_pretty(projects)?),
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>4} | {:<8} | {:<20} | {:<36} | {:<24} | {:<16}",
                "Year", "Term", "Organization", "Title", "Mentors", "Mentee"
            )?;
            writeln!(out, "{}", "-".repeat(122))?;
            for p in projects {
                let mentee = if p.has_mentee() { p.mentee.as_str() } else { "-" };
                writeln!(
                    out,
                    "{:>4} | {:<8} | {:<20} | {:<36} | {:<24} | {:<16}",
                    p.year,
                    truncate(&p.term, 8),
                    truncate(&p.organization, 20),
                    truncate(&p.title, 36),
                    truncate(&p.mentors.join(", "), 24),
                    truncate(mentee, 16)
                )?;
            }
        }
        OutputFormat::Plain => {
            for p in projects {
                writeln!(out, "[{} {}] {}: {}", p.year, p.term, p.organization, p.title)?;
                if !p.url.is_empty() {
                    writeln!(out, "  url:     {}", p.url)?;
                }
                writeln!(out, "  mentors: {}", p.mentors.join(", "))?;
                let mentee = if p.has_mentee() { p.mentee.as_str() } else { "unassigned" };
                writeln!(out, "  mentee:  {mentee}")?;
            }
        }
    }
    writeln!(out, "\n{} projects", projects.len())?;
    Ok(out)
}
