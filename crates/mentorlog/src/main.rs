//! `mentorlog` - CLI for mentorship history statistics
//!
//! Reads history documents, parses them into projects and prints summaries,
//! first-appearance tables, trends and filtered listings.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use mentorlog::cli::{
    Cli, Command, ConfigCommand, ConvertCommand, InputArgs, ListCommand, NewOrgsCommand,
    OptionsCommand, SummaryCommand, TrendCommand,
};
use mentorlog::convert::{parse_readme, render_table, TermLabel};
use mentorlog::report::{self, OutputFormat};
use mentorlog::stats::{new_organizations_by_year, summarize, trend_for_organization};
use mentorlog::{init_logging, source, Config, FilterOptions, Project};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Summary(cmd) => handle_summary(&config, &cmd),
        Command::NewOrgs(cmd) => handle_new_orgs(&config, &cmd),
        Command::Trend(cmd) => handle_trend(&config, &cmd),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Options(cmd) => handle_options(&config, &cmd),
        Command::Convert(cmd) => handle_convert(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Read and parse the requested documents, falling back to the configured ones.
fn load_projects(config: &Config, input: &InputArgs) -> anyhow::Result<Vec<Project>> {
    let paths = if input.documents.is_empty() {
        &config.input.documents
    } else {
        &input.documents
    };

    let sources = source::sources_for(paths);
    let documents = source::read_all(&sources)?;
    let projects = mentorlog::Parser::new(&config.parser).parse_documents(&documents);

    info!(
        documents = documents.len(),
        projects = projects.len(),
        "Loaded project history"
    );
    Ok(projects)
}

fn format_for(config: &Config, input: &InputArgs) -> OutputFormat {
    input.format.unwrap_or(config.report.format)
}

fn handle_summary(config: &Config, cmd: &SummaryCommand) -> anyhow::Result<()> {
    let projects = load_projects(config, &cmd.input)?;
    let summary = summarize(&projects);
    let top = cmd.top.unwrap_or(config.report.top_organizations);
    print!(
        "{}",
        report::render_summary(&summary, top, format_for(config, &cmd.input))?
    );
    Ok(())
}

fn handle_new_orgs(config: &Config, cmd: &NewOrgsCommand) -> anyhow::Result<()> {
    let projects = load_projects(config, &cmd.input)?;
    let mut new_orgs = new_organizations_by_year(&projects);
    let latest_year = summarize(&projects).latest_year();
    if let Some(year) = cmd.selected_year(latest_year) {
        new_orgs.retain(|&y, _| y == year);
        if new_orgs.is_empty() {
            info!(year, "No projects in the selected year");
        }
    }
    print!(
        "{}",
        report::render_new_orgs(&new_orgs, format_for(config, &cmd.input))?
    );
    Ok(())
}

fn handle_trend(config: &Config, cmd: &TrendCommand) -> anyhow::Result<()> {
    let projects = load_projects(config, &cmd.input)?;
    let trend = trend_for_organization(&projects, &cmd.organization);
    if trend.iter().all(|point| point.count == 0) {
        info!(organization = %cmd.organization, "Organization has no projects");
    }
    print!(
        "{}",
        report::render_trend(&cmd.organization, &trend, format_for(config, &cmd.input))?
    );
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let projects = load_projects(config, &cmd.input)?;
    let mut selected = cmd.filter().apply(&projects);
    if let Some(limit) = cmd.limit {
        selected.truncate(limit);
    }
    print!(
        "{}",
        report::render_projects(&selected, format_for(config, &cmd.input))?
    );
    Ok(())
}

fn handle_options(config: &Config, cmd: &OptionsCommand) -> anyhow::Result<()> {
    let projects = load_projects(config, &cmd.input)?;
    let options = FilterOptions::from_projects(&projects);
    print!(
        "{}",
        report::render_options(&options, format_for(config, &cmd.input))?
    );
    Ok(())
}

fn handle_convert(cmd: &ConvertCommand) -> anyhow::Result<()> {
    let readme = source::FileSource::new(cmd.readme.clone());
    let content = source::DocumentSource::read(&readme)?;
    let projects = parse_readme(&content);
    info!(projects = projects.len(), "Parsed upstream README");

    let year = cmd.year.unwrap_or_else(|| {
        u32::try_from(chrono::Local::now().year()).unwrap_or(mentorlog::config::DEFAULT_YEAR)
    });
    let label = TermLabel {
        year,
        term: cmd.term,
    };
    print!("{}", render_table(&projects, label)?);
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Input]");
                if config.input.documents.is_empty() {
                    println!("  Documents:          (none)");
                }
                for doc in &config.input.documents {
                    println!("  Document:           {}", doc.display());
                }
                println!();
                println!("[Parser]");
                println!("  Default year:       {}", config.parser.default_year);
                println!("  Default term:       {}", config.parser.default_term);
                println!(
                    "  Canonical orgs:     {}",
                    config.parser.canonical_organizations.join(", ")
                );
                println!();
                println!("[Report]");
                println!("  Top organizations:  {}", config.report.top_organizations);
                println!("  Format:             {:?}", config.report.format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path: PathBuf = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
