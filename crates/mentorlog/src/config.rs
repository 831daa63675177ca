//! Configuration management for mentorlog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::report::OutputFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "mentorlog";

/// Year applied to rows that precede any year heading.
pub const DEFAULT_YEAR: u32 = 2022;

/// Term applied to rows that precede any term heading.
pub const DEFAULT_TERM: &str = "Unknown";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `MENTORLOG_`, sections split on `__`)
/// 2. TOML config file at `~/.config/mentorlog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input configuration.
    pub input: InputConfig,
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Report configuration.
    pub report: ReportConfig,
}

/// Input-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Documents parsed when none are given on the command line.
    pub documents: Vec<PathBuf>,
}

/// Parser fallbacks and organization folding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Year used when no year heading precedes a row.
    pub default_year: u32,
    /// Term used when no term heading precedes a row.
    pub default_term: String,
    /// Umbrella organizations; an extracted name containing one of these is
    /// folded into it. First match wins.
    pub canonical_organizations: Vec<String>,
}

/// Report-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of organizations shown in the summary ranking.
    pub top_organizations: usize,
    /// Output format used when the command line doesn't pick one.
    pub format: OutputFormat,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR,
            default_term: DEFAULT_TERM.to_string(),
            canonical_organizations: default_canonical_organizations(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_organizations: 8,
            format: OutputFormat::Plain,
        }
    }
}

/// Umbrella organizations whose sub-projects are reported under one name.
fn default_canonical_organizations() -> Vec<String> {
    vec![
        "Kubernetes".to_string(),
        "Knative".to_string(),
        "WasmEdge".to_string(),
    ]
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("MENTORLOG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.parser.default_year == 0 {
            return Err(Error::config_validation(
                "parser.default_year must be greater than 0",
            ));
        }

        if self.parser.default_term.trim().is_empty() {
            return Err(Error::config_validation(
                "parser.default_term must not be empty",
            ));
        }

        if let Some(blank) = self
            .parser
            .canonical_organizations
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(Error::config_validation(format!(
                "parser.canonical_organizations[{blank}] is empty"
            )));
        }

        if self.report.top_organizations == 0 {
            return Err(Error::config_validation(
                "report.top_organizations must be greater than 0",
            ));
        }

        Ok(())
    }
}
