//! Conversion of an upstream term README into history table rows.
//!
//! The upstream listing for a single term looks like:
//!
//! ```text
//! ### Kubernetes
//!
//! #### Improve scheduler tests
//!
//! - Description: ...
//! - Mentor(s):
//!   - Alice Ng (@alice, alice@example.com)
//!   - Bob Ruiz (@bob)
//! - Upstream Issue: https://github.com/...
//! - LFX URL: https://mentorship.lfx.linuxfoundation.org/project/...
//! ```
//!
//! [`parse_readme`] collects one [`UpstreamProject`] per `####` heading that
//! has an LFX URL, and [`render_table`] writes them in the table layout the
//! history parser reads, with every mentee slot left open.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::parser::normalize::ORG_PREFIX;

static ORG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.+)").unwrap());
static PROJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^####\s+(.+)").unwrap());
static MENTORS_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[-*]?\s*Mentors?\s*:?").unwrap());
static MENTORS_STOP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[-*]\s*)?(Upstream Issue|LFX URL|#)").unwrap());
static LFX_URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)LFX URL:\s*(.+)").unwrap());
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s+").unwrap());
static TITLE_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([0-9]{4}.*\)").unwrap());

/// `###` headings that are document sections, not organizations.
const IGNORED_HEADINGS: &[&str] = &["Timeline", "Project instructions", "Application instructions"];

/// A project listed in an upstream README.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamProject {
    /// Organization heading the project appeared under.
    pub organization: String,
    /// Project heading.
    pub title: String,
    /// Mentor names, contact details removed.
    pub mentors: Vec<String>,
    /// LFX project URL.
    pub url: String,
}

/// The `(YYYY Term N)` annotation written after each title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermLabel {
    /// Program year.
    pub year: u32,
    /// Term number within the year.
    pub term: u8,
}

impl std::fmt::Display for TermLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Term {}", self.year, self.term)
    }
}

/// `- Name Surname (@handle, email)` becomes `Name Surname`.
fn clean_mentor_name(line: &str) -> String {
    let line = BULLET_RE.replace(line, "");
    let line = line.trim();
    line.split(['(', '<', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn keep_if_linked(project: Option<UpstreamProject>, projects: &mut Vec<UpstreamProject>) {
    match project {
        Some(p) if !p.url.is_empty() => projects.push(p),
        Some(p) => debug!(title = %p.title, "Skipping project without LFX URL"),
        None => {}
    }
}

/// Collect the projects of an upstream README.
///
/// Projects without an LFX URL are skipped.
#[must_use]
pub fn parse_readme(content: &str) -> Vec<UpstreamProject> {
    let mut projects = Vec::new();
    let mut organization = String::new();
    let mut current: Option<UpstreamProject> = None;
    let mut capturing_mentors = false;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(caps) = ORG_RE.captures(line) {
            let heading = caps[1].trim();
            if !IGNORED_HEADINGS.contains(&heading) {
                organization = heading.to_string();
            }
            capturing_mentors = false;
            continue;
        }

        if let Some(caps) = PROJECT_RE.captures(line) {
            keep_if_linked(current.take(), &mut projects);
            current = Some(UpstreamProject {
                organization: organization.clone(),
                title: caps[1].trim().to_string(),
                ..UpstreamProject::default()
            });
            capturing_mentors = false;
            continue;
        }

        if MENTORS_START_RE.is_match(line) {
            capturing_mentors = true;
            continue;
        }

        if capturing_mentors {
            if MENTORS_STOP_RE.is_match(line) {
                // Fall through: this may be the LFX URL line.
                capturing_mentors = false;
            } else if line.starts_with('-') || line.starts_with('*') {
                let name = clean_mentor_name(line);
                if let Some(project) = current.as_mut().filter(|_| !name.is_empty()) {
                    project.mentors.push(name);
                }
            }
        }

        if let (Some(caps), Some(project)) = (LFX_URL_RE.captures(line), current.as_mut()) {
            project.url = caps[1].trim().to_string();
            capturing_mentors = false;
        }
    }

    keep_if_linked(current, &mut projects);
    projects
}

/// Render projects as a history table with open mentee slots.
///
/// # Errors
///
/// Returns an error if writing a row fails.
pub fn render_table(projects: &[UpstreamProject], label: TermLabel) -> Result<String> {
    let mut out = String::from("| Project | Mentors | Mentee |\n| --- | --- | --- |\n");
    for project in projects {
        let title = TITLE_ANNOTATION_RE.replace(&project.title, "");
        writeln!(
            out,
            "| [{ORG_PREFIX}{}: {} ({label})]({}) | {} |   |",
            project.organization,
            title,
            project.url,
            project.mentors.join(", ")
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const README: &str = include_str!("../tests/fixtures/upstream_readme.md");

    #[test]
    fn test_clean_mentor_name() {
        assert_eq!(clean_mentor_name("- Alice Ng (@alice, a@x.io)"), "Alice Ng");
        assert_eq!(clean_mentor_name("* Bob Ruiz <bob@x.io>"), "Bob Ruiz");
        assert_eq!(clean_mentor_name("- Dana Lee @dana"), "Dana Lee");
        assert_eq!(clean_mentor_name("- (@nobody)"), "");
    }

    #[test]
    fn test_parse_readme_projects() {
        let projects = parse_readme(README);
        let titles: Vec<&str> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Improve scheduler tests",
                "Gateway API conformance (2025 Term 3)",
                "Trace sampling UI",
            ]
        );
    }

    #[test]
    fn test_parse_readme_organizations() {
        let projects = parse_readme(README);
        let orgs: Vec<&str> = projects.iter().map(|p| p.organization.as_str()).collect();
        assert_eq!(orgs, vec!["Kubernetes", "Kubernetes", "Jaeger"]);
    }

    #[test]
    fn test_parse_readme_mentors_stop_at_upstream_issue() {
        let projects = parse_readme(README);
        assert_eq!(projects[0].mentors, vec!["Alice Ng", "Bob Ruiz"]);
        assert_eq!(projects[2].mentors, vec!["Ivan Orr"]);
    }

    #[test]
    fn test_parse_readme_urls() {
        let projects = parse_readme(README);
        assert_eq!(
            projects[1].url,
            "https://mentorship.lfx.linuxfoundation.org/project/k2"
        );
    }

    #[test]
    fn test_project_without_url_is_skipped() {
        let projects = parse_readme(README);
        assert!(projects.iter().all(|p| p.title != "Draft idea"));
    }

    #[test]
    fn test_term_label_display() {
        let label = TermLabel { year: 2025, term: 3 };
        assert_eq!(label.to_string(), "2025 Term 3");
    }

    #[test]
    fn test_render_table_rows() {
        let table = render_table(&parse_readme(README), TermLabel { year: 2025, term: 3 }).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "| Project | Mentors | Mentee |");
        assert_eq!(lines[1], "| --- | --- | --- |");
        assert_eq!(
            lines[3],
            "| [CNCF - Kubernetes: Gateway API conformance (2025 Term 3)](https://mentorship.lfx.linuxfoundation.org/project/k2) | Bob Ruiz |   |"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_rendered_table_parses_back() {
        let table = render_table(&parse_readme(README), TermLabel { year: 2025, term: 3 }).unwrap();
        let doc = format!("#### 2025\n##### 2025 Term 3\n{table}");
        let projects = parse(&doc);

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].organization, "Kubernetes");
        assert_eq!(projects[0].title, "Improve scheduler tests");
        assert_eq!(projects[1].title, "Gateway API conformance");
        assert_eq!(projects[2].organization, "Jaeger");
        assert_eq!(projects[2].mentors, vec!["Ivan Orr"]);
        assert!(projects.iter().all(|p| p.mentee.is_empty() && p.term == "Term 3"));
    }

    #[test]
    fn test_empty_readme() {
        assert!(parse_readme("").is_empty());
        assert_eq!(render_table(&[], TermLabel { year: 2025, term: 1 }).unwrap().lines().count(), 2);
    }
}
