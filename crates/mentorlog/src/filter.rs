//! Selection over a parsed project list.
//!
//! A [`ProjectFilter`] narrows the collection by free-text search and by
//! exact year, term and organization. Unset fields match everything.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::project::Project;

/// Criteria for selecting projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of the title, a mentor, or the mentee.
    pub search: Option<String>,
    /// Exact year.
    pub year: Option<u32>,
    /// Exact term label.
    pub term: Option<String>,
    /// Exact canonical organization.
    pub organization: Option<String>,
}

impl ProjectFilter {
    /// Whether `project` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_search(project)
            && self.year.map_or(true, |year| project.year == year)
            && self.term.as_deref().map_or(true, |term| project.term == term)
            && self
                .organization
                .as_deref()
                .map_or(true, |org| project.organization == org)
    }

    fn matches_search(&self, project: &Project) -> bool {
        let Some(needle) = self.search.as_deref().map(str::to_lowercase) else {
            return true;
        };
        let hit = |text: &str| text.to_lowercase().contains(&needle);
        hit(&project.title) || project.mentors.iter().any(|m| hit(m)) || hit(&project.mentee)
    }

    /// Matching projects, in collection order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// The values each [`ProjectFilter`] field can take in a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Years, newest first.
    pub years: Vec<u32>,
    /// Term labels, sorted.
    pub terms: Vec<String>,
    /// Canonical organizations, sorted.
    pub organizations: Vec<String>,
}

impl FilterOptions {
    /// Collect the options present in `projects`.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        Self {
            years: distinct_years(projects),
            terms: distinct_terms(projects),
            organizations: distinct_organizations(projects),
        }
    }
}

/// Distinct years, newest first.
#[must_use]
pub fn distinct_years(projects: &[Project]) -> Vec<u32> {
    let years: BTreeSet<u32> = projects.iter().map(|p| p.year).collect();
    years.into_iter().rev().collect()
}

/// Distinct term labels, sorted.
#[must_use]
pub fn distinct_terms(projects: &[Project]) -> Vec<String> {
    let terms: BTreeSet<&str> = projects.iter().map(|p| p.term.as_str()).collect();
    terms.into_iter().map(String::from).collect()
}

/// Distinct organizations, sorted.
#[must_use]
pub fn distinct_organizations(projects: &[Project]) -> Vec<String> {
    let orgs: BTreeSet<&str> = projects.iter().map(|p| p.organization.as_str()).collect();
    orgs.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const HISTORY: &str = include_str!("../tests/fixtures/history.md");

    fn titles(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let projects = parse(HISTORY);
        assert_eq!(ProjectFilter::default().apply(&projects).len(), projects.len());
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let projects = parse(HISTORY);
        let filter = ProjectFilter {
            search: Some("SAMPLING".to_string()),
            ..ProjectFilter::default()
        };
        assert_eq!(
            titles(&filter.apply(&projects)),
            vec![
                "Trace sampling UI",
                "CNCF - Thanos downsampling rewrite",
                "Adaptive sampling"
            ]
        );
    }

    #[test]
    fn test_search_mentor_and_mentee() {
        let projects = parse(HISTORY);
        let by_mentor = ProjectFilter {
            search: Some("ned fox".to_string()),
            ..ProjectFilter::default()
        };
        assert_eq!(by_mentor.apply(&projects).len(), 1);

        let by_mentee = ProjectFilter {
            search: Some("carol".to_string()),
            ..ProjectFilter::default()
        };
        assert_eq!(by_mentee.apply(&projects).len(), 2);
    }

    #[test]
    fn test_combined_criteria() {
        let projects = parse(HISTORY);
        let filter = ProjectFilter {
            year: Some(2023),
            term: Some("Term 1".to_string()),
            organization: Some("Knative".to_string()),
            ..ProjectFilter::default()
        };
        assert_eq!(titles(&filter.apply(&projects)), vec!["Autoscaler metrics"]);
    }

    #[test]
    fn test_unknown_selection_is_empty() {
        let projects = parse(HISTORY);
        let filter = ProjectFilter {
            year: Some(1999),
            ..ProjectFilter::default()
        };
        assert!(filter.apply(&projects).is_empty());
    }

    #[test]
    fn test_distinct_lists() {
        let projects = parse(HISTORY);
        assert_eq!(distinct_years(&projects), vec![2024, 2023, 2022]);
        assert_eq!(distinct_terms(&projects), vec!["Term 1", "Term 2", "Term 3"]);
        assert_eq!(
            distinct_organizations(&projects),
            vec!["Jaeger", "Knative", "Kubernetes", "Other", "Prometheus", "Thanos", "WasmEdge"]
        );
    }

    #[test]
    fn test_filter_options() {
        let projects = parse(HISTORY);
        let options = FilterOptions::from_projects(&projects);
        assert_eq!(options.years, distinct_years(&projects));
        assert_eq!(options.terms, distinct_terms(&projects));
        assert_eq!(options.organizations.len(), 7);
        assert_eq!(FilterOptions::from_projects(&[]), FilterOptions::default());
    }
}
