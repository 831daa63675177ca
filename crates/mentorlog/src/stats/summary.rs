use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{OrgStat, YearStat};
use crate::project::Project;

/// Headline numbers for a project collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Organizations by descending project count, ties in first-seen order.
    pub org_stats: Vec<OrgStat>,
    /// Project counts per year, ascending.
    pub year_stats: Vec<YearStat>,
    /// Number of projects.
    pub total_projects: usize,
    /// Distinct mentor names.
    pub total_mentors: usize,
    /// Distinct filled mentee slots.
    pub total_mentees: usize,
    /// Distinct organizations.
    pub total_orgs: usize,
}

impl Summary {
    /// The `n` most active organizations.
    #[must_use]
    pub fn top_organizations(&self, n: usize) -> &[OrgStat] {
        &self.org_stats[..n.min(self.org_stats.len())]
    }

    /// Most recent observed year.
    #[must_use]
    pub fn latest_year(&self) -> Option<u32> {
        self.year_stats.last().map(|y| y.year)
    }
}

/// Compute the [`Summary`] of a project collection.
#[must_use]
pub fn summarize(projects: &[Project]) -> Summary {
    let mut org_index: HashMap<&str, usize> = HashMap::new();
    let mut org_stats: Vec<OrgStat> = Vec::new();
    let mut year_counts: BTreeMap<u32, usize> = BTreeMap::new();
    let mut mentors: HashSet<&str> = HashSet::new();
    let mut mentees: HashSet<&str> = HashSet::new();

    for project in projects {
        let slot = *org_index
            .entry(project.organization.as_str())
            .or_insert_with(|| {
                org_stats.push(OrgStat {
                    name: project.organization.clone(),
                    count: 0,
                });
                org_stats.len() - 1
            });
        org_stats[slot].count += 1;

        *year_counts.entry(project.year).or_default() += 1;
        mentors.extend(project.mentors.iter().map(String::as_str));
        if project.has_mentee() {
            mentees.insert(project.mentee.as_str());
        }
    }

    // Stable: equal counts keep first-seen order.
    org_stats.sort_by(|a, b| b.count.cmp(&a.count));

    Summary {
        total_orgs: org_stats.len(),
        org_stats,
        year_stats: year_counts
            .into_iter()
            .map(|(year, count)| YearStat { year, count })
            .collect(),
        total_projects: projects.len(),
        total_mentors: mentors.len(),
        total_mentees: mentees.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const HISTORY: &str = include_str!("../../tests/fixtures/history.md");

    #[test]
    fn test_summary_totals() {
        let summary = summarize(&parse(HISTORY));
        assert_eq!(summary.total_projects, 11);
        assert_eq!(summary.total_orgs, 7);
        assert_eq!(summary.total_mentors, 9);
        assert_eq!(summary.total_mentees, 7);
    }

    #[test]
    fn test_org_ranking_is_stable() {
        let summary = summarize(&parse(HISTORY));
        let ranking: Vec<(&str, usize)> = summary
            .org_stats
            .iter()
            .map(|o| (o.name.as_str(), o.count))
            .collect();
        assert_eq!(
            ranking,
            vec![
                ("Kubernetes", 3),
                ("Knative", 2),
                ("Jaeger", 2),
                ("Prometheus", 1),
                ("WasmEdge", 1),
                ("Thanos", 1),
                ("Other", 1),
            ]
        );
    }

    #[test]
    fn test_year_stats_ascending() {
        let summary = summarize(&parse(HISTORY));
        assert_eq!(
            summary.year_stats,
            vec![
                YearStat { year: 2022, count: 3 },
                YearStat { year: 2023, count: 4 },
                YearStat { year: 2024, count: 4 },
            ]
        );
        assert_eq!(summary.latest_year(), Some(2024));
    }

    #[test]
    fn test_empty_mentee_not_counted() {
        let with = parse("| A: x | Alice | Carol |\n");
        let without = parse("| A: x | Alice |\n| A: y | Alice | |\n");
        assert_eq!(summarize(&with).total_mentees, 1);
        assert_eq!(summarize(&without).total_mentees, 0);
    }

    #[test]
    fn test_repeated_mentee_counted_once() {
        let projects = parse("| A: x | Alice | Carol |\n| B: y | Bob | Carol |\n");
        assert_eq!(summarize(&projects).total_mentees, 1);
        assert_eq!(summarize(&projects).total_mentors, 2);
    }

    #[test]
    fn test_top_organizations() {
        let summary = summarize(&parse(HISTORY));
        let top: Vec<&str> = summary
            .top_organizations(2)
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(top, vec!["Kubernetes", "Knative"]);
        assert_eq!(summary.top_organizations(50).len(), 7);
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert!(summary.top_organizations(8).is_empty());
        assert_eq!(summary.latest_year(), None);
    }
}
