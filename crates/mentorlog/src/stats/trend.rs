use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::YearStat;
use crate::project::Project;

/// Earliest through latest year across the whole collection.
#[must_use]
pub fn year_range(projects: &[Project]) -> Option<RangeInclusive<u32>> {
    let min = projects.iter().map(|p| p.year).min()?;
    let max = projects.iter().map(|p| p.year).max()?;
    Some(min..=max)
}

/// Yearly project counts for one organization.
///
/// The series spans the global [`year_range`], not just the organization's
/// own years, so every organization's trend shares the same axis. Years
/// without projects, including gap years nobody was active in, are zero.
#[must_use]
pub fn trend_for_organization(projects: &[Project], organization: &str) -> Vec<YearStat> {
    let Some(range) = year_range(projects) else {
        return Vec::new();
    };

    let mut counts: BTreeMap<u32, usize> = range.map(|year| (year, 0)).collect();
    for project in projects.iter().filter(|p| p.organization == organization) {
        *counts.entry(project.year).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(year, count)| YearStat { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const HISTORY: &str = include_str!("../../tests/fixtures/history.md");

    fn counts(trend: &[YearStat]) -> Vec<(u32, usize)> {
        trend.iter().map(|t| (t.year, t.count)).collect()
    }

    #[test]
    fn test_trend_fixture() {
        let projects = parse(HISTORY);
        assert_eq!(
            counts(&trend_for_organization(&projects, "Kubernetes")),
            vec![(2022, 1), (2023, 1), (2024, 1)]
        );
        assert_eq!(
            counts(&trend_for_organization(&projects, "Jaeger")),
            vec![(2022, 0), (2023, 1), (2024, 1)]
        );
    }

    #[test]
    fn test_trend_fills_gap_years() {
        let doc = "#### 2019\n| Envoy: a | m |\n#### 2023\n| Falco: b | m |\n| Falco: c | m |\n";
        let projects = parse(doc);
        let trend = trend_for_organization(&projects, "Falco");

        assert_eq!(trend.len(), (2023 - 2019 + 1) as usize);
        assert_eq!(
            counts(&trend),
            vec![(2019, 0), (2020, 0), (2021, 0), (2022, 0), (2023, 2)]
        );
    }

    #[test]
    fn test_trend_length_independent_of_organization() {
        let projects = parse(HISTORY);
        let range = year_range(&projects).unwrap();
        let expected = (range.end() - range.start() + 1) as usize;
        for org in ["Kubernetes", "Thanos", "Other"] {
            assert_eq!(trend_for_organization(&projects, org).len(), expected);
        }
    }

    #[test]
    fn test_trend_unknown_organization_is_all_zero() {
        let trend = trend_for_organization(&parse(HISTORY), "Nonexistent");
        assert_eq!(trend.len(), 3);
        assert!(trend.iter().all(|t| t.count == 0));
    }

    #[test]
    fn test_trend_empty_collection() {
        assert!(trend_for_organization(&[], "Kubernetes").is_empty());
        assert!(year_range(&[]).is_none());
    }
}
