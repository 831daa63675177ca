use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::project::Project;

/// Organizations keyed by the year they first appear in.
///
/// Every observed year has an entry, possibly empty. Each organization is
/// listed exactly once, under its earliest year, and names are sorted within
/// a year.
#[must_use]
pub fn new_organizations_by_year(projects: &[Project]) -> BTreeMap<u32, Vec<String>> {
    let mut by_year: BTreeMap<u32, BTreeSet<&str>> = BTreeMap::new();
    for project in projects {
        by_year
            .entry(project.year)
            .or_default()
            .insert(project.organization.as_str());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    by_year
        .into_iter()
        .map(|(year, orgs)| {
            let fresh: Vec<String> = orgs
                .into_iter()
                .filter(|org| seen.insert(*org))
                .map(String::from)
                .collect();
            (year, fresh)
        })
        .collect()
}
