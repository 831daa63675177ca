//! Organization extraction and title cleanup.
//!
//! Titles in the history document carry the organization inline, in one of
//! a few shapes:
//!
//! - `CNCF - Kubernetes: Improve scheduler`
//! - `CNCF - Jaeger - Trace sampling`
//! - `Prometheus: Native histograms`
//!
//! Each shape is an [`OrgRule`]. Rules are tried in [`OrgRule::PRECEDENCE`]
//! order and the first one that applies decides the organization.
//!
//! # Canonicalization
//!
//! After extraction, an organization whose name *contains* one of the
//! configured canonical names is folded into it, so `Kubernetes SIG Node` and
//! `Knative-Serving` report as `Kubernetes` and `Knative`. The match is a
//! plain substring test: it will also fold an unrelated organization whose
//! name happens to contain a canonical one.

use std::sync::LazyLock;

use regex::Regex;

static TERM_ANNOTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([0-9]{4} Term [0-9]+\)").unwrap());

/// Marker in front of foundation-hosted project titles.
pub const ORG_PREFIX: &str = "CNCF - ";

/// Organization used when a title names none.
pub const OTHER_ORGANIZATION: &str = "Other";

/// One way of reading an organization out of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgRule {
    /// `CNCF - Org: Title`, `CNCF - Org - Title`, or `CNCF - Org Title`.
    PrefixSeparated,
    /// `Org: Title`.
    ColonSeparated,
    /// No recognizable organization.
    Unseparated,
}

/// Organization and title split out of a raw title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Rule that produced this extraction.
    pub rule: OrgRule,
    /// Organization as written, before canonicalization. May be empty.
    pub organization: String,
    /// Title without the organization part.
    pub title: String,
}

impl OrgRule {
    /// Evaluation order.
    pub const PRECEDENCE: [OrgRule; 3] = [
        OrgRule::PrefixSeparated,
        OrgRule::ColonSeparated,
        OrgRule::Unseparated,
    ];

    /// Apply this rule alone, returning `None` if the title doesn't have its shape.
    #[must_use]
    pub fn apply(self, title: &str) -> Option<Extraction> {
        let (organization, cleaned) = match self {
            Self::PrefixSeparated => {
                let rest = title.strip_prefix(ORG_PREFIX)?;
                match split_once_trimmed(rest, ":").or_else(|| split_once_trimmed(rest, " - ")) {
                    Some(parts) => parts,
                    None => (
                        rest.split_whitespace().next().unwrap_or_default().to_string(),
                        title.to_string(),
                    ),
                }
            }
            Self::ColonSeparated => split_once_trimmed(title, ":")?,
            Self::Unseparated => (OTHER_ORGANIZATION.to_string(), title.to_string()),
        };

        Some(Extraction {
            rule: self,
            organization,
            title: cleaned,
        })
    }
}

fn split_once_trimmed(text: &str, separator: &str) -> Option<(String, String)> {
    text.split_once(separator)
        .map(|(head, tail)| (head.trim().to_string(), tail.trim().to_string()))
}

/// Run the rules in precedence order.
#[must_use]
pub fn extract_organization(title: &str) -> Extraction {
    OrgRule::PRECEDENCE
        .iter()
        .find_map(|rule| rule.apply(title))
        // Unseparated always applies.
        .unwrap_or_else(|| Extraction {
            rule: OrgRule::Unseparated,
            organization: OTHER_ORGANIZATION.to_string(),
            title: title.to_string(),
        })
}

/// Remove a `(2024 Term 2)` annotation.
#[must_use]
pub fn strip_term_annotation(title: &str) -> String {
    TERM_ANNOTATION_RE.replace(title, "").trim().to_string()
}

/// Folds organization names into canonical umbrella names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    canonical: Vec<String>,
}

impl Normalizer {
    /// Create a normalizer with the given canonical names, checked in order.
    #[must_use]
    pub fn new(canonical: Vec<String>) -> Self {
        Self { canonical }
    }

    /// Canonical form of an extracted organization name.
    #[must_use]
    pub fn canonicalize(&self, organization: &str) -> String {
        let organization = organization.trim();
        if organization.is_empty() {
            return OTHER_ORGANIZATION.to_string();
        }
        self.canonical
            .iter()
            .find(|name| organization.contains(name.as_str()))
            .map_or_else(|| organization.to_string(), Clone::clone)
    }

    /// Organization and cleaned title for a raw title.
    #[must_use]
    pub fn normalize(&self, raw_title: &str) -> (String, String) {
        let extraction = extract_organization(raw_title);
        (
            self.canonicalize(&extraction.organization),
            strip_term_annotation(&extraction.title),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(vec![
            "Kubernetes".to_string(),
            "Knative".to_string(),
            "WasmEdge".to_string(),
        ])
    }

    #[test]
    fn test_prefix_with_colon() {
        let e = extract_organization("CNCF - Kubernetes: Improve scheduler");
        assert_eq!(e.rule, OrgRule::PrefixSeparated);
        assert_eq!(e.organization, "Kubernetes");
        assert_eq!(e.title, "Improve scheduler");
    }

    #[test]
    fn test_prefix_colon_wins_over_dash() {
        let e = extract_organization("CNCF - Jaeger - UI: dark mode");
        assert_eq!(e.organization, "Jaeger - UI");
        assert_eq!(e.title, "dark mode");
    }

    #[test]
    fn test_prefix_with_dash() {
        let e = extract_organization("CNCF - Jaeger - Trace sampling");
        assert_eq!(e.organization, "Jaeger");
        assert_eq!(e.title, "Trace sampling");
    }

    #[test]
    fn test_prefix_keeps_later_colons_in_title() {
        let e = extract_organization("CNCF - Falco: rules: faster loading");
        assert_eq!(e.organization, "Falco");
        assert_eq!(e.title, "rules: faster loading");
    }

    #[test]
    fn test_prefix_without_separator() {
        let e = extract_organization("CNCF - Thanos downsampling rewrite");
        assert_eq!(e.rule, OrgRule::PrefixSeparated);
        assert_eq!(e.organization, "Thanos");
        assert_eq!(e.title, "CNCF - Thanos downsampling rewrite");
    }

    #[test]
    fn test_colon_separated() {
        let e = extract_organization("Prometheus: Native histograms: part 2");
        assert_eq!(e.rule, OrgRule::ColonSeparated);
        assert_eq!(e.organization, "Prometheus");
        assert_eq!(e.title, "Native histograms: part 2");
    }

    #[test]
    fn test_unseparated() {
        let e = extract_organization("Improve docs - part 2");
        assert_eq!(e.rule, OrgRule::Unseparated);
        assert_eq!(e.organization, "Other");
        assert_eq!(e.title, "Improve docs - part 2");
    }

    #[test]
    fn test_rules_apply_independently() {
        let title = "Envoy: Rate limits";
        assert!(OrgRule::PrefixSeparated.apply(title).is_none());
        assert!(OrgRule::ColonSeparated.apply(title).is_some());
        assert!(OrgRule::Unseparated.apply(title).is_some());
    }

    #[test]
    fn test_strip_term_annotation() {
        assert_eq!(
            strip_term_annotation("Improve scheduler (2025 Term 3)"),
            "Improve scheduler"
        );
        assert_eq!(strip_term_annotation("No annotation"), "No annotation");
        assert_eq!(
            strip_term_annotation("Keep (2025 Spring)"),
            "Keep (2025 Spring)"
        );
        assert_eq!(
            strip_term_annotation("Keep (٢٠٢٥ Term 3)"),
            "Keep (٢٠٢٥ Term 3)"
        );
    }

    #[test]
    fn test_canonicalize_substring() {
        let n = normalizer();
        assert_eq!(n.canonicalize("Kubernetes SIG Node"), "Kubernetes");
        assert_eq!(n.canonicalize("Knative-Serving"), "Knative");
        assert_eq!(n.canonicalize("WasmEdge Runtime"), "WasmEdge");
        assert_eq!(n.canonicalize("Prometheus"), "Prometheus");
    }

    #[test]
    fn test_canonicalize_over_merges_by_substring() {
        // Loose matching: any name containing a canonical one is folded.
        assert_eq!(normalizer().canonicalize("NotKnativeAtAll"), "Knative");
    }

    #[test]
    fn test_canonicalize_first_match_wins() {
        assert_eq!(normalizer().canonicalize("Knative on Kubernetes"), "Kubernetes");
    }

    #[test]
    fn test_canonicalize_empty_is_other() {
        assert_eq!(normalizer().canonicalize("  "), "Other");
    }

    #[test]
    fn test_normalize_end_to_end() {
        let (org, title) =
            normalizer().normalize("CNCF - Kubernetes SIG Docs: Localize site (2024 Term 2)");
        assert_eq!(org, "Kubernetes");
        assert_eq!(title, "Localize site");
    }

    #[test]
    fn test_normalize_empty_colon_head() {
        let (org, title) = normalizer().normalize(": Untitled work");
        assert_eq!(org, "Other");
        assert_eq!(title, "Untitled work");
    }
}
