//! History document parser.
//!
//! Pipeline: lines → [`classify`] → context fold → [`extract`] →
//! [`normalize`] → [`Project`] records.
//!
//! Year and term headings are threaded through the document by an explicit
//! fold, so a parse holds no state outside the call and independent
//! documents can be parsed concurrently.

pub mod classify;
pub mod extract;
pub mod normalize;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::project::{Project, ProjectId};
use classify::LineKind;
use extract::RawRow;
use normalize::Normalizer;

/// Year and term in effect at a given line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Context {
    year: Option<u32>,
    term: Option<String>,
}

/// Parses history documents into projects.
#[derive(Debug, Clone)]
pub struct Parser {
    default_year: u32,
    default_term: String,
    normalizer: Normalizer,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl Parser {
    /// Create a parser with the given fallbacks and canonical organizations.
    #[must_use]
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            default_year: config.default_year,
            default_term: config.default_term.clone(),
            normalizer: Normalizer::new(config.canonical_organizations.clone()),
        }
    }

    /// Parse one document.
    #[must_use]
    pub fn parse(&self, document: &str) -> Vec<Project> {
        self.parse_indexed(0, document)
    }

    /// Parse several documents in parallel and concatenate the results in
    /// input order. Ids stay unique across the merged collection.
    #[must_use]
    pub fn parse_documents<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<Project> {
        documents
            .par_iter()
            .enumerate()
            .map(|(index, document)| self.parse_indexed(index, document.as_ref()))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    fn parse_indexed(&self, document_index: usize, document: &str) -> Vec<Project> {
        let (_, projects) = document.lines().enumerate().fold(
            (Context::default(), Vec::new()),
            |(context, mut projects), (line_index, line)| {
                let kind = classify::classify(line);
                trace!(line_index, ?kind, "Classified line");
                match kind {
                    LineKind::YearMarker(year) => (
                        Context {
                            year: Some(year),
                            ..context
                        },
                        projects,
                    ),
                    LineKind::TermMarker(term) => (Context { term, ..context }, projects),
                    LineKind::TableRow => {
                        if let Some(row) = extract::extract_row(line) {
                            let id = ProjectId::derive(document_index, line_index, line.trim());
                            projects.push(self.build(id, row, &context, line));
                        }
                        (context, projects)
                    }
                    LineKind::Noise => (context, projects),
                }
            },
        );

        debug!(
            document = document_index,
            projects = projects.len(),
            "Parsed document"
        );
        projects
    }

    fn build(&self, id: ProjectId, row: RawRow, context: &Context, line: &str) -> Project {
        let (organization, title) = self.normalizer.normalize(&row.title);
        Project {
            id,
            year: context
                .year
                .filter(|&year| year > 0)
                .unwrap_or(self.default_year),
            term: context
                .term
                .clone()
                .unwrap_or_else(|| self.default_term.clone()),
            organization,
            title,
            url: row.url,
            mentors: row.mentors,
            mentee: row.mentee,
            raw_line: line.trim().to_string(),
        }
    }
}

/// Parse a document with the default fallbacks (`2022`, `Unknown`) and the
/// default canonical organizations.
#[must_use]
pub fn parse(document: &str) -> Vec<Project> {
    Parser::default().parse(document)
}
