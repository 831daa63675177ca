//! Where history documents come from.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// A readable history document.
pub trait DocumentSource: Send + Sync {
    /// Human-readable name for logs and errors.
    fn name(&self) -> String;

    /// Read the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read.
    fn read(&self) -> Result<String>;
}

/// A document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String> {
        debug!("Reading document {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|source| Error::DocumentRead {
            path: self.path.clone(),
            source,
        })
    }
}

/// A document piped through standard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdinSource;

impl DocumentSource for StdinSource {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    fn read(&self) -> Result<String> {
        let mut document = String::new();
        std::io::stdin().read_to_string(&mut document)?;
        Ok(document)
    }
}

/// Sources for the given paths; `-` stands for standard input.
#[must_use]
pub fn sources_for(paths: &[PathBuf]) -> Vec<Box<dyn DocumentSource>> {
    paths
        .iter()
        .map(|path| -> Box<dyn DocumentSource> {
            if path.as_os_str() == "-" {
                Box::new(StdinSource)
            } else {
                Box::new(FileSource::new(path.clone()))
            }
        })
        .collect()
}

/// Read every source, failing on the first unreadable one.
///
/// # Errors
///
/// Returns [`Error::NoDocuments`] for an empty list, or the first read error.
pub fn read_all(sources: &[Box<dyn DocumentSource>]) -> Result<Vec<String>> {
    if sources.is_empty() {
        return Err(Error::NoDocuments);
    }
    sources.iter().map(|source| source.read()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/history.md");

    #[test]
    fn test_file_source_reads_fixture() {
        let source = FileSource::new(FIXTURE);
        let text = source.read().unwrap();
        assert!(text.contains("#### 2022"));
        assert!(source.name().ends_with("history.md"));
    }

    #[test]
    fn test_file_source_missing() {
        let source = FileSource::new("/nonexistent/history.md");
        let err = source.read().unwrap_err();
        assert!(matches!(err, Error::DocumentRead { .. }));
        assert!(err.to_string().contains("/nonexistent/history.md"));
    }

    #[test]
    fn test_sources_for_dash_is_stdin() {
        let sources = sources_for(&[PathBuf::from("-"), PathBuf::from(FIXTURE)]);
        assert_eq!(sources[0].name(), "<stdin>");
        assert!(sources[1].name().ends_with("history.md"));
    }

    #[test]
    fn test_read_all_empty() {
        assert!(matches!(read_all(&[]), Err(Error::NoDocuments)));
    }

    #[test]
    fn test_read_all_in_order() {
        let sources = sources_for(&[PathBuf::from(FIXTURE), PathBuf::from(FIXTURE)]);
        let documents = read_all(&sources).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0], documents[1]);
    }
}
