//! Fixture sets used to seed the store
//!
//! A fixture file is YAML:
//! ```yaml
//! documents:
//!   - title: Doc 1
//!     content: This is the content of document 1.
//!   - title: Doc 2
//!     content: Another sample document with test data.
//! ```

use super::NewDocument;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered list of documents to insert on every seed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixtureSet {
    pub documents: Vec<NewDocument>,
}

impl FixtureSet {
    pub fn with_documents(documents: Vec<NewDocument>) -> Self {
        Self { documents }
    }

    /// A fixture set that leaves the store empty
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Built-in sample documents
    pub fn sample() -> Self {
        Self::with_documents(vec![
            NewDocument::new("Doc 1", "This is the content of document 1."),
            NewDocument::new("Doc 2", "Another sample document with test data."),
            NewDocument::new("Doc 3", "More RAG-related fake content."),
        ])
    }

    /// Read a fixture set from a YAML file
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse fixture YAML: {}", path.display()))
    }

    /// Write the fixture set to a YAML file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let yaml =
            serde_yaml::to_string(self).with_context(|| "Failed to serialize fixtures to YAML")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write fixture file: {}", path.display()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    #[test]
    fn test_sample_titles_are_distinct() {
        let fixtures = FixtureSet::sample();
        assert_eq!(fixtures.len(), 3);

        let titles: BTreeSet<_> = fixtures.documents.iter().map(|d| &d.title).collect();
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_write_read_fixture_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fixtures.yml");

        let fixtures = FixtureSet::with_documents(vec![
            NewDocument::new("Alpha", "first"),
            NewDocument::new("Beta", "second"),
        ]);
        fixtures.write(&path).unwrap();

        let loaded = FixtureSet::read(&path).unwrap();
        assert_eq!(loaded, fixtures);
    }

    #[test]
    fn test_read_empty_list() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("fixtures.yml");
        std::fs::write(&path, "documents: []\n").unwrap();

        let loaded = FixtureSet::read(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = FixtureSet::read(temp.path().join("nope.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read fixture file"));
    }
}
