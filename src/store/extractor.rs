//! Read-only extraction of documents from the store

use super::ExtractedRecord;
use crate::etl::Extractor;
use eyre::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Reads every document from the store in id order
pub struct DocumentExtractor {
    path: PathBuf,
}

impl DocumentExtractor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all documents
    ///
    /// An existing store with no documents yields an empty vector. A missing
    /// store file or table is an error.
    pub fn read_all(&self) -> Result<Vec<ExtractedRecord>> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open store read-only: {}", self.path.display()))?;

        let mut stmt = conn
            .prepare("SELECT id, title, content FROM documents ORDER BY id")
            .with_context(|| format!("Failed to query documents in {}", self.path.display()))?;

        let records = stmt
            .query_map([], ExtractedRecord::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read documents from {}", self.path.display()))?;

        log::debug!(
            "Read {} documents from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

impl Extractor for DocumentExtractor {
    type Item = ExtractedRecord;

    async fn extract(&self) -> Result<Vec<Self::Item>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FixtureSeeder, FixtureSet, NewDocument};
    use tempfile::TempDir;

    #[test]
    fn test_read_seeded_documents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.db");
        FixtureSeeder::with_sample(&path).seed().unwrap();

        let records = DocumentExtractor::new(&path).read_all().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].title, "Doc 1");
        assert_eq!(records[0].content, "This is the content of document 1.");
        assert_eq!(records[2].title, "Doc 3");
    }

    #[test]
    fn test_read_preserves_insertion_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.db");
        let fixtures = FixtureSet::with_documents(vec![
            NewDocument::new("zeta", "z"),
            NewDocument::new("alpha", "a"),
            NewDocument::new("mu", "m"),
        ]);
        FixtureSeeder::new(&path, fixtures).seed().unwrap();

        let titles: Vec<_> = DocumentExtractor::new(&path)
            .read_all()
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();

        assert_eq!(titles, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_read_empty_store() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.db");
        FixtureSeeder::new(&path, FixtureSet::empty()).seed().unwrap();

        let records = DocumentExtractor::new(&path).read_all().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_missing_store_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.db");

        let err = DocumentExtractor::new(&path).read_all().unwrap_err();
        assert!(err.to_string().contains("Failed to open store read-only"));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_store_without_table_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bare.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE other (x INTEGER);")
            .unwrap();

        let err = DocumentExtractor::new(&path).read_all().unwrap_err();
        assert!(err.to_string().contains("Failed to query documents"));
    }

    #[tokio::test]
    async fn test_extract_trait() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.db");
        FixtureSeeder::with_sample(&path).seed().unwrap();

        let records = DocumentExtractor::new(&path).extract().await.unwrap();
        assert_eq!(records.len(), 3);
    }
}
