//! Full-replace seeding of the document store

use super::{FixtureSet, SCHEMA};
use eyre::{Context, Result};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

/// Replaces the contents of the `documents` table with a fixture set
///
/// Seeding is all-or-nothing: the delete, the sequence reset and every
/// insert share one transaction, which rolls back if any step fails.
/// Ids restart at 1 on every seed, so repeated seeds leave identical rows.
pub struct FixtureSeeder {
    path: PathBuf,
    fixtures: FixtureSet,
}

impl FixtureSeeder {
    pub fn new(path: impl AsRef<Path>, fixtures: FixtureSet) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            fixtures,
        }
    }

    /// Seeder using the built-in sample documents
    pub fn with_sample(path: impl AsRef<Path>) -> Self {
        Self::new(path, FixtureSet::sample())
    }

    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    /// Seed the store, returning the number of inserted documents
    pub fn seed(&self) -> Result<usize> {
        log::debug!("Opening store {}", self.path.display());
        let mut conn = Connection::open(&self.path)
            .with_context(|| format!("Failed to open store: {}", self.path.display()))?;

        conn.execute_batch(SCHEMA)
            .with_context(|| format!("Failed to create schema in {}", self.path.display()))?;

        let tx = conn.transaction()?;

        let cleared = tx
            .execute("DELETE FROM documents", [])
            .context("Failed to clear documents")?;
        // sqlite_sequence only exists once some table uses AUTOINCREMENT
        let has_sequence: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence')",
            [],
            |row| row.get(0),
        )?;
        if has_sequence {
            tx.execute("DELETE FROM sqlite_sequence WHERE name = 'documents'", [])
                .context("Failed to reset document ids")?;
        }
        log::debug!("Cleared {} existing documents", cleared);

        {
            let mut insert =
                tx.prepare("INSERT INTO documents (title, content) VALUES (?1, ?2)")?;
            for doc in &self.fixtures.documents {
                insert
                    .execute(params![doc.title, doc.content])
                    .with_context(|| format!("Failed to insert document '{}'", doc.title))?;
            }
        }

        tx.commit()
            .with_context(|| format!("Failed to commit seed of {}", self.path.display()))?;

        log::info!(
            "Seeded {} documents into {}",
            self.fixtures.len(),
            self.path.display()
        );
        Ok(self.fixtures.len())
    }
}
