//! SQLite document store
//!
//! The store is a single SQLite file holding one `documents` table:
//! - [`FixtureSeeder`] replaces its contents with a deterministic fixture set
//! - [`DocumentExtractor`] reads every row back as an [`ExtractedRecord`]
//!
//! Every operation opens its own connection and drops it before returning.

mod document;
mod extractor;
mod fixtures;
mod seeder;

pub use document::{ExtractedRecord, NewDocument};
pub use extractor::DocumentExtractor;
pub use fixtures::FixtureSet;
pub use seeder::FixtureSeeder;

/// Schema of the `documents` table, safe to run on every open
pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT NOT NULL,
    content TEXT NOT NULL
);
"#;
