//! The document export job
//!
//! Seeds the store, extracts every document and writes them as one JSON
//! array through an [`ObjectSink`]. The job depends only on the sink trait,
//! so the artifact can land in a local file, in memory or in S3 without any
//! change here.

use crate::config::PipelineConfig;
use crate::etl::{IdentityTransformer, Pipeline, PipelineOutcome};
use crate::storage::{ConfiguredSink, JsonArrayLoader, ObjectSink};
use crate::store::{DocumentExtractor, ExtractedRecord, FixtureSeeder};
use eyre::Result;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a job run
///
/// Serializes as `{"status": "Success", "location": "<key>"}` or
/// `{"status": "No data found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum RunStatus {
    #[serde(rename = "Success")]
    Success { location: String },
    #[serde(rename = "No data found")]
    NoData,
}

impl RunStatus {
    pub fn status(&self) -> &'static str {
        match self {
            RunStatus::Success { .. } => "Success",
            RunStatus::NoData => "No data found",
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            RunStatus::Success { location } => Some(location),
            RunStatus::NoData => None,
        }
    }
}

/// Seed → extract → load, against one store and one sink
pub struct ExportJob<S> {
    config: PipelineConfig,
    sink: S,
}

impl<S: ObjectSink> ExportJob<S> {
    pub fn new(config: PipelineConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the job once
    ///
    /// An empty store is not an error: it yields [`RunStatus::NoData`] and the
    /// sink is never written.
    ///
    /// # Errors
    /// Returns the first store, serialization or sink error; nothing is retried
    pub async fn run(&self) -> Result<RunStatus> {
        let db_path = &self.config.db_path;

        if self.config.seed_before_extract {
            log::info!("Setting up document store {}", db_path.display());
            let fixtures = self.config.fixture_set()?;
            FixtureSeeder::new(db_path, fixtures).seed()?;
        } else {
            log::info!("Seeding disabled, exporting existing documents");
        }

        let key = self.config.output_key.as_str();
        let loader = JsonArrayLoader::<_, ExtractedRecord>::new(&self.sink, key)
            .with_pretty(self.config.pretty);
        let pipeline = Pipeline::new(
            DocumentExtractor::new(db_path),
            IdentityTransformer::<ExtractedRecord>::new(),
            loader,
        );

        let count = match pipeline.run().await? {
            PipelineOutcome::Empty => {
                log::warn!("No data found in {}", db_path.display());
                return Ok(RunStatus::NoData);
            }
            PipelineOutcome::Loaded(count) => count,
        };

        log::info!(
            "Exported {} documents to {}",
            count,
            self.sink.describe(key)
        );
        Ok(RunStatus::Success {
            location: key.to_string(),
        })
    }
}

/// Build the configured sink and run the job once
pub async fn run_with_config(config: PipelineConfig) -> Result<RunStatus> {
    let sink = ConfiguredSink::from_config(&config).await?;
    ExportJob::new(config, sink).run().await
}
