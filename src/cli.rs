//! CLI helper functions

use crate::{
    config::PipelineConfig,
    job::{ExportJob, RunStatus},
    storage::{ConfiguredSink, ObjectSink},
    store::{DocumentExtractor, FixtureSeeder},
};
use eyre::{Context, Result};

/// Run the export job with the sink named in the configuration
///
/// With the memory sink nothing leaves the process; the stored artifact is
/// logged instead so a dry run still shows what would have been written.
pub async fn run_export(config: PipelineConfig) -> Result<RunStatus> {
    let sink = ConfiguredSink::from_config(&config).await?;
    let key = config.output_key.clone();
    log::info!("Writing artifact to {}", sink.describe(&key));

    let job = ExportJob::new(config, sink);
    let status = job.run().await?;

    if let Some(memory) = job.sink().as_memory()
        && let Some(object) = memory.get(&key)
    {
        log::info!(
            "Dry run: {} would receive {} bytes of {}",
            key,
            object.body.len(),
            object.content_type
        );
        log::debug!("{}", String::from_utf8_lossy(&object.body));
    }

    Ok(status)
}

/// Seed the store without exporting
///
/// Pipeline: FixtureSeeder → SQLite store
pub fn seed_store(config: &PipelineConfig) -> Result<usize> {
    let fixtures = config.fixture_set()?;
    log::info!(
        "Seeding {} with {} documents",
        config.db_path.display(),
        fixtures.len()
    );
    FixtureSeeder::new(&config.db_path, fixtures).seed()
}

/// Read every document and render them as the JSON array the job would write
///
/// Pipeline: DocumentExtractor → JSON text
pub fn extract_json(config: &PipelineConfig) -> Result<String> {
    let records = DocumentExtractor::new(&config.db_path).read_all()?;
    log::info!(
        "Extracted {} documents from {}",
        records.len(),
        config.db_path.display()
    );

    let json = match config.pretty {
        true => serde_json::to_string_pretty(&records),
        false => serde_json::to_string(&records),
    };
    json.context("Failed to serialize documents")
}
