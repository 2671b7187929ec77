//! RAG Extract
//!
//! Seeds a SQLite document store, extracts every document and ships them as
//! one JSON array to a local file, process memory or an S3 bucket.

pub mod cli;
pub mod config;
pub mod etl;
pub mod job;
pub mod lambda;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use config::{PipelineConfig, SinkKind};
pub use etl::{Extractor, IdentityTransformer, Loader, Pipeline, PipelineOutcome, Transformer};
pub use job::{ExportJob, RunStatus, run_with_config};
pub use storage::{ConfiguredSink, JsonArrayLoader, LocalFileSink, MemorySink, ObjectSink, S3Sink};
pub use store::{DocumentExtractor, ExtractedRecord, FixtureSeeder, FixtureSet, NewDocument};
