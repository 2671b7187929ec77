//! Sink selected at runtime from configuration

use super::{LocalFileSink, MemorySink, ObjectSink, S3Sink};
use crate::config::{PipelineConfig, SinkKind};
use eyre::Result;

/// One of the concrete sinks, chosen by [`SinkKind`]
#[derive(Debug, Clone)]
pub enum ConfiguredSink {
    Local(LocalFileSink),
    Memory(MemorySink),
    S3(S3Sink),
}

impl ConfiguredSink {
    /// Build the sink named by the configuration
    ///
    /// The S3 variant loads AWS credentials and region from the environment.
    pub async fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let sink = match config.sink {
            SinkKind::Local => Self::Local(LocalFileSink::new(&config.output_dir)),
            SinkKind::Memory => Self::Memory(MemorySink::new()),
            SinkKind::S3 => Self::S3(S3Sink::from_env(config.bucket.clone()).await),
        };
        log::debug!("Using {} sink", config.sink);
        Ok(sink)
    }

    /// The in-memory store behind a `Memory` sink
    pub fn as_memory(&self) -> Option<&MemorySink> {
        match self {
            Self::Memory(sink) => Some(sink),
            _ => None,
        }
    }
}

impl ObjectSink for ConfiguredSink {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        match self {
            Self::Local(sink) => sink.put(key, body, content_type).await,
            Self::Memory(sink) => sink.put(key, body, content_type).await,
            Self::S3(sink) => sink.put(key, body, content_type).await,
        }
    }

    fn describe(&self, key: &str) -> String {
        match self {
            Self::Local(sink) => sink.describe(key),
            Self::Memory(sink) => sink.describe(key),
            Self::S3(sink) => sink.describe(key),
        }
    }
}
