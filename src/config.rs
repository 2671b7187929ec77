//! Job configuration
//!
//! Every component receives its settings from a [`PipelineConfig`] value.
//! The binaries build it from `RAGX_*` environment variables (optionally
//! sourced from a `.env` file) and then apply command line overrides.

use crate::store::FixtureSet;
use eyre::{Context, Result, bail, eyre};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DB_PATH: &str = "test.db";
pub const DEFAULT_OUTPUT_KEY: &str = "rag-data.json";
pub const DEFAULT_BUCKET: &str = "fake-bucket";

pub const ENV_DB_PATH: &str = "RAGX_DB_PATH";
pub const ENV_OUTPUT_KEY: &str = "RAGX_OUTPUT_KEY";
pub const ENV_BUCKET: &str = "RAGX_BUCKET";
pub const ENV_SINK: &str = "RAGX_SINK";
pub const ENV_OUTPUT_DIR: &str = "RAGX_OUTPUT_DIR";
pub const ENV_SEED: &str = "RAGX_SEED";
pub const ENV_FIXTURES: &str = "RAGX_FIXTURES";
pub const ENV_PRETTY: &str = "RAGX_PRETTY";

/// Backend the artifact is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SinkKind {
    /// A file under the output directory
    #[default]
    Local,
    /// Process memory only (dry run)
    Memory,
    /// An S3 bucket
    S3,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SinkKind::Local => "local",
            SinkKind::Memory => "memory",
            SinkKind::S3 => "s3",
        };
        f.write_str(name)
    }
}

impl FromStr for SinkKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" | "file" => Ok(SinkKind::Local),
            "memory" | "mem" => Ok(SinkKind::Memory),
            "s3" => Ok(SinkKind::S3),
            other => Err(eyre!(
                "Unknown sink '{}', expected one of: local, memory, s3",
                other
            )),
        }
    }
}

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// SQLite store file
    pub db_path: PathBuf,
    /// Key the JSON artifact is stored under
    pub output_key: String,
    /// Bucket used by the S3 sink
    pub bucket: String,
    pub sink: SinkKind,
    /// Root directory of the local sink
    pub output_dir: PathBuf,
    /// Reseed the store before every extract. Disable to export real data.
    pub seed_before_extract: bool,
    /// YAML fixture file; the built-in sample set when unset
    pub fixtures: Option<PathBuf>,
    pub pretty: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            output_key: DEFAULT_OUTPUT_KEY.to_string(),
            bucket: DEFAULT_BUCKET.to_string(),
            sink: SinkKind::default(),
            output_dir: PathBuf::from("."),
            seed_before_extract: true,
            fixtures: None,
            pretty: true,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from `RAGX_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(db_path) = lookup(ENV_DB_PATH) {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(key) = lookup(ENV_OUTPUT_KEY) {
            config.output_key = key;
        }
        if let Some(bucket) = lookup(ENV_BUCKET) {
            config.bucket = bucket;
        }
        if let Some(sink) = lookup(ENV_SINK) {
            config.sink = sink
                .parse()
                .with_context(|| format!("Invalid {}", ENV_SINK))?;
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(seed) = lookup(ENV_SEED) {
            config.seed_before_extract = parse_bool(ENV_SEED, &seed)?;
        }
        if let Some(fixtures) = lookup(ENV_FIXTURES).filter(|f| !f.trim().is_empty()) {
            config.fixtures = Some(PathBuf::from(fixtures));
        }
        if let Some(pretty) = lookup(ENV_PRETTY) {
            config.pretty = parse_bool(ENV_PRETTY, &pretty)?;
        }

        Ok(config)
    }

    /// Reject settings that cannot produce an artifact
    pub fn validate(&self) -> Result<()> {
        if self.output_key.trim().is_empty() {
            bail!("Output key must not be empty");
        }
        if self.sink == SinkKind::S3 && self.bucket.trim().is_empty() {
            bail!("The s3 sink requires a bucket ({})", ENV_BUCKET);
        }
        Ok(())
    }

    /// Fixture set to seed with
    pub fn fixture_set(&self) -> Result<FixtureSet> {
        match &self.fixtures {
            Some(path) => FixtureSet::read(path),
            None => Ok(FixtureSet::sample()),
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("Invalid {}: '{}' is not a boolean", name, other),
    }
}
