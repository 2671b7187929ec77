//! Object storage for the exported artifact
//!
//! This module handles where the serialized documents end up:
//! - The [`ObjectSink`] abstraction and its local, in-memory and S3 backends
//! - Runtime selection of a backend from configuration
//! - The JSON array loader that feeds a sink from the ETL pipeline

mod configured;
mod json_loader;
mod local;
mod memory;
mod s3;
mod sink;

pub use configured::ConfiguredSink;
pub use json_loader::JsonArrayLoader;
pub use local::LocalFileSink;
pub use memory::{MemorySink, StoredObject};
pub use s3::S3Sink;
pub use sink::{JSON_CONTENT_TYPE, ObjectSink};
