//! Object sink abstraction

use eyre::Result;

/// Content type of every artifact the job writes
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A destination that stores whole objects under string keys
///
/// Implementors decide where the bytes end up:
/// - [`LocalFileSink`](super::LocalFileSink): a file under a root directory
/// - [`MemorySink`](super::MemorySink): an in-process map
/// - [`S3Sink`](super::S3Sink): an S3 bucket
///
/// A `put` writes the whole body in one call and replaces any object
/// already stored under the same key.
pub trait ObjectSink: Send + Sync {
    /// Store `body` under `key`
    ///
    /// # Errors
    /// Returns an error if the backend rejects the write
    fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable location of `key`, used for logging
    fn describe(&self, key: &str) -> String;
}

impl<S: ObjectSink> ObjectSink for &S {
    fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send {
        (**self).put(key, body, content_type)
    }

    fn describe(&self, key: &str) -> String {
        (**self).describe(key)
    }
}
