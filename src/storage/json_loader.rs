//! JSON array artifact loader

use super::{JSON_CONTENT_TYPE, ObjectSink};
use crate::etl::Loader;
use eyre::{Context, Result};
use serde::Serialize;
use std::marker::PhantomData;

/// Serializes every item into one JSON array and stores it under a key
///
/// The whole array is written with a single `put`, so the artifact is
/// replaced as a unit on every load.
pub struct JsonArrayLoader<S, T> {
    sink: S,
    key: String,
    pretty: bool,
    _item: PhantomData<fn(T)>,
}

impl<S: ObjectSink, T: Serialize> JsonArrayLoader<S, T> {
    /// Loader writing 2-space indented JSON
    pub fn new(sink: S, key: impl Into<String>) -> Self {
        Self {
            sink,
            key: key.into(),
            pretty: true,
            _item: PhantomData,
        }
    }

    /// Toggle indented output; compact output has no whitespace
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Serialize items into the artifact body
    pub fn serialize(&self, items: &[T]) -> Result<Vec<u8>> {
        let body = match self.pretty {
            true => serde_json::to_vec_pretty(items),
            false => serde_json::to_vec(items),
        };
        body.with_context(|| format!("Failed to serialize {} items to JSON", items.len()))
    }
}

impl<S, T> Loader for JsonArrayLoader<S, T>
where
    S: ObjectSink,
    T: Serialize + Send,
{
    type Item = T;

    async fn load(&self, items: Vec<Self::Item>) -> Result<usize> {
        let body = self.serialize(&items)?;
        log::debug!(
            "Writing {} items ({} bytes) to {}",
            items.len(),
            body.len(),
            self.sink.describe(&self.key)
        );

        self.sink
            .put(&self.key, body, JSON_CONTENT_TYPE)
            .await
            .with_context(|| format!("Failed to write {}", self.sink.describe(&self.key)))?;

        Ok(items.len())
    }
}
