//! In-memory object sink

use super::ObjectSink;
use eyre::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// An object as held by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Default)]
struct Objects {
    by_key: BTreeMap<String, StoredObject>,
    puts: usize,
}

/// Object store kept in process memory
///
/// Clones share the same objects, so a test can keep a handle while the
/// pipeline owns another. Used for dry runs and as a stand-in for a
/// remote bucket.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    objects: Arc<Mutex<Objects>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Objects> {
        // A poisoned map still holds whole objects; keep serving it.
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.lock().by_key.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().by_key.keys().cloned().collect()
    }

    /// Number of `put` calls received, including overwrites
    pub fn put_count(&self) -> usize {
        self.lock().puts
    }

    pub fn is_empty(&self) -> bool {
        self.lock().by_key.is_empty()
    }
}

impl ObjectSink for MemorySink {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        log::debug!("Storing {} bytes in memory under {}", body.len(), key);
        let mut objects = self.lock();
        objects.puts += 1;
        objects.by_key.insert(
            key.to_string(),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}
