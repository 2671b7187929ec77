//! Local file object sink

use super::ObjectSink;
use eyre::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Writes objects as files under a root directory
///
/// The key is used as a relative path, so `reports/rag-data.json` lands in
/// `<root>/reports/rag-data.json`. Leading `/` and `..` segments are dropped,
/// so every key stays under the root. The content type is not persisted.
#[derive(Debug, Clone)]
pub struct LocalFileSink {
    root: PathBuf,
}

impl LocalFileSink {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path the object for `key` is written to
    pub fn path_for(&self, key: &str) -> PathBuf {
        let relative: PathBuf = Path::new(key)
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        self.root.join(relative)
    }

    pub fn write_object(&self, key: &str, body: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, body)
            .with_context(|| format!("Failed to write object: {}", path.display()))?;

        Ok(path)
    }
}

impl ObjectSink for LocalFileSink {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let path = self.write_object(key, &body)?;
        log::info!(
            "Saved {} bytes ({}) to {}",
            body.len(),
            content_type,
            path.display()
        );
        Ok(())
    }

    fn describe(&self, key: &str) -> String {
        self.path_for(key).display().to_string()
    }
}
