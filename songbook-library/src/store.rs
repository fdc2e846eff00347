use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde::de::DeserializeOwned;
use songbook_core::error::Result;
use std::fs;
use tracing::debug;

/// One JSON-backed store holding a full collection as a single array.
///
/// Saves replace the file completely; there is no merge and no
/// versioning. Loading an absent store initializes it to an empty array
/// on disk so a fresh data directory is immediately consistent.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: Utf8PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load the full collection. Malformed content is fatal and
    /// propagates as a parse error.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            debug!("store {} not found, initializing empty", self.path);
            self.replace(b"[]")?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let items = serde_json::from_str(&content)?;
        Ok(items)
    }

    /// Overwrite the store with the full collection, pretty-printed.
    pub fn save<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(items)?;
        self.replace(content.as_bytes())?;
        debug!("saved {} records to {}", items.len(), self.path);
        Ok(())
    }

    // Write to a temp file, then rename over the store
    fn replace(&self, bytes: &[u8]) -> Result<()> {
        let temp_path = format!("{}.tmp", self.path);
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}
