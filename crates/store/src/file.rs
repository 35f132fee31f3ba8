//! Durable answer store backed by a JSON file.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;

use mr_or_ms_core::{traits::AnswerStore, types::Gender, Error, Result};

/// Answer store persisted as a single JSON object on disk.
///
/// The whole map is rewritten on every mutation, which is fine at the
/// scale of one entry per distinct name. A missing file reads as empty.
pub struct FileAnswerStore {
    path: PathBuf,
}

impl FileAnswerStore {
    /// Create a new file-backed answer store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, Gender>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(format!("Failed to read answer file: {}", e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::storage(format!("Failed to parse answer file: {}", e)))
    }

    fn write_all(&self, entries: &BTreeMap<String, Gender>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::storage(format!("Failed to serialize answers: {}", e)))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::storage(format!("Failed to create answer directory: {}", e)))?;
        }
        std::fs::write(&self.path, content)
            .map_err(|e| Error::storage(format!("Failed to write answer file: {}", e)))
    }
}

#[async_trait]
impl AnswerStore for FileAnswerStore {
    async fn get(&self, name: &str) -> Result<Option<Gender>> {
        Ok(self.read_all()?.get(name).copied())
    }

    async fn set(&self, name: &str, gender: Gender) -> Result<()> {
        tracing::debug!(name, gender = %gender, path = %self.path.display(), "Storing answer");
        let mut entries = self.read_all()?;
        entries.insert(name.to_string(), gender);
        self.write_all(&entries)
    }

    async fn remove(&self, name: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(name).is_none() {
            return Ok(());
        }
        self.write_all(&entries)
    }
}
