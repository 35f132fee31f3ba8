//! In-memory answer store implementation using DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use mr_or_ms_core::{traits::AnswerStore, types::Gender, Result};

/// In-memory answer store using DashMap for concurrent access.
///
/// Entries do not survive the process.
#[derive(Debug, Default)]
pub struct InMemoryAnswerStore {
    entries: DashMap<String, Gender>,
}

impl InMemoryAnswerStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[async_trait]
impl AnswerStore for InMemoryAnswerStore {
    async fn get(&self, name: &str) -> Result<Option<Gender>> {
        Ok(self.entries.get(name).map(|r| *r.value()))
    }

    async fn set(&self, name: &str, gender: Gender) -> Result<()> {
        tracing::trace!(name, gender = %gender, "Storing answer in memory");
        self.entries.insert(name.to_string(), gender);
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<()> {
        self.entries.remove(name);
        Ok(())
    }
}
