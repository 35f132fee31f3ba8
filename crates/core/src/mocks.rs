//! Mock implementations of core traits for testing.
//!
//! These are used across the workspace so controller and store behavior can
//! be exercised without a live service or filesystem.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    error::{Error, FetchError, Result},
    traits::{AnswerStore, GenderPredictor, Region, RenderSink},
    types::{Gender, Prediction},
};

// =============================================================================
// Mock Answer Store
// =============================================================================

/// In-memory mock for AnswerStore that counts lookups.
#[derive(Default)]
pub struct MockAnswerStore {
    entries: Mutex<HashMap<String, Gender>>,
    lookups: Mutex<usize>,
}

impl MockAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with entries.
    pub fn with_entries(entries: Vec<(&str, Gender)>) -> Self {
        let store = Self::new();
        {
            let mut map = store.entries.lock().unwrap();
            for (name, gender) in entries {
                map.insert(name.to_string(), gender);
            }
        }
        store
    }

    /// Number of `get` calls made against this mock.
    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current value for `name`, bypassing the trait.
    pub fn entry(&self, name: &str) -> Option<Gender> {
        self.entries.lock().unwrap().get(name).copied()
    }
}

#[async_trait]
impl AnswerStore for MockAnswerStore {
    async fn get(&self, name: &str) -> Result<Option<Gender>> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self.entries.lock().unwrap().get(name).copied())
    }

    async fn set(&self, name: &str, gender: Gender) -> Result<()> {
        self.entries.lock().unwrap().insert(name.to_string(), gender);
        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(name);
        Ok(())
    }
}

/// Mock store whose every operation reports the backing storage as gone.
#[derive(Default)]
pub struct UnavailableStore;

#[async_trait]
impl AnswerStore for UnavailableStore {
    async fn get(&self, _name: &str) -> Result<Option<Gender>> {
        Err(Error::storage("backing store unavailable"))
    }

    async fn set(&self, _name: &str, _gender: Gender) -> Result<()> {
        Err(Error::storage("backing store unavailable"))
    }

    async fn remove(&self, _name: &str) -> Result<()> {
        Err(Error::storage("backing store unavailable"))
    }
}

// =============================================================================
// Mock Predictor
// =============================================================================

/// Scripted mock predictor that returns predefined outcomes.
pub struct MockPredictor {
    outcomes: Mutex<Vec<std::result::Result<Prediction, FetchError>>>,
    call_count: Mutex<usize>,
}

impl MockPredictor {
    /// Create a new mock with a queue of outcomes; calls cycle through them.
    pub fn new(outcomes: Vec<std::result::Result<Prediction, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            call_count: Mutex::new(0),
        }
    }

    /// Create a mock that always predicts the same gender and probability.
    pub fn constant(gender: Gender, probability: f64) -> Self {
        Self::new(vec![Ok(Prediction {
            gender: Some(gender),
            probability,
        })])
    }

    /// Create a mock that always fails with the given error.
    pub fn failing(error: FetchError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Number of predictions requested from this mock.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl GenderPredictor for MockPredictor {
    async fn predict(&self, _name: &str) -> std::result::Result<Prediction, FetchError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let outcomes = self.outcomes.lock().unwrap();
        let idx = (*count - 1) % outcomes.len().max(1);
        outcomes
            .get(idx)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::TransportError("no scripted outcome".into())))
    }
}

// =============================================================================
// Recording Sink
// =============================================================================

/// Render sink that records every write for later inspection.
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<(Region, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, in order.
    pub fn writes(&self) -> Vec<(Region, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// Last text written to a region, if any.
    pub fn last(&self, region: Region) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, text)| text.clone())
    }
}

impl RenderSink for RecordingSink {
    fn render(&self, region: Region, text: &str) {
        self.writes.lock().unwrap().push((region, text.to_string()));
    }
}
