//! Trait seams between the controller and its collaborators.

use async_trait::async_trait;

use crate::error::{FetchError, Result};
use crate::types::{Gender, Prediction};

/// Key-value persistence for confirmed answers, keyed by name.
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Look up the stored gender for `name`. Exact, case-sensitive match.
    async fn get(&self, name: &str) -> Result<Option<Gender>>;

    /// Write or overwrite the entry for `name`. Idempotent.
    async fn set(&self, name: &str, gender: Gender) -> Result<()>;

    /// Delete the entry for `name`. Deleting a missing entry is not an error.
    async fn remove(&self, name: &str) -> Result<()>;
}

/// Remote gender prediction.
#[async_trait]
pub trait GenderPredictor: Send + Sync {
    /// Ask the service for a prediction. One request per call, no retry.
    async fn predict(&self, name: &str) -> std::result::Result<Prediction, FetchError>;
}

/// Output region the controller renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Error,
    Prediction,
    SavedAnswer,
}

/// Sink for rendered text, one slot per display region.
///
/// The last write to a region wins; an empty string clears it.
pub trait RenderSink: Send + Sync {
    fn render(&self, region: Region, text: &str);
}
