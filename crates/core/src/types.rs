//! Shared data types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A gender choice, as selected in the form or returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Stable string form, also used as the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strings that name neither gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(ParseGenderError(other.to_string())),
        }
    }
}

/// A prediction returned by the remote service.
///
/// `gender` is absent when the service has no answer for the name. Held
/// only long enough to render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub gender: Option<Gender>,
    /// Confidence in the prediction, in `[0, 1]`.
    #[serde(default)]
    pub probability: f64,
}

/// The last gender confirmed by the user, mirroring the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAnswer {
    pub name: String,
    pub gender: Gender,
}
