//! Error types for Mr-or-Ms.

use thiserror::Error;

/// Result type alias using Mr-or-Ms's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Mr-or-Ms.
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The prediction service could not produce a usable answer.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The answer store could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl Error {
    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageUnavailable(msg.into())
    }

    /// Single-line message suitable for the error display region.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Fetch(e) => e.user_message().to_string(),
            Self::StorageUnavailable(_) => "An error occurred! Please try again later.".to_string(),
        }
    }
}

/// Validation failures for the name field and the gender selection.
///
/// `Display` renders the exact text shown in the error region.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is Empty!")]
    EmptyName,

    #[error("Name should only contain letters and spaces!")]
    InvalidCharacters,

    #[error("Name should be at most 255 characters!")]
    TooLong,

    #[error("Gender is not selected!")]
    NoGenderSelected,
}

/// Failures from the remote prediction service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service has no entry for the requested name (HTTP 404).
    #[error("no prediction available")]
    NotFound,

    /// The service throttled the request (HTTP 429).
    #[error("rate limited by prediction service")]
    RateLimited,

    /// The service answered with an unexpected status.
    #[error("prediction service returned status {0}")]
    ServerError(u16),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    TransportError(String),
}

impl FetchError {
    /// Single-line message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound => "No prediction is available for this name!",
            Self::RateLimited => "Too many requests! Please try again later.",
            Self::ServerError(_) | Self::TransportError(_) => {
                "An error occurred! Please try again later."
            }
        }
    }
}
