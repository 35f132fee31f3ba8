//! User-visible text rendered into the display regions.

use mr_or_ms_core::types::Gender;

/// Message shown when the service has no prediction for a name.
pub const NO_PREDICTION: &str = "No prediction is available for this name!";

/// Format a successful prediction, e.g. `98.00% female`.
pub fn prediction(gender: Gender, probability: f64) -> String {
    format!("{:.2}% {}", probability * 100.0, gender)
}

/// Format the saved-answer line, e.g. `Alice is female`.
pub fn saved_answer(name: &str, gender: Gender) -> String {
    format!("{} is {}", name, gender)
}

/// Message shown when no gender is saved for a name.
pub fn no_saved_answer(name: &str) -> String {
    format!("No gender is saved for {}", name)
}

/// Message shown after clearing the saved answer for a name.
pub fn cleared(name: &str) -> String {
    format!("Cleared saved gender for {}", name)
}
