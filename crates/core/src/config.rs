//! Application configuration.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub prediction: PredictionConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Base URL of the gender prediction service.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path of the JSON answer file.
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration from `config/*` files and `MRMS`-prefixed
    /// environment variables, layered over the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Map MRMS__PREDICTION__API_URL to prediction.api_url
            .add_source(Environment::with_prefix("MRMS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prediction: PredictionConfig {
                api_url: "https://api.genderize.io/".into(),
                timeout_secs: 10,
            },
            store: StoreConfig {
                path: PathBuf::from("answers.json"),
            },
        }
    }
}
