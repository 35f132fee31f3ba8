#![deny(unused)]
//! Mr-or-Ms - name/gender prediction for the terminal.
//!
//! Validates a name, queries the remote gender-prediction service, and
//! lets the user persist a confirmed gender per name.

mod logging;
mod repl;
mod sink;

use std::sync::Arc;

use clap::Parser;

use mr_or_ms_controller::FormController;
use mr_or_ms_core::{config::AppConfig, traits::AnswerStore};
use mr_or_ms_prediction::PredictionClient;
use mr_or_ms_store::{FileAnswerStore, InMemoryAnswerStore};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "mr-or-ms", version, about = "Predict and save a gender for a name")]
struct Cli {
    /// Path of the JSON answer file. Overrides the configured path.
    #[arg(long)]
    store: Option<std::path::PathBuf>,

    /// Base URL of the prediction service. Overrides the configured URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Keep answers in memory only, discarding them on exit.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::configure_tracing()?;

    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.store {
        config.store.path = path;
    }
    if let Some(url) = cli.api_url {
        config.prediction.api_url = url;
    }

    tracing::info!("Starting Mr-or-Ms v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn AnswerStore> = if cli.ephemeral {
        tracing::info!("Using in-memory answer store");
        Arc::new(InMemoryAnswerStore::new())
    } else {
        tracing::info!(path = %config.store.path.display(), "Using file answer store");
        Arc::new(FileAnswerStore::new(&config.store.path))
    };

    let predictor = Arc::new(PredictionClient::new(&config.prediction)?);
    tracing::info!(url = %predictor.base_url(), "Prediction client initialized");

    let controller = FormController::new(store, predictor, Arc::new(sink::ConsoleSink));

    repl::run(controller).await
}
