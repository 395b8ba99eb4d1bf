use anyhow::Result;
use log::{info, warn};

pub mod config;
pub mod prediction;
pub mod quiz;
pub mod results;
pub mod scoring;
pub mod session;
pub mod submission;
pub mod terminal;

use config::QuizConfig;
use prediction::{LocalOnly, PredictionClient, PredictionError, PredictionService};
use terminal::Terminal;

/// Picks the remote client when one can be built, otherwise local-only scoring.
pub fn prediction_service(config: &QuizConfig) -> Box<dyn PredictionService> {
    match PredictionClient::from_config(config) {
        Ok(client) => Box::new(client),
        Err(PredictionError::Offline) => Box::new(LocalOnly),
        Err(e) => {
            warn!("Prediction client unavailable ({}), falling back to local scoring", e);
            Box::new(LocalOnly)
        }
    }
}

pub async fn run() -> Result<()> {
    info!("PersonaSense starting...");

    let config = QuizConfig::from_env();
    config.log_config_status();

    let service = prediction_service(&config);
    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout());
    terminal.run(service.as_ref(), &config).await
}
