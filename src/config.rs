use std::time::Duration;
use log::{info, warn};
use url::Url;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_PREDICT_PATH: &str = "/api/predict";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the quiz front end and the prediction client.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// When set, predictions go to `{api_base_url}/predict`.
    pub api_base_url: Option<String>,
    /// Origin that the relative prediction path is resolved against.
    pub origin: String,
    pub request_timeout: Duration,
    /// Skip the remote call and classify locally only.
    pub offline: bool,
    pub share_url: Option<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            origin: DEFAULT_ORIGIN.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            offline: false,
            share_url: None,
        }
    }
}

impl QuizConfig {
    /// Load configuration from the environment, `.env`, and build-time values.
    pub fn from_env() -> Self {
        Self::from_lookup(get_env_var)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_base_url = lookup("PERSONASENSE_API_BASE_URL");

        if let Some(origin) = lookup("PERSONASENSE_ORIGIN") {
            config.origin = origin;
        }

        if let Some(timeout) = lookup("PERSONASENSE_REQUEST_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid PERSONASENSE_REQUEST_TIMEOUT_SECS={}, using {}s",
                    timeout, DEFAULT_REQUEST_TIMEOUT_SECS
                ),
            }
        }

        config.offline = lookup("PERSONASENSE_OFFLINE")
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        config.share_url = lookup("PERSONASENSE_SHARE_URL");

        config
    }

    pub fn predict_url(&self) -> Result<Url, url::ParseError> {
        match &self.api_base_url {
            Some(base) => Url::parse(&format!("{}/predict", base.trim_end_matches('/'))),
            None => Url::parse(&self.origin)?.join(DEFAULT_PREDICT_PATH),
        }
    }

    /// Link included in share text. Defaults to the origin.
    pub fn share_url(&self) -> &str {
        self.share_url.as_deref().unwrap_or(&self.origin)
    }

    pub fn log_config_status(&self) {
        info!("🔧 PersonaSense configuration:");
        match self.predict_url() {
            Ok(url) if !self.offline => info!("✅ Prediction endpoint: {}", url),
            Ok(_) => info!("📴 Offline mode: predictions are computed locally"),
            Err(e) => warn!("❌ Prediction endpoint is invalid ({}), local scoring will be used", e),
        }
        info!("⏱️ Request timeout: {}s", self.request_timeout.as_secs());
    }
}

/// Reads `key` from the runtime environment (after loading `.env`), falling back to the value
/// embedded by build.rs.
pub fn get_env_var(key: &str) -> Option<String> {
    let _ = dotenvy::dotenv();

    if let Ok(value) = std::env::var(key) {
        if !value.is_empty() {
            return Some(value);
        }
    }

    let embedded_value = match key {
        "PERSONASENSE_API_BASE_URL" => option_env!("PERSONASENSE_API_BASE_URL"),
        "PERSONASENSE_ORIGIN" => option_env!("PERSONASENSE_ORIGIN"),
        "PERSONASENSE_REQUEST_TIMEOUT_SECS" => option_env!("PERSONASENSE_REQUEST_TIMEOUT_SECS"),
        "PERSONASENSE_OFFLINE" => option_env!("PERSONASENSE_OFFLINE"),
        "PERSONASENSE_SHARE_URL" => option_env!("PERSONASENSE_SHARE_URL"),
        _ => None,
    };

    embedded_value
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
