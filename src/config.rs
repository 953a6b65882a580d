use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_API_HOST: &str = "google-flights4.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: String,
    pub api_host: String,
    /// Full price-graph endpoint. Derived from `api_host` when empty.
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    pub fn endpoint(&self) -> String {
        if self.api_url.is_empty() {
            format!("https://{}/price-graph/for-one-way", self.api_host)
        } else {
            self.api_url.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Loads the optional JSON config file, then applies environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

fn load_config_with(
    path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            debug!("Reading config from {}", path.display());
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    if let Some(key) = env("RAPIDAPI_KEY") {
        config.api_key = key;
    }
    if let Some(host) = env("RAPIDAPI_HOST") {
        config.api_host = host;
    }
    if let Some(url) = env("PRICE_GRAPH_URL") {
        config.api_url = url;
    }
    if let Some(secs) = env("FETCH_TIMEOUT_SECS") {
        config.timeout_secs = secs
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "FETCH_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
    }

    config.api_key = config.api_key.trim().to_string();
    if config.api_key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    if config.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            name: "timeout_secs",
            value: "0".into(),
        });
    }
    Ok(config)
}
