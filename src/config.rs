use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Result, ReviewsError};
use crate::types::{TimeRange, DEFAULT_TIME_RANGE};

/// Environment variable holding the reviews API base URL
pub const API_URL_ENV: &str = "APP_REVIEWS_API_URL";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeneralConfig {
    pub api_url: Option<String>,
    pub default_time_range: Option<TimeRange>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub default_time_range: TimeRange,
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("appreviews").join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                Config::default()
            }
        }
    }

    /// Resolve the API URL: CLI flag, then environment, then config file.
    pub fn resolve(&self, cli_url: Option<String>, env_url: Option<String>) -> Result<Settings> {
        let api_url = [cli_url, env_url, self.general.api_url.clone()]
            .into_iter()
            .flatten()
            .map(|u| u.trim().to_string())
            .find(|u| !u.is_empty())
            .ok_or_else(|| {
                ReviewsError::Config(format!(
                    "Missing required environment variable: {}",
                    API_URL_ENV
                ))
            })?;

        validate_api_url(&api_url)?;

        Ok(Settings {
            api_url,
            default_time_range: self.general.default_time_range.unwrap_or(DEFAULT_TIME_RANGE),
        })
    }
}

fn validate_api_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|e| ReviewsError::Config(format!("Invalid API URL '{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ReviewsError::Config(format!(
            "Invalid API URL '{}': unsupported scheme '{}'",
            url, other
        ))),
    }
}
