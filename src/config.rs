//! Configuration handling for the TUI

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides the configured API base URL
pub const API_URL_ENV: &str = "FEEDBACK_API_URL";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackConfig {
    /// Base URL of the feedback API, e.g. `https://feedback.example.com`
    pub api_base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FeedbackConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "feedback", "feedback-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FeedbackConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Base URL from the environment, falling back to the config file
    pub fn api_base_url(&self) -> Result<String> {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_base_url(&self, env_value: Option<String>) -> Result<String> {
        let url = env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match url {
            Some(url) => Ok(url),
            None => bail!(
                "No feedback API configured. Set {API_URL_ENV} or api_base_url in {}",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "config.json".to_string())
            ),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
