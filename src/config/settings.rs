//! Persistent CLI settings loaded from config.json and the environment

use super::{ConfigPaths, DEFAULT_API_URL};
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the role-store service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the config file (defaults if absent), then apply environment overrides
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        let config = Self::load_file(paths)?;
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Load only the config file, falling back to defaults when it does not exist
    pub fn load_file(paths: &ConfigPaths) -> CliResult<Self> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&paths.config_file)?;
        serde_json::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Invalid config file {}: {e}",
                paths.config_file.display()
            ))
        })
    }

    /// Apply `ROLESTORE_API_URL`, `ROLESTORE_TOKEN` and `ROLESTORE_TIMEOUT_SECS`
    /// as returned by `lookup`. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup("ROLESTORE_API_URL") {
            self.api_url = url;
        }
        if let Some(token) = lookup("ROLESTORE_TOKEN") {
            self.access_token = Some(token);
        }
        if let Some(timeout) = lookup("ROLESTORE_TIMEOUT_SECS").and_then(|t| t.parse().ok()) {
            self.timeout_secs = timeout;
        }
        self
    }

    /// Override the API URL from the command line
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    /// Root of the role-store REST API, without trailing slash
    pub fn base_url(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), super::API_PREFIX)
    }
}
