//! Configuration management

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::application::errors::ConfigError;

/// Default suggestion server address
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:10000";

/// Environment variable that overrides the server address
pub const SERVER_DOMAIN_ENV: &str = "SERVER_DOMAIN";

/// Chat client configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub server: ServerConfig,
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub user_label: String,
    pub bot_label: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            user_label: "YOU".to_string(),
            bot_label: "BOT".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject anything that is not an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(self.base_url())
            .map_err(|e| ConfigError::InvalidValue(format!("base-url '{}': {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidValue(format!(
                "base-url '{}': unsupported scheme '{}'",
                self.base_url, other
            ))),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Apply the environment value, then the command-line value, on top of
    /// whatever was loaded. Empty values are ignored.
    pub fn apply_overrides(&mut self, env_server: Option<String>, cli_server: Option<String>) {
        for server in [env_server, cli_server].into_iter().flatten() {
            if !server.trim().is_empty() {
                self.server.base_url = server.trim().to_string();
            }
        }
    }

    /// Resolve the effective configuration once at startup:
    /// defaults < config file < `SERVER_DOMAIN` < `--server`
    pub fn resolve(path: impl AsRef<Path>, cli_server: Option<String>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Config::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            })
        } else {
            Config::default()
        };

        config.apply_overrides(std::env::var(SERVER_DOMAIN_ENV).ok(), cli_server);
        config.server.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }
}
