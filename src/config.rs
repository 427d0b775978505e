//! Application configuration.
//!
//! Configuration is stored in `.returns/config.yaml` and includes:
//! - The returns API base URL and HTTP timeouts
//! - List paging and search debounce settings

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReturnsError};

/// Directory holding local state for the CLI
pub const CONFIG_DIR: &str = ".returns";

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "RETURNS_API_URL";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &[
    "api.base_url",
    "api.timeout_secs",
    "api.connect_timeout_secs",
    "list.page_limit",
    "list.search_debounce_ms",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// List screen settings
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 60)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 30)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    /// Items requested per page; fixed for the lifetime of a list
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// Quiet period before a search keystroke commits
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_limit: default_page_limit(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8081/api/mobile".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_page_limit() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    500
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.list.page_limit == 0 {
            return Err(ReturnsError::Config(
                "list.page_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL from the environment variable, falling back to the config file
    pub fn base_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }
        self.api.base_url.clone()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.api.connect_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.list.search_debounce_ms)
    }

    /// Read a value by dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "api.base_url" => self.api.base_url.clone(),
            "api.timeout_secs" => self.api.timeout_secs.to_string(),
            "api.connect_timeout_secs" => self.api.connect_timeout_secs.to_string(),
            "list.page_limit" => self.list.page_limit.to_string(),
            "list.search_debounce_ms" => self.list.search_debounce_ms.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => {
                url::Url::parse(value)
                    .map_err(|e| ReturnsError::InvalidUrl(value.to_string(), e))?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.timeout_secs" => self.api.timeout_secs = parse_number(key, value)?,
            "api.connect_timeout_secs" => {
                self.api.connect_timeout_secs = parse_number(key, value)?
            }
            "list.page_limit" => {
                let limit: u32 = parse_number(key, value)?;
                if limit == 0 {
                    return Err(ReturnsError::Config(
                        "list.page_limit must be greater than 0".to_string(),
                    ));
                }
                self.list.page_limit = limit;
            }
            "list.search_debounce_ms" => self.list.search_debounce_ms = parse_number(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_number<N: std::str::FromStr>(key: &str, value: &str) -> Result<N> {
    value.trim().parse::<N>().map_err(|_| {
        ReturnsError::Config(format!(
            "invalid value '{value}' for {key}. Expected a non-negative integer"
        ))
    })
}

fn unknown_key(key: &str) -> ReturnsError {
    ReturnsError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}
