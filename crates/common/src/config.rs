//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file). Nested settings use a double underscore, so the design
//! backend URL is `PENPOT__URL` and the bind port is `SERVER__PORT`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PENPOT_URL: &str = "http://localhost:9001";
pub const DEFAULT_PLUGIN_ENDPOINT: &str = "/plugin/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROJECT: &str = "compel-english";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Design backend (PenPot) settings
    pub penpot_url: String,
    pub penpot_plugin_endpoint: String,
    pub penpot_timeout_secs: u64,
    pub penpot_provider: String,

    /// Server settings
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_origins: Vec<String>,

    /// Project brand configuration
    pub projects_config_path: PathBuf,
    pub default_project: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            penpot_url: DEFAULT_PENPOT_URL.to_string(),
            penpot_plugin_endpoint: DEFAULT_PLUGIN_ENDPOINT.to_string(),
            penpot_timeout_secs: DEFAULT_TIMEOUT_SECS,
            penpot_provider: "penpot".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            cors_origins: vec!["*".to_string()],
            projects_config_path: PathBuf::from("projects.json"),
            default_project: DEFAULT_PROJECT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = Self::default();

        let config = Self {
            penpot_url: env_or("PENPOT__URL", defaults.penpot_url),
            penpot_plugin_endpoint: env_or("PENPOT__PLUGIN_ENDPOINT", defaults.penpot_plugin_endpoint),
            penpot_timeout_secs: env_parse("PENPOT__TIMEOUT", defaults.penpot_timeout_secs),
            penpot_provider: env_or("PENPOT__PROVIDER", defaults.penpot_provider),

            host: env_or("SERVER__HOST", defaults.host),
            port: env_parse("SERVER__PORT", defaults.port),
            log_level: env_or("SERVER__LOG_LEVEL", defaults.log_level).to_lowercase(),
            cors_origins: env::var("SERVER__CORS_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.cors_origins),

            projects_config_path: env::var("PROJECTS_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.projects_config_path),
            default_project: env_or("DEFAULT_PROJECT", defaults.default_project),
        };

        if config.penpot_timeout_secs == 0 {
            anyhow::bail!("PENPOT__TIMEOUT must be greater than zero");
        }

        Ok(config)
    }

    /// Whether every origin is allowed
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    /// Full URL commands are POSTed to
    pub fn plugin_url(&self) -> String {
        format!(
            "{}{}",
            self.penpot_url.trim_end_matches('/'),
            self.penpot_plugin_endpoint
        )
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
