//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use podium_core::UserId;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub scoreboard: ScoreboardConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Scoreboard engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreboardConfig {
    /// Canonical snapshot path
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
    /// Homeserver domains used as `via` candidates in permalinks
    #[serde(default)]
    pub homeserver_domains: Vec<String>,
    /// Prefix that marks a chat message as a moderator command
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Users allowed to issue commands; empty disables command handling
    #[serde(default)]
    pub admin_users: Vec<UserId>,
}

// Default value functions
fn default_app_name() -> String {
    "podium".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8480
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("./data/scoreboard.json")
}

fn default_command_prefix() -> String {
    "!qa".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a present variable holds an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: match env::var("API_PORT") {
                    Ok(s) => s
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", s))?,
                    Err(_) => default_port(),
                },
            },
            scoreboard: ScoreboardConfig {
                snapshot_path: env::var("SNAPSHOT_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_snapshot_path()),
                homeserver_domains: env::var("HOMESERVER_DOMAINS")
                    .ok()
                    .map(|s| split_list(&s))
                    .unwrap_or_default(),
                command_prefix: env::var("COMMAND_PREFIX")
                    .unwrap_or_else(|_| default_command_prefix()),
                admin_users: env::var("ADMIN_USERS")
                    .ok()
                    .map(|s| split_list(&s).into_iter().map(UserId::new).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
