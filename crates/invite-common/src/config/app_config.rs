//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub leaderboard: LeaderboardConfig,
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

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Leaderboard presentation and navigation settings
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_navigation_timeout_secs")]
    pub navigation_timeout_secs: u64,
    #[serde(default = "default_window_hours")]
    pub window_hours: i64,
    #[serde(default = "default_max_navigation_events")]
    pub max_navigation_events: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            navigation_timeout_secs: default_navigation_timeout_secs(),
            window_hours: default_window_hours(),
            max_navigation_events: default_max_navigation_events(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "invite-leaderboard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_page_size() -> usize {
    10
}

fn default_navigation_timeout_secs() -> u64 {
    15
}

fn default_window_hours() -> i64 {
    24 // 1 day
}

fn default_max_navigation_events() -> usize {
    1
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: required(&lookup, "API_PORT")?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: optional(&lookup, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: optional(&lookup, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            leaderboard: LeaderboardConfig {
                page_size: optional(&lookup, "LEADERBOARD_PAGE_SIZE")?
                    .unwrap_or_else(default_page_size)
                    .max(1),
                navigation_timeout_secs: optional(&lookup, "LEADERBOARD_NAVIGATION_TIMEOUT_SECS")?
                    .unwrap_or_else(default_navigation_timeout_secs),
                window_hours: optional(&lookup, "LEADERBOARD_WINDOW_HOURS")?
                    .unwrap_or_else(default_window_hours),
                max_navigation_events: optional(&lookup, "LEADERBOARD_MAX_NAVIGATION_EVENTS")?
                    .unwrap_or_else(default_max_navigation_events)
                    .max(1),
            },
        })
    }
}

fn optional<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw.clone()))
        })
        .transpose()
}

fn required<F, T>(lookup: &F, key: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    optional(lookup, key)?.ok_or(ConfigError::MissingVar(key))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
