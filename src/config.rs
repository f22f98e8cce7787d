//! Configuration management for Cata

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Run the web collaborator alongside the console
    pub enabled: bool,
    /// Greeting served at `/message` until the console sets another
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    pub directory: String,
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Rows shown per page by `view`
    pub page_size: usize,
    /// Cells wider than this are wrapped onto several lines
    pub max_column_width: usize,
    /// Print a message for unrecognized verbs instead of ignoring them
    pub report_unknown_commands: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Refuse bookings and edits that would leave `booked > available`
    pub enforce_capacity: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix CATA_)
            .add_source(
                Environment::with_prefix("CATA")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enabled: true,
            message: "welcome to the catalogue".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://project.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: "logs".to_string(),
            file: "cata.log".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_column_width: 10,
            report_unknown_commands: true,
        }
    }
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            enforce_capacity: true,
        }
    }
}
