use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Static site copy that varies per deployment.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            contact_email: default_contact_email(),
            contact_phone: default_contact_phone(),
        }
    }
}

fn default_company_name() -> String {
    "Voltedge Engineering".to_string()
}

fn default_contact_email() -> String {
    "info@voltedge.local".to_string()
}

fn default_contact_phone() -> String {
    "+91 98765 43210".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VOLTEDGE__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:voltedge.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults and env cover the rest.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VOLTEDGE")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy variable without prefix, honored by most deploy tooling.
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
