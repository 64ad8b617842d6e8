use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for FOLIO_CONFIG_DIR env var, else use ./.folio/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("FOLIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".folio"))
    }

    /// Environment variables win over the config file. DATABASE_URL and
    /// BASE_URL keep the names the deployment already uses.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }

        if let Ok(base_url) = std::env::var("BASE_URL") {
            self.api.base_url = Some(base_url);
        }

        if let Ok(host) = std::env::var("FOLIO_HOST") {
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("FOLIO_PORT")
            && let Ok(port) = port.parse()
        {
            self.server.port = port;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.logging.level = LogLevel::parse_or_default(&level);
        }

        if let Ok(colored) = std::env::var("LOG_COLORED")
            && let Ok(colored) = bool::from_str(&colored)
        {
            self.logging.colored = colored;
        }

        if let Ok(file) = std::env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log a startup summary without leaking the full connection string.
    pub fn log_summary(&self) {
        info!(
            "Config: bind={} log_level={:?} cors_origin={}",
            self.bind_addr(),
            *self.logging.level,
            self.api.base_url.as_deref().unwrap_or("*"),
        );
    }
}
