use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://folio.db` or `sqlite::memory:`
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DATABASE_URL),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::database("database.url must not be empty"));
        }

        Ok(())
    }
}
