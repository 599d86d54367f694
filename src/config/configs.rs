use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};
use crate::db::Dialect;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
    pub generate: GenerateConfig,
}

impl EnvConfig for GeneratorConfig {
    const LIST_KEYS: &'static [&'static str] = &["generate.tables"];

    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub driver: Dialect,
    /// Connection URL. `$VAR` and `${VAR}` references are expanded.
    pub url: String,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: Dialect::default(),
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// Schema to read. Unset means `public` on Postgres and the connected
    /// database on MySQL.
    pub schema: Option<String>,
    /// Tables to generate. Empty means every table of the schema.
    pub tables: Vec<String>,
    pub package: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            schema: None,
            tables: Vec::new(),
            package: defaults::DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl GenerateConfig {
    /// Explicit table list with blank entries removed.
    pub fn explicit_tables(&self) -> Vec<String> {
        self.tables
            .iter()
            .map(|table| table.trim())
            .filter(|table| !table.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Splits a comma separated table list.
pub fn parse_table_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
