use std::collections::HashMap;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "SCHEMA_STRUCTS";
    const SEPARATOR: &'static str = "__";
    /// Keys whose values are comma separated lists.
    const LIST_KEYS: &'static [&'static str] = &[];

    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Reads the process environment without validating the result.
    fn load() -> Result<Self> {
        Self::load_dotenv();
        Self::load_from(None)
    }

    /// Reads `vars` instead of the process environment when given.
    fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self> {
        let mut environment = config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
            .source(vars);
        if !Self::LIST_KEYS.is_empty() {
            environment = environment.list_separator(",");
            for key in Self::LIST_KEYS {
                environment = environment.with_list_parse_key(key);
            }
        }

        let settings = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?;

        settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")
    }
}
