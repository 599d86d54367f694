use std::{collections::HashMap, sync::Arc};

use anyhow::{Result, bail};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{config::DatabaseConfig, db::Dialect};

#[async_trait]
pub trait DbProvider: Send + Sync {
    fn id(&self) -> Dialect;
    fn supports_url(&self, url: &str) -> bool;
    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr>;
    async fn post_connect(&self, _db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<(), DbErr> {
        Ok(())
    }
}

pub struct DbProviders {
    providers: HashMap<Dialect, Arc<dyn DbProvider>>,
}

impl DbProviders {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn DbProvider>) -> Result<Self> {
        self.add(provider)?;
        Ok(self)
    }

    pub fn add(&mut self, provider: Arc<dyn DbProvider>) -> Result<()> {
        let id = provider.id();
        if self.providers.contains_key(&id) {
            bail!("database provider already registered: {}", id.as_str());
        }
        self.providers.insert(id, provider);
        Ok(())
    }

    /// Provider for `dialect`, checked against the scheme of `url`.
    pub fn resolve(&self, dialect: Dialect, url: &str) -> Result<Arc<dyn DbProvider>> {
        let Some(provider) = self.providers.get(&dialect) else {
            bail!("no database provider registered for driver '{}'", dialect.as_str());
        };
        if !provider.supports_url(url) {
            bail!(
                "connection '{}' does not match driver '{}'",
                redact_url(url),
                dialect.as_str()
            );
        }
        Ok(Arc::clone(provider))
    }
}

impl Default for DbProviders {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
