mod mysql;
mod postgres;
mod registry;

use std::{sync::Arc, time::Duration};

use sea_orm::ConnectOptions;

pub use registry::{DbProvider, DbProviders};
pub(crate) use registry::redact_url;

use self::{mysql::MySqlDbProvider, postgres::PostgresDbProvider};
use crate::config::DatabaseConfig;

pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviders::new()
        .with_provider(Arc::new(PostgresDbProvider))?
        .with_provider(Arc::new(MySqlDbProvider))
}

// Introspection runs every query on one long-lived connection.
fn single_connection_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(1)
        .min_connections(0)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);
    options
}
