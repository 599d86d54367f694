use sea_orm::{DatabaseConnection, DbErr};
use tracing::{info, warn};

use super::providers::{DbProvider, redact_url};
use crate::{
    config::DatabaseConfig,
    error::{GenError, GenResult},
};

/// Opens the single connection used for the whole run.
///
/// Many drivers defer connecting until the first statement, so the
/// connection is pinged before it is handed out.
pub async fn open(provider: &dyn DbProvider, cfg: &DatabaseConfig) -> GenResult<DatabaseConnection> {
    let target = redact_url(&cfg.url);
    let failed = |source: DbErr| GenError::Connection {
        target: target.clone(),
        dialect: provider.id(),
        source,
    };

    let db = provider.connect(cfg).await.map_err(failed)?;
    let ready = match db.ping().await {
        Ok(()) => provider.post_connect(&db, cfg).await,
        Err(err) => Err(err),
    };
    if let Err(err) = ready {
        close(db).await;
        return Err(failed(err));
    }

    info!(url = %target, driver = %provider.id(), "connected to database");
    Ok(db)
}

pub async fn close(db: DatabaseConnection) {
    if let Err(err) = db.close().await {
        warn!("failed to close database connection: {err}");
    }
}
