use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

use super::{registry::DbProvider, single_connection_options};
use crate::{config::DatabaseConfig, db::Dialect};

pub struct PostgresDbProvider;

#[async_trait]
impl DbProvider for PostgresDbProvider {
    fn id(&self) -> Dialect {
        Dialect::Postgres
    }

    fn supports_url(&self, url: &str) -> bool {
        let normalized = url.trim().to_ascii_lowercase();
        normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
        Database::connect(single_connection_options(cfg)).await
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<(), DbErr> {
        db.execute_unprepared("SET SESSION CHARACTERISTICS AS TRANSACTION READ ONLY")
            .await?;
        Ok(())
    }
}
