use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};

use super::{registry::DbProvider, single_connection_options};
use crate::{config::DatabaseConfig, db::Dialect};

pub struct MySqlDbProvider;

#[async_trait]
impl DbProvider for MySqlDbProvider {
    fn id(&self) -> Dialect {
        Dialect::MySql
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("mysql://")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
        Database::connect(single_connection_options(cfg)).await
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<(), DbErr> {
        db.execute_unprepared("SET SESSION TRANSACTION READ ONLY").await?;
        Ok(())
    }
}
