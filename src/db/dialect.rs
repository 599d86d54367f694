use std::fmt;

use clap::ValueEnum;
use sea_orm::{
    DatabaseBackend,
    sea_query::{Expr, SimpleExpr},
};
use serde::{Deserialize, Serialize};

const POSTGRES_DEFAULT_SCHEMA: &str = "public";

/// SQL dialect of the catalog being read.
///
/// The dialect picks the sea-orm backend used to build statements, which sets
/// the placeholder style: numbered (`$1`) for Postgres, `?` for MySQL.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum,
)]
pub enum Dialect {
    #[default]
    #[serde(rename = "postgres", alias = "postgresql")]
    #[value(name = "postgres", alias = "postgresql")]
    Postgres,
    #[serde(rename = "mysql")]
    #[value(name = "mysql")]
    MySql,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        }
    }

    pub fn backend(self) -> DatabaseBackend {
        match self {
            Dialect::Postgres => DatabaseBackend::Postgres,
            Dialect::MySql => DatabaseBackend::MySql,
        }
    }

    /// Type catalog identifier columns are cast to before decoding.
    pub fn text_type(self) -> &'static str {
        match self {
            Dialect::Postgres => "text",
            Dialect::MySql => "char",
        }
    }

    /// Type catalog length columns are cast to before decoding.
    pub fn integer_type(self) -> &'static str {
        match self {
            Dialect::Postgres => "bigint",
            Dialect::MySql => "signed",
        }
    }

    /// Schema read when none is configured: `public` on Postgres, the
    /// database named in the connection URL on MySQL.
    pub fn default_schema(self) -> SimpleExpr {
        match self {
            Dialect::Postgres => Expr::val(POSTGRES_DEFAULT_SCHEMA).into(),
            Dialect::MySql => Expr::cust("DATABASE()"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
