use sea_orm::DbErr;

use crate::db::Dialect;

pub const EXIT_CONNECTION: i32 = 1;
pub const EXIT_SCHEMA_ENUMERATION: i32 = 2;
pub const EXIT_CONFIG: i32 = 3;
pub const EXIT_OUTPUT: i32 = 4;
pub const EXIT_RENDER: i32 = 70;

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("failed to connect to {target} (type {dialect}): {source}")]
    Connection {
        target: String,
        dialect: Dialect,
        #[source]
        source: DbErr,
    },
    #[error("cannot fetch list of tables: {0}")]
    SchemaEnumeration(#[source] DbErr),
    #[error("error getting primary keys for table {table}: {source}")]
    PrimaryKeyQuery {
        table: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to import table {table}: {source}")]
    ColumnQuery {
        table: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to look up sequence {sequence}: {source}")]
    SequenceQuery {
        sequence: String,
        #[source]
        source: DbErr,
    },
    #[error("failed to render struct for table {table}: {source}")]
    Render {
        table: String,
        #[source]
        source: askama::Error,
    },
    #[error("failed to write generated code: {0}")]
    Output(#[from] std::io::Error),
}

pub type GenResult<T> = Result<T, GenError>;

impl GenError {
    /// Process status for an error that ends the run. `None` for per-table
    /// lookups, which degrade or skip the table instead.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GenError::Connection { .. } => Some(EXIT_CONNECTION),
            GenError::SchemaEnumeration(_) => Some(EXIT_SCHEMA_ENUMERATION),
            GenError::Output(_) => Some(EXIT_OUTPUT),
            GenError::Render { .. } => Some(EXIT_RENDER),
            GenError::PrimaryKeyQuery { .. }
            | GenError::ColumnQuery { .. }
            | GenError::SequenceQuery { .. } => None,
        }
    }
}
