use sea_orm::sea_query::{
    Alias, Condition, Expr, ExprTrait, Func, FunctionCall, IntoColumnRef, JoinType, Order, Query,
    SelectStatement, SimpleExpr,
};
use sea_orm::{DatabaseConnection, FromQueryResult, Statement};

use super::{Dialect, sequence::sequence_name};
use crate::{
    error::{GenError, GenResult},
    model::{Column, PrimaryKeySet},
};

const INFORMATION_SCHEMA: &str = "information_schema";

#[derive(Debug, FromQueryResult)]
struct TableRow {
    table_name: String,
}

#[derive(Debug, FromQueryResult)]
struct KeyColumnRow {
    column_name: String,
}

#[derive(Debug, FromQueryResult)]
struct ColumnRow {
    column_name: String,
    data_type: String,
    character_maximum_length: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct SequenceRow {
    sequence_name: String,
}

/// Read-only access to the information schema of one database schema.
///
/// Every call is a fresh round trip; nothing is cached between tables.
pub struct Catalog<'a> {
    db: &'a DatabaseConnection,
    dialect: Dialect,
    /// `None` reads the dialect's default schema.
    schema: Option<String>,
}

impl<'a> Catalog<'a> {
    pub fn new(db: &'a DatabaseConnection, dialect: Dialect, schema: impl Into<String>) -> Self {
        Self::with_schema(db, dialect, Some(schema.into()))
    }

    pub fn with_schema(
        db: &'a DatabaseConnection,
        dialect: Dialect,
        schema: Option<String>,
    ) -> Self {
        Self {
            db,
            dialect,
            schema,
        }
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Tables of the schema, in the order the catalog returns them.
    pub async fn list_tables(&self) -> GenResult<Vec<String>> {
        let query = Query::select()
            .expr_as(self.text(Alias::new("table_name")), Alias::new("table_name"))
            .from(view("tables"))
            .and_where(self.in_schema(Alias::new("table_schema")))
            .to_owned();

        let rows = TableRow::find_by_statement(self.build(&query))
            .all(self.db)
            .await
            .map_err(GenError::SchemaEnumeration)?;
        Ok(rows.into_iter().map(|row| row.table_name).collect())
    }

    /// Primary key columns of `table` in key ordinal order. Empty when the
    /// table has no primary key.
    pub async fn primary_keys(&self, table: &str) -> GenResult<PrimaryKeySet> {
        let query = Query::select()
            .expr_as(self.text(qualified("c", "column_name")), Alias::new("column_name"))
            .from_as(view("key_column_usage"), Alias::new("c"))
            .join_as(
                JoinType::InnerJoin,
                view("table_constraints"),
                Alias::new("t"),
                Condition::all()
                    .add(
                        Expr::col(qualified("c", "constraint_name"))
                            .equals(qualified("t", "constraint_name")),
                    )
                    .add(
                        Expr::col(qualified("c", "constraint_schema"))
                            .equals(qualified("t", "constraint_schema")),
                    )
                    .add(Expr::col(qualified("c", "table_name")).equals(qualified("t", "table_name"))),
            )
            .and_where(Expr::col(qualified("t", "table_name")).eq(table))
            .and_where(self.in_schema(qualified("t", "table_schema")))
            .and_where(Expr::col(qualified("t", "constraint_type")).eq("PRIMARY KEY"))
            .order_by(qualified("c", "ordinal_position"), Order::Asc)
            .to_owned();

        let rows = KeyColumnRow::find_by_statement(self.build(&query))
            .all(self.db)
            .await
            .map_err(|source| GenError::PrimaryKeyQuery {
                table: table.to_string(),
                source,
            })?;
        Ok(PrimaryKeySet::new(
            rows.into_iter().map(|row| row.column_name).collect(),
        ))
    }

    /// Column metadata of `table` in ordinal order.
    pub async fn columns(&self, table: &str) -> GenResult<Vec<Column>> {
        let query = Query::select()
            .expr_as(self.text(Alias::new("column_name")), Alias::new("column_name"))
            .expr_as(self.text(Alias::new("data_type")), Alias::new("data_type"))
            .expr_as(
                Func::cast_as(
                    Expr::col(Alias::new("character_maximum_length")),
                    Alias::new(self.dialect.integer_type()),
                ),
                Alias::new("character_maximum_length"),
            )
            .from(view("columns"))
            .and_where(Expr::col(Alias::new("table_name")).eq(table))
            .and_where(self.in_schema(Alias::new("table_schema")))
            .order_by(Alias::new("ordinal_position"), Order::Asc)
            .to_owned();

        let rows = ColumnRow::find_by_statement(self.build(&query))
            .all(self.db)
            .await
            .map_err(|source| GenError::ColumnQuery {
                table: table.to_string(),
                source,
            })?;
        Ok(rows
            .into_iter()
            .map(|row| Column {
                name: row.column_name,
                declared_type: row.data_type,
                max_length: row.character_maximum_length,
            })
            .collect())
    }

    /// Whether a sequence named after `table` and `column` exists.
    ///
    /// Sequences that do not follow the `<table>_<column>_seq` convention are
    /// not found.
    pub async fn has_sequence(&self, table: &str, column: &str) -> GenResult<bool> {
        let sequence = sequence_name(table, column);
        let query = Query::select()
            .expr_as(self.text(Alias::new("sequence_name")), Alias::new("sequence_name"))
            .from(view("sequences"))
            .and_where(Expr::col(Alias::new("sequence_name")).eq(sequence.as_str()))
            .and_where(self.in_schema(Alias::new("sequence_schema")))
            .limit(1)
            .to_owned();

        match SequenceRow::find_by_statement(self.build(&query))
            .one(self.db)
            .await
        {
            Ok(row) => Ok(row.is_some_and(|row| row.sequence_name == sequence)),
            Err(source) => Err(GenError::SequenceQuery { sequence, source }),
        }
    }

    fn build(&self, query: &SelectStatement) -> Statement {
        self.dialect.backend().build(query)
    }

    fn in_schema(&self, column: impl IntoColumnRef) -> SimpleExpr {
        let schema = match &self.schema {
            Some(schema) => Expr::val(schema.as_str()).into(),
            None => self.dialect.default_schema(),
        };
        Expr::col(column).eq(schema)
    }

    // information_schema columns are domain types; cast them so every driver
    // decodes them as plain strings.
    fn text(&self, column: impl IntoColumnRef) -> FunctionCall {
        Func::cast_as(Expr::col(column), Alias::new(self.dialect.text_type()))
    }
}

fn view(name: &str) -> (Alias, Alias) {
    (Alias::new(INFORMATION_SCHEMA), Alias::new(name))
}

fn qualified(table: &str, column: &str) -> (Alias, Alias) {
    (Alias::new(table), Alias::new(column))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value};

    use super::Catalog;
    use crate::{db::Dialect, error::GenError, model::Column};

    fn row(pairs: &[(&'static str, Value)]) -> BTreeMap<&'static str, Value> {
        pairs.iter().cloned().collect()
    }

    fn text(value: &str) -> Value {
        Value::from(value.to_string())
    }

    #[tokio::test]
    async fn lists_tables_in_catalog_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(&[("table_name", text("users"))]),
                row(&[("table_name", text("audit_log"))]),
                row(&[("table_name", text("accounts"))]),
            ]])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let tables = catalog.list_tables().await.expect("listing should succeed");

        assert_eq!(tables, ["users", "audit_log", "accounts"]);
    }

    #[tokio::test]
    async fn list_tables_failure_is_schema_enumeration_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("permission denied".to_string())])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let err = catalog.list_tables().await.expect_err("listing should fail");

        assert!(matches!(err, GenError::SchemaEnumeration(_)));
    }

    #[tokio::test]
    async fn primary_keys_keep_ordinal_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(&[("column_name", text("tenant_id"))]),
                row(&[("column_name", text("id"))]),
            ]])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let keys = catalog
            .primary_keys("memberships")
            .await
            .expect("query should succeed");

        assert_eq!(keys.columns(), ["tenant_id", "id"]);
    }

    #[tokio::test]
    async fn table_without_primary_key_yields_empty_set() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let keys = catalog.primary_keys("logs").await.expect("query should succeed");

        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn reads_columns_with_nullable_length() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(&[
                    ("column_name", text("id")),
                    ("data_type", text("integer")),
                    ("character_maximum_length", Value::BigInt(None)),
                ]),
                row(&[
                    ("column_name", text("email")),
                    ("data_type", text("character varying")),
                    ("character_maximum_length", Value::BigInt(Some(255))),
                ]),
            ]])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let columns = catalog.columns("users").await.expect("query should succeed");

        assert_eq!(
            columns,
            [
                Column {
                    name: "id".to_string(),
                    declared_type: "integer".to_string(),
                    max_length: None,
                },
                Column {
                    name: "email".to_string(),
                    declared_type: "character varying".to_string(),
                    max_length: Some(255),
                },
            ]
        );
    }

    #[tokio::test]
    async fn column_failure_names_the_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation missing".to_string())])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let err = catalog.columns("ghost").await.expect_err("query should fail");

        match err {
            GenError::ColumnQuery { table, .. } => assert_eq!(table, "ghost"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn finds_sequence_by_conventional_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![row(&[("sequence_name", text("users_id_seq"))])],
                Vec::new(),
            ])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        assert!(catalog.has_sequence("users", "id").await.expect("lookup should succeed"));
        assert!(!catalog.has_sequence("users", "email").await.expect("lookup should succeed"));
    }

    #[tokio::test]
    async fn sequence_lookup_failure_reports_candidate_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("no such view".to_string())])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "public");

        let err = catalog
            .has_sequence("users", "id")
            .await
            .expect_err("lookup should fail");

        match err {
            GenError::SequenceQuery { sequence, .. } => assert_eq!(sequence, "users_id_seq"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn queries_bind_table_and_schema_as_parameters() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::Postgres, "inventory");

        catalog.columns("items").await.expect("query should succeed");

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("$1"));
        assert!(statement.contains("items"));
        assert!(statement.contains("inventory"));
    }

    #[tokio::test]
    async fn mysql_reads_connected_database_when_no_schema_is_set() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([
                vec![row(&[("table_name", text("orders"))])],
                vec![row(&[
                    ("column_name", text("note")),
                    ("data_type", text("varchar")),
                    ("character_maximum_length", Value::BigInt(Some(80))),
                ])],
            ])
            .into_connection();
        let catalog = Catalog::with_schema(&db, Dialect::MySql, None);

        let tables = catalog.list_tables().await.expect("listing should succeed");
        let columns = catalog.columns("orders").await.expect("query should succeed");

        assert_eq!(tables, ["orders"]);
        assert_eq!(columns[0].max_length, Some(80));
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
        let listing = format!("{:?}", log[0]);
        assert!(listing.contains("`table_schema` = DATABASE()"));
        assert!(listing.contains("CAST(`table_name` AS char)"));
        assert!(!listing.contains("public"));
        let reading = format!("{:?}", log[1]);
        assert!(reading.contains("`table_name` = ?"));
        assert!(reading.contains("CAST(`character_maximum_length` AS signed)"));
        assert!(!reading.contains("$1"));
    }

    #[tokio::test]
    async fn postgres_reads_public_when_no_schema_is_set() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let catalog = Catalog::with_schema(&db, Dialect::Postgres, None);

        catalog.list_tables().await.expect("listing should succeed");

        let statement = format!("{:?}", db.into_transaction_log()[0]);
        assert!(statement.contains("$1"));
        assert!(statement.contains("public"));
        assert!(!statement.contains("DATABASE()"));
    }

    #[tokio::test]
    async fn explicit_schema_is_bound_for_mysql() {
        let db = MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let catalog = Catalog::new(&db, Dialect::MySql, "shop");

        catalog.primary_keys("orders").await.expect("query should succeed");

        let statement = format!("{:?}", db.into_transaction_log()[0]);
        assert!(statement.contains("`t`.`table_schema` = ?"));
        assert!(statement.contains("shop"));
        assert!(!statement.contains("DATABASE()"));
    }
}
