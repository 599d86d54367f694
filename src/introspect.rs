use tracing::{debug, warn};

use crate::{
    db::Catalog,
    error::GenResult,
    model::{FieldDescription, PrimaryKeySet, TableDescription},
    types::map_type,
};

/// Reads one table from the catalog and describes the struct to generate.
///
/// Primary key and sequence detection are best effort: a failing lookup is
/// logged and only costs the table its `PRIMARY_KEY`/`SERIAL` markers. A
/// failing column query is returned to the caller.
pub async fn introspect(catalog: &Catalog<'_>, table: &str) -> GenResult<TableDescription> {
    let keys = match catalog.primary_keys(table).await {
        Ok(keys) => keys,
        Err(err) => {
            warn!(table, "{err}; generating without primary keys");
            PrimaryKeySet::default()
        }
    };

    let columns = catalog.columns(table).await?;
    debug!(table, columns = columns.len(), keys = ?keys.columns(), "read table metadata");

    let mut fields = Vec::with_capacity(columns.len());
    for column in &columns {
        let primary_key = keys.contains(&column.name);
        let serial = primary_key && is_serial(catalog, table, &column.name).await;
        fields.push(FieldDescription::new(
            column,
            map_type(&column.declared_type),
            primary_key,
            serial,
        ));
    }

    Ok(TableDescription::new(table, fields))
}

async fn is_serial(catalog: &Catalog<'_>, table: &str, column: &str) -> bool {
    match catalog.has_sequence(table, column).await {
        Ok(found) => found,
        Err(err) => {
            warn!(table, column, "{err}; not marking column as SERIAL");
            false
        }
    }
}
