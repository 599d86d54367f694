use std::io::Write;

use tracing::{debug, info, warn};

use crate::{
    config::{GenerateConfig, GeneratorConfig},
    db::{Catalog, DbProvider, connection},
    emit::Emitter,
    error::GenResult,
    introspect::introspect,
};

/// Outcome of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub emitted: Vec<String>,
    pub skipped: Vec<String>,
}

/// Writes the file header and one struct per table to `out`.
///
/// Tables come from `cfg.tables` when it names any, otherwise from the
/// schema listing. A table whose columns cannot be read is skipped; listing
/// failures and write failures end the run. Output already written stays in
/// `out`.
pub async fn generate<W: Write>(
    catalog: &Catalog<'_>,
    emitter: &Emitter,
    cfg: &GenerateConfig,
    out: &mut W,
) -> GenResult<GenerateReport> {
    emitter.write_header(&cfg.package, out)?;

    let mut tables = cfg.explicit_tables();
    if tables.is_empty() {
        tables = catalog.list_tables().await?;
        debug!(schema = ?catalog.schema(), count = tables.len(), "listed tables");
    }

    let mut report = GenerateReport::default();
    for table in tables {
        let description = match introspect(catalog, &table).await {
            Ok(description) => description,
            Err(err) => {
                warn!("{err}; skipping table");
                report.skipped.push(table);
                continue;
            }
        };

        emitter.emit(&description, out)?;
        debug!(table = %table, fields = description.fields.len(), "emitted struct");
        report.emitted.push(table);
    }
    out.flush()?;

    info!(
        emitted = report.emitted.len(),
        skipped = report.skipped.len(),
        "generation finished"
    );
    Ok(report)
}

/// Connects through `provider`, generates, and closes the connection again
/// whether or not generation succeeded.
pub async fn run<W: Write>(
    provider: &dyn DbProvider,
    cfg: &GeneratorConfig,
    out: &mut W,
) -> GenResult<GenerateReport> {
    let db = connection::open(provider, &cfg.database).await?;
    let catalog = Catalog::with_schema(&db, cfg.database.driver, cfg.generate.schema.clone());

    let result = generate(&catalog, &Emitter::default(), &cfg.generate, out).await;

    connection::close(db).await;
    result
}
