use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::{
    config::{GeneratorConfig, configs::parse_table_list},
    db::Dialect,
};

const ABOUT: &str = "Read a schema and generate Structable structs.

Connects to the database, reads the table definitions from its catalog and
writes one Go struct per table.";

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = ABOUT)]
pub struct Cli {
    /// The SQL driver to use
    #[arg(short, long, value_enum)]
    pub driver: Option<Dialect>,
    /// The database connection URL. Environment variables are expanded.
    #[arg(short, long)]
    pub connection: Option<String>,
    /// Tables to generate, comma separated. Defaults to every table of the schema.
    #[arg(short, long)]
    pub tables: Option<String>,
    /// Schema to read tables from. Defaults to `public` on Postgres and the
    /// connected database on MySQL.
    #[arg(short, long)]
    pub schema: Option<String>,
    /// Package name of the generated file
    #[arg(short, long)]
    pub package: Option<String>,
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Flags take precedence over environment configuration.
    pub fn apply(&self, cfg: &mut GeneratorConfig) {
        if let Some(driver) = self.driver {
            cfg.database.driver = driver;
        }
        if let Some(connection) = &self.connection {
            cfg.database.url = connection.clone();
        }
        if let Some(tables) = &self.tables {
            cfg.generate.tables = parse_table_list(tables);
        }
        if let Some(schema) = &self.schema {
            cfg.generate.schema = Some(schema.clone());
        }
        if let Some(package) = &self.package {
            cfg.generate.package = package.clone();
        }
    }
}

/// Opens the sink generated code is written to.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
