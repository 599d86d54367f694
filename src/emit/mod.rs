use std::io::Write;

use askama::Template;

use crate::{
    error::{GenError, GenResult},
    model::{FieldDescription, TableDescription},
};

pub const FIELD_TAG_KEY: &str = "stbl";
pub const TABLE_TAG_KEY: &str = "tablename";

#[derive(Template)]
#[template(path = "header.go", escape = "none")]
struct HeaderTemplate<'a> {
    package: &'a str,
}

#[derive(Template)]
#[template(path = "struct.go", escape = "none")]
struct StructTemplate<'a> {
    struct_name: &'a str,
    table_name: &'a str,
    table_annotation: String,
    fields: Vec<String>,
}

/// Formats a Go struct tag: `` `key:"value"` ``.
pub fn annotate(key: &str, value: &str) -> String {
    format!("`{key}:\"{value}\"`")
}

/// Field declaration line: name, type and `stbl` tag.
pub fn field_line(field: &FieldDescription, annotate: fn(&str, &str) -> String) -> String {
    format!(
        "{} {} {}",
        field.name,
        field.field_type,
        annotate(FIELD_TAG_KEY, &field.tag())
    )
}

/// Formatting helpers handed to the templates.
#[derive(Clone, Copy)]
pub struct Formatters {
    pub annotate: fn(&str, &str) -> String,
    pub field_line: fn(&FieldDescription, fn(&str, &str) -> String) -> String,
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            annotate,
            field_line,
        }
    }
}

#[derive(Clone, Default)]
pub struct Emitter {
    formatters: Formatters,
}

impl Emitter {
    pub fn new(formatters: Formatters) -> Self {
        Self { formatters }
    }

    pub fn render_header(&self, package: &str) -> GenResult<String> {
        HeaderTemplate { package }
            .render()
            .map_err(|source| GenError::Render {
                table: "file header".to_string(),
                source,
            })
    }

    pub fn render(&self, table: &TableDescription) -> GenResult<String> {
        let Formatters {
            annotate,
            field_line,
        } = self.formatters;

        StructTemplate {
            struct_name: &table.struct_name,
            table_name: &table.table_name,
            table_annotation: annotate(TABLE_TAG_KEY, &table.table_name),
            fields: table
                .fields
                .iter()
                .map(|field| field_line(field, annotate))
                .collect(),
        }
        .render()
        .map_err(|source| GenError::Render {
            table: table.table_name.clone(),
            source,
        })
    }

    pub fn write_header<W: Write>(&self, package: &str, out: &mut W) -> GenResult<()> {
        let header = self.render_header(package)?;
        writeln!(out, "{header}")?;
        Ok(())
    }

    pub fn emit<W: Write>(&self, table: &TableDescription, out: &mut W) -> GenResult<()> {
        let rendered = self.render(table)?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }
}
