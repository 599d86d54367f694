use std::fmt;

use crate::{emit, naming::normalize, types::FieldType};

pub const PRIMARY_KEY_MARKER: &str = "PRIMARY_KEY";
pub const SERIAL_MARKER: &str = "SERIAL";

/// One row of column metadata for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub declared_type: String,
    pub max_length: Option<i64>,
}

/// Primary key column names in key ordinal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryKeySet(Vec<String>);

impl PrimaryKeySet {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|key| key == column)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    pub name: String,
    pub field_type: FieldType,
    pub column: String,
    pub primary_key: bool,
    pub serial: bool,
}

impl FieldDescription {
    /// `serial` is only honoured for primary key columns.
    pub fn new(column: &Column, field_type: FieldType, primary_key: bool, serial: bool) -> Self {
        Self {
            name: normalize(&column.name),
            field_type,
            column: column.name.clone(),
            primary_key,
            serial: primary_key && serial,
        }
    }

    pub fn tag(&self) -> String {
        let mut tag = self.column.clone();
        if self.primary_key {
            tag.push(',');
            tag.push_str(PRIMARY_KEY_MARKER);
            if self.serial {
                tag.push(',');
                tag.push_str(SERIAL_MARKER);
            }
        }
        tag
    }
}

impl fmt::Display for FieldDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&emit::field_line(self, emit::annotate))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescription {
    pub struct_name: String,
    pub table_name: String,
    pub fields: Vec<FieldDescription>,
}

impl TableDescription {
    pub fn new(table_name: &str, fields: Vec<FieldDescription>) -> Self {
        Self {
            struct_name: normalize(table_name),
            table_name: table_name.to_string(),
            fields,
        }
    }
}
