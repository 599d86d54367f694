use std::fmt;

/// Catalog type names the mapper recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    SmallInt,
    SmallSerial,
    Integer,
    Serial,
    BigInt,
    BigSerial,
    Real,
    DoublePrecision,
    Money,
    Numeric,
    Text,
    Varchar,
    Char,
    Uuid,
    Bytea,
    Boolean,
    Date,
    Time,
    Timestamp,
    Interval,
}

/// Field types of the generated Go structs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int16,
    Int32,
    Int,
    Float32,
    Float64,
    String,
    Bytes,
    Bool,
    Time,
    Duration,
}

/// Every spelling the catalog may report, keyed to its `SqlType`.
pub const CATALOG_TYPE_NAMES: &[(&str, SqlType)] = &[
    ("smallint", SqlType::SmallInt),
    ("smallserial", SqlType::SmallSerial),
    ("integer", SqlType::Integer),
    ("int", SqlType::Integer),
    ("serial", SqlType::Serial),
    ("bigint", SqlType::BigInt),
    ("bigserial", SqlType::BigSerial),
    ("real", SqlType::Real),
    ("float", SqlType::Real),
    ("double precision", SqlType::DoublePrecision),
    ("double", SqlType::DoublePrecision),
    ("money", SqlType::Money),
    ("numeric", SqlType::Numeric),
    ("decimal", SqlType::Numeric),
    ("text", SqlType::Text),
    ("varchar", SqlType::Varchar),
    ("character varying", SqlType::Varchar),
    ("char", SqlType::Char),
    ("character", SqlType::Char),
    ("uuid", SqlType::Uuid),
    ("bytea", SqlType::Bytea),
    ("blob", SqlType::Bytea),
    ("boolean", SqlType::Boolean),
    ("date", SqlType::Date),
    ("time", SqlType::Time),
    ("time without time zone", SqlType::Time),
    ("time with time zone", SqlType::Time),
    ("timetz", SqlType::Time),
    ("timestamp", SqlType::Timestamp),
    ("timestamp without time zone", SqlType::Timestamp),
    ("timestamp with time zone", SqlType::Timestamp),
    ("timestamptz", SqlType::Timestamp),
    ("timezone", SqlType::Timestamp),
    ("timezonetz", SqlType::Timestamp),
    ("datetime", SqlType::Timestamp),
    ("interval", SqlType::Interval),
];

impl SqlType {
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        CATALOG_TYPE_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, sql_type)| *sql_type)
    }

    /// Money and numeric values map to strings to keep base-10 precision.
    pub fn field_type(self) -> FieldType {
        match self {
            SqlType::SmallInt | SqlType::SmallSerial => FieldType::Int16,
            SqlType::Integer | SqlType::Serial => FieldType::Int32,
            SqlType::BigInt | SqlType::BigSerial => FieldType::Int,
            SqlType::Real => FieldType::Float32,
            SqlType::DoublePrecision => FieldType::Float64,
            SqlType::Money | SqlType::Numeric => FieldType::String,
            SqlType::Text | SqlType::Varchar | SqlType::Char | SqlType::Uuid => FieldType::String,
            SqlType::Bytea => FieldType::Bytes,
            SqlType::Boolean => FieldType::Bool,
            SqlType::Date | SqlType::Time | SqlType::Timestamp => FieldType::Time,
            SqlType::Interval => FieldType::Duration,
        }
    }
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Int16 => "int16",
            FieldType::Int32 => "int32",
            FieldType::Int => "int",
            FieldType::Float32 => "float32",
            FieldType::Float64 => "float64",
            FieldType::String => "string",
            FieldType::Bytes => "[]byte",
            FieldType::Bool => "bool",
            FieldType::Time => "time.Time",
            FieldType::Duration => "time.Duration",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a catalog type name to a safe Go representation.
///
/// The goal is not an exact match for every type. Anything unrecognised is
/// carried as `string`.
pub fn map_type(sql_type: &str) -> FieldType {
    SqlType::from_catalog_name(sql_type)
        .map(SqlType::field_type)
        .unwrap_or(FieldType::String)
}

#[cfg(test)]
mod tests {
    use super::{CATALOG_TYPE_NAMES, FieldType, SqlType, map_type};

    #[test]
    fn maps_every_known_catalog_name() {
        let expected = [
            ("smallint", "int16"),
            ("smallserial", "int16"),
            ("integer", "int32"),
            ("int", "int32"),
            ("serial", "int32"),
            ("bigint", "int"),
            ("bigserial", "int"),
            ("real", "float32"),
            ("float", "float32"),
            ("double precision", "float64"),
            ("double", "float64"),
            ("money", "string"),
            ("numeric", "string"),
            ("decimal", "string"),
            ("text", "string"),
            ("varchar", "string"),
            ("character varying", "string"),
            ("char", "string"),
            ("character", "string"),
            ("uuid", "string"),
            ("bytea", "[]byte"),
            ("blob", "[]byte"),
            ("boolean", "bool"),
            ("date", "time.Time"),
            ("time", "time.Time"),
            ("time without time zone", "time.Time"),
            ("time with time zone", "time.Time"),
            ("timetz", "time.Time"),
            ("timestamp", "time.Time"),
            ("timestamp without time zone", "time.Time"),
            ("timestamp with time zone", "time.Time"),
            ("timestamptz", "time.Time"),
            ("timezone", "time.Time"),
            ("timezonetz", "time.Time"),
            ("datetime", "time.Time"),
            ("interval", "time.Duration"),
        ];

        assert_eq!(expected.len(), CATALOG_TYPE_NAMES.len());
        for (name, go_type) in expected {
            assert_eq!(map_type(name).as_str(), go_type, "catalog type {name}");
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        for (index, (name, _)) in CATALOG_TYPE_NAMES.iter().enumerate() {
            assert!(
                CATALOG_TYPE_NAMES[index + 1..]
                    .iter()
                    .all(|(other, _)| other != name),
                "duplicate catalog type {name}"
            );
        }
    }

    #[test]
    fn unknown_types_fall_back_to_string() {
        assert_eq!(map_type("jsonb"), FieldType::String);
        assert_eq!(map_type("tinyint"), FieldType::String);
        assert_eq!(map_type(""), FieldType::String);
        assert_eq!(map_type("INTEGER"), FieldType::String);
    }

    #[test]
    fn bigserial_is_native_int_and_double_is_float64() {
        assert_eq!(map_type("bigserial"), FieldType::Int);
        assert_eq!(map_type("double precision"), FieldType::Float64);
        assert_eq!(SqlType::from_catalog_name("bigserial"), Some(SqlType::BigSerial));
    }
}
