/// Combined length budget of the table and column parts of a sequence name.
///
/// Together with the `_` separator and the `_seq` suffix this stays within
/// the 63 byte identifier limit of Postgres.
pub const SEQUENCE_NAME_BUDGET: usize = 58;
pub const TABLE_PART_LIMIT: usize = 29;

/// Name of the sequence a `serial` column of `table` would be backed by.
pub fn sequence_name(table: &str, column: &str) -> String {
    let table_part = clip(table, TABLE_PART_LIMIT);
    let column_part = clip(column, SEQUENCE_NAME_BUDGET - table_part.len());
    format!("{table_part}_{column_part}_seq")
}

fn clip(identifier: &str, max_len: usize) -> &str {
    if identifier.len() <= max_len {
        return identifier;
    }
    let mut end = max_len;
    while !identifier.is_char_boundary(end) {
        end -= 1;
    }
    &identifier[..end]
}
