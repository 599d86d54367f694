/// Converts a catalog identifier into a Go identifier.
///
/// Underscores, periods and spaces are dropped and start a new word. Any
/// other character that is not a letter or digit, such as `-`, is kept and
/// also starts a new word. The first letter of every word is upper-cased and
/// the rest is kept as written, so `goose_db_version` becomes
/// `GooseDbVersion`, `userID` stays `UserID` and `foo-bar` becomes `Foo-Bar`.
pub fn normalize(identifier: &str) -> String {
    let mut name = String::with_capacity(identifier.len());
    let mut word_start = true;
    for c in identifier.chars() {
        if matches!(c, '_' | '.') || c.is_whitespace() {
            word_start = true;
            continue;
        }
        name.push(if word_start { title_case(c) } else { c });
        word_start = !c.is_alphanumeric();
    }
    name
}

// Letters without a single-character upper-case form, like `ß`, stay as they are.
fn title_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(first), None) => first,
        _ => c,
    }
}
