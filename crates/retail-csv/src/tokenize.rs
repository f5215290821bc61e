//! Hand-rolled splitter for one physical CSV line.
//!
//! The grammar is deliberately small: fields are separated by commas, a
//! double quote toggles quoted mode (and is consumed), and commas inside
//! quotes belong to the field. Each field is whitespace-trimmed after
//! extraction. Doubled quotes are not an escape, and a record never spans
//! physical lines - callers must treat multi-line quoted fields as
//! unsupported.

/// Split one physical line into trimmed fields.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
