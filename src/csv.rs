//! Delimited Text Scanner
//!
//! Single-pass character scanner for the published guest list export:
//! comma-separated fields, `"`-quoted values with `""`-escaped embedded
//! quotes, `\n` or `\r\n` row separators, optional leading byte-order mark.
//!
//! The scanner keeps one mode flag (inside/outside a quoted field).
//! Carriage returns are discarded outright and rows whose every field
//! trims to empty are dropped.

/// Parse raw delimited text into rows of fields.
///
/// Fields are returned untrimmed; trimming is the record layer's concern.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let input = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        // Doubled quote collapses to one literal quote
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '\r' => {}
                _ => field.push(ch),
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(ch),
            }
        }
    }

    row.push(field);
    rows.push(row);

    rows.retain(|r| r.iter().any(|value| !value.trim().is_empty()));
    rows
}
