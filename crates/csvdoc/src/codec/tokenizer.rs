//! Escape-aware line splitting.
//!
//! The escape character toggles a "literal" mode in which delimiters are kept
//! as data. This is deliberately simpler than an RFC 4180 state machine: a
//! quote in the middle of a field still toggles, and records never span lines.

use super::CsvFormat;
use crate::error::Result;

/// Split one line into fields, honoring the escape character.
///
/// The delimiter and escape character must form a valid [`CsvFormat`]: they
/// must differ and neither may be a line break. While inside an escaped run, a doubled escape character stands for one
/// literal escape character. The final field is always produced, so an empty
/// line yields one empty field and a trailing delimiter yields a trailing
/// empty field.
pub fn split_escaped(line: &str, delimiter: char, escape: char) -> Result<Vec<String>> {
    CsvFormat::default()
        .with_delimiter(delimiter)
        .with_quote(escape)
        .validate()?;
    Ok(split_fields(line, delimiter, escape))
}

/// [`split_escaped`] for callers that already validated the format.
pub(super) fn split_fields(line: &str, delimiter: char, escape: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut escaping = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == escape {
            if escaping && chars.peek() == Some(&escape) {
                chars.next();
                field.push(escape);
            } else {
                escaping = !escaping;
            }
        } else if c == delimiter && !escaping {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    fields.push(field);
    fields
}

/// Split on the delimiter only, ignoring any quoting.
pub fn split_plain(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).collect()
}
