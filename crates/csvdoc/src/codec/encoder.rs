//! Render a document as CSV text.

use std::borrow::Cow;

use tracing::debug;

use super::CsvFormat;
use crate::error::{CsvError, Result};
use crate::model::{Document, Row, Value};

/// Encode a document. The document must pass [`Document::validate`] and the
/// format must pass [`CsvFormat::validate`].
pub fn encode(doc: &Document, format: &CsvFormat) -> Result<String> {
    format.validate()?;
    if !doc.validate() {
        return Err(CsvError::InvalidState(
            "Unable to generate CSV output as the definition provided is currently invalid."
                .to_string(),
        ));
    }

    let mut out = String::new();
    write_headers(&mut out, doc, format);
    for row in doc.rows() {
        write_row(&mut out, doc, row, format);
    }

    debug!(
        columns = doc.column_count(),
        rows = doc.row_count(),
        bytes = out.len(),
        "encoded CSV document"
    );
    Ok(out)
}

/// Encode a single value as one field, quoting it when needed.
pub fn encode_field<'a>(value: &'a Value, format: &CsvFormat) -> Result<Cow<'a, str>> {
    format.validate()?;
    Ok(quote_if_needed(value.render(), format))
}

fn write_headers(out: &mut String, doc: &Document, format: &CsvFormat) {
    for (i, header) in doc.headers().iter().enumerate() {
        if i > 0 {
            out.push(format.delimiter);
        }
        out.push_str(header);
    }
    out.push_str(format.line_terminator.as_str());
}

fn write_row(out: &mut String, doc: &Document, row: &Row, format: &CsvFormat) {
    for (i, header) in doc.headers().iter().enumerate() {
        if i > 0 {
            out.push(format.delimiter);
        }
        if let Some(cell) = row.cell_exact(header) {
            out.push_str(&quote_if_needed(cell.text(), format));
        }
    }
    out.push_str(format.line_terminator.as_str());
}

fn quote_if_needed<'a>(text: Cow<'a, str>, format: &CsvFormat) -> Cow<'a, str> {
    if !text.contains(format.delimiter) && !text.contains(format.quote) {
        return text;
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(format.quote);
    for c in text.chars() {
        if c == format.quote {
            quoted.push(format.quote);
        }
        quoted.push(c);
    }
    quoted.push(format.quote);
    Cow::Owned(quoted)
}
