//! Parse CSV text into a document.

use tracing::{debug, trace};

use super::CsvFormat;
use super::tokenizer::{split_fields, split_plain};
use crate::error::{CsvError, Result};
use crate::model::{Cell, Document, Row};

/// Decode CSV text.
///
/// The first non-empty line holds the headers; every further non-empty line
/// is one row. Decoding is lenient: a row with fewer fields than headers gets
/// no cells for the missing columns, and surplus fields are dropped. The
/// format must pass [`CsvFormat::validate`]; the resulting document is not
/// validated.
pub fn decode(text: &str, format: &CsvFormat) -> Result<Document> {
    format.validate()?;
    let mut lines = text.split(['\r', '\n']).filter(|line| !line.is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| CsvError::EmptyData("No header line found".to_string()))?;
    let headers: Vec<String> = split_plain(header_line, format.delimiter)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut doc = Document::with_headers(headers)?;
    for (index, line) in lines.enumerate() {
        trace!(row = index, line, "decoding row");
        let row = decode_row(doc.headers(), line, index, format);
        doc.push_row(row);
    }

    debug!(
        columns = doc.column_count(),
        rows = doc.row_count(),
        bytes = text.len(),
        "decoded CSV document"
    );
    Ok(doc)
}

fn decode_row(headers: &[String], line: &str, index: usize, format: &CsvFormat) -> Row {
    let fields = split_fields(line, format.delimiter, format.quote);
    if fields.len() != headers.len() {
        debug!(
            row = index,
            fields = fields.len(),
            headers = headers.len(),
            "row field count differs from header count"
        );
    }

    headers
        .iter()
        .zip(fields)
        .map(|(header, field)| Cell::new(header.clone(), field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_default(text: &str) -> Document {
        decode(text, &CsvFormat::default()).unwrap()
    }

    #[test]
    fn test_decode_basic() {
        let doc = decode_default("A,B\n1,2\n3,4\n");
        assert_eq!(doc.headers(), ["A", "B"]);
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.rows()[1].cell("b").unwrap().text(), "4");
        assert!(doc.validate());
    }

    #[test]
    fn test_decode_crlf_and_blank_lines() {
        let doc = decode_default("A,B\r\n1,2\r\n\r\n3,4\r\n\r\n");
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.rows()[0].cell("A").unwrap().text(), "1");
    }

    #[test]
    fn test_headers_are_trimmed() {
        let doc = decode_default(" Header 1 ,Header 2\t\nx,y\n");
        assert_eq!(doc.headers(), ["Header 1", "Header 2"]);
    }

    #[test]
    fn test_headers_only() {
        let doc = decode_default("Header 1,Header 2,Header 3\n");
        assert_eq!(doc.column_count(), 3);
        assert_eq!(doc.row_count(), 0);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(
            decode("", &CsvFormat::default()),
            Err(CsvError::EmptyData(_))
        ));
        assert!(matches!(
            decode("\r\n\n", &CsvFormat::default()),
            Err(CsvError::EmptyData(_))
        ));
    }

    #[test]
    fn test_quoted_fields_are_unescaped() {
        let doc = decode_default("Address,Note\n\"9 Park Grove, Bristol\",\"say \"\"hi\"\"\"\n");
        let row = &doc.rows()[0];
        assert_eq!(row.cell("Address").unwrap().text(), "9 Park Grove, Bristol");
        assert_eq!(row.cell("Note").unwrap().text(), "say \"hi\"");
    }

    #[test]
    fn test_short_rows_have_absent_cells() {
        let doc = decode_default("A,B,C\n1\n");
        let row = &doc.rows()[0];
        assert_eq!(row.len(), 1);
        assert!(row.cell("B").is_none());
        assert!(doc.validate());
    }

    #[test]
    fn test_long_rows_drop_surplus_fields() {
        let doc = decode_default("A,B\n1,2,3,4\n");
        assert_eq!(doc.rows()[0].len(), 2);
        assert_eq!(doc.rows()[0].cell("B").unwrap().text(), "2");
    }

    #[test]
    fn test_row_values_are_not_trimmed() {
        let doc = decode_default("A,B\n  x , y\n");
        assert_eq!(doc.rows()[0].cell("A").unwrap().text(), "  x ");
    }

    #[test]
    fn test_custom_delimiter() {
        let format = CsvFormat::default().with_delimiter(';');
        let doc = decode("A;B\n\"1;5\";2\n", &format).unwrap();
        assert_eq!(doc.rows()[0].cell("A").unwrap().text(), "1;5");
    }

    #[test]
    fn test_unusable_format_is_rejected() {
        let clashing = CsvFormat::default().with_delimiter('"');
        assert!(matches!(
            decode("A\"B\n\"x\"\"y\"\"z\n", &clashing),
            Err(CsvError::Config(_))
        ));

        let line_break = CsvFormat::default().with_quote('\r');
        assert!(matches!(
            decode("A,B\n1,2\n", &line_break),
            Err(CsvError::Config(_))
        ));
    }
}
