//! Property-based tests for the csvdoc codec.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p csvdoc --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p csvdoc --test property_tests
//! ```

use proptest::prelude::*;

use csvdoc::codec::{encode_field, split_escaped};
use csvdoc::{Cell, CsvFormat, Document, Row, Value};

// =============================================================================
// Test Strategies
// =============================================================================

/// Header names: no surrounding whitespace, no delimiter, quote or line break.
fn header() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_ .-]{0,12}[A-Za-z0-9_]"
}

/// Field values, biased towards the characters that need quoting.
fn field_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        "[a-z ,\"']{0,20}",
        "[\"]{1,4}",
        "[^\r\n]{0,30}",
    ]
}

/// A valid document with 2-5 columns and up to 20 rows.
fn document() -> impl Strategy<Value = Document> {
    prop::collection::hash_set(header(), 2..6)
        .prop_flat_map(|headers| {
            let headers: Vec<String> = headers.into_iter().collect();
            let width = headers.len();
            let rows = prop::collection::vec(prop::collection::vec(field_value(), width), 0..20);
            (Just(headers), rows)
        })
        .prop_map(|(headers, rows)| {
            let mut doc = Document::with_headers(headers).unwrap();
            doc.add_rows_if_any(rows).unwrap();
            doc
        })
}

fn texts(row: &Row) -> Vec<String> {
    row.iter().map(|c| c.text().into_owned()).collect()
}

// =============================================================================
// Codec Properties
// =============================================================================

proptest! {
    /// Decoding encoded output restores headers, rows and cell text.
    #[test]
    fn prop_round_trip(doc in document()) {
        let text = csvdoc::to_string(&doc).unwrap();
        let decoded = csvdoc::from_str(&text).unwrap();

        prop_assert_eq!(decoded.headers(), doc.headers());
        prop_assert_eq!(decoded.row_count(), doc.row_count());
        for (want, got) in doc.rows().iter().zip(decoded.rows()) {
            prop_assert_eq!(texts(want), texts(got));
        }
        prop_assert!(decoded.validate());
    }

    /// Encoding is deterministic.
    #[test]
    fn prop_encode_deterministic(doc in document()) {
        prop_assert_eq!(csvdoc::to_string(&doc).unwrap(), csvdoc::to_string(&doc).unwrap());
    }

    /// Encoder output is read back identically by the `csv` crate.
    #[test]
    fn prop_csv_crate_agrees(doc in document()) {
        let text = csvdoc::to_string(&doc).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        prop_assert_eq!(&headers[..], doc.headers());

        let records: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        prop_assert_eq!(records.len(), doc.row_count());
        for (record, row) in records.iter().zip(doc.rows()) {
            prop_assert_eq!(record, &texts(row));
        }
    }

    /// A single encoded field always tokenizes back to its value.
    #[test]
    fn prop_field_escape_inverse(value in field_value()) {
        let format = CsvFormat::default();
        let encoded = encode_field(&Value::from(value.as_str()), &format).unwrap().into_owned();
        prop_assert_eq!(split_escaped(&encoded, ',', '"').unwrap(), vec![value]);
    }

    /// The tokenizer never panics and always yields at least one field.
    #[test]
    fn prop_tokenizer_total(line in "[^\r\n]{0,60}") {
        let fields = split_escaped(&line, ',', '"').unwrap();
        prop_assert!(!fields.is_empty());
    }

    /// Fields without quotes split exactly like a plain split.
    #[test]
    fn prop_tokenizer_plain_lines(line in "[a-z ,]{0,40}") {
        let plain: Vec<String> = line.split(',').map(String::from).collect();
        prop_assert_eq!(split_escaped(&line, ',', '"').unwrap(), plain);
    }

    /// Adding a single row with a stray header makes the document invalid,
    /// and encoding then fails.
    #[test]
    fn prop_stray_header_invalidates(doc in document(), stray in "[#@!][a-z]{1,8}") {
        prop_assume!(!doc.headers().contains(&stray));
        let mut doc = doc;
        doc.push_row(Row::from(vec![Cell::new(stray, "x")]));
        prop_assert!(!doc.validate());
        prop_assert!(csvdoc::to_string(&doc).is_err());
    }

    /// Rows built through `add_row` always validate.
    #[test]
    fn prop_built_documents_validate(doc in document()) {
        prop_assert!(doc.validate());
    }
}
