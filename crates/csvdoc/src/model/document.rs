//! The tabular document: headers plus rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Row, Value};
use crate::error::{CsvError, Result};

/// Headers and rows, built up through fluent append-only operations.
///
/// Every mutation returns `Result<&mut Document>` so calls chain with `?`:
///
/// ```
/// use csvdoc::Document;
///
/// let mut doc = Document::new();
/// doc.add_headers(["Column 1", "Column 2", "TOTAL"])?
///     .add_row([10, 20, 30])?
///     .add_row([11, 21, 31])?;
///
/// assert_eq!(doc.row_count(), 2);
/// assert!(doc.validate());
/// # Ok::<(), csvdoc::CsvError>(())
/// ```
///
/// Headers must be added before rows: each row is checked against the headers
/// as they stand when the row is added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given headers.
    pub fn with_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self::new();
        doc.add_headers(headers)?;
        Ok(doc)
    }

    /// Column headers in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of headers.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows (excluding the header line).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append headers in the order given.
    pub fn add_headers<I, S>(&mut self, headers: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(CsvError::at_least_one("headers"));
        }
        self.headers.extend(headers);
        Ok(self)
    }

    /// Append a row, pairing each value with the header at the same position.
    pub fn add_row<I, V>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let row = self.build_row(values)?;
        self.rows.push(row);
        Ok(self)
    }

    /// Append several rows. Fails on an empty batch.
    ///
    /// Accepts value arrays as well as existing rows; a [`Row`] passed by
    /// reference is copied cell value by cell value and re-paired with the
    /// current headers.
    pub fn add_rows<R, I, V>(&mut self, rows: R) -> Result<&mut Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let built = self.build_rows(rows)?;
        if built.is_empty() {
            return Err(CsvError::at_least_one("rows"));
        }
        self.rows.extend(built);
        Ok(self)
    }

    /// Append several rows if there are any. An empty batch is a no-op.
    pub fn add_rows_if_any<R, I, V>(&mut self, rows: R) -> Result<&mut Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let built = self.build_rows(rows)?;
        self.rows.extend(built);
        Ok(self)
    }

    /// Append a pre-built row as is, without checking it against the headers.
    pub fn push_row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    /// True iff every cell of every row has a header present in [`Document::headers`].
    pub fn validate(&self) -> bool {
        self.rows
            .iter()
            .flat_map(Row::iter)
            .all(|cell| self.headers.iter().any(|h| h == cell.header()))
    }

    fn build_row<I, V>(&self, values: I) -> Result<Row>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(CsvError::at_least_one("row_values"));
        }
        if values.len() != self.headers.len() {
            return Err(CsvError::Shape {
                headers: self.headers.len(),
                values: values.len(),
            });
        }

        Ok(self
            .headers
            .iter()
            .zip(values)
            .map(|(header, value)| Cell::new(header.clone(), value))
            .collect())
    }

    // All rows are built before any is appended, so a failing batch leaves
    // the document untouched.
    fn build_rows<R, I, V>(&self, rows: R) -> Result<Vec<Row>>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        rows.into_iter().map(|values| self.build_row(values)).collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | ", self.headers.join(", "))?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
