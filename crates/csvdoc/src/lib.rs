//! csvdoc: in-memory CSV documents with a fluent builder and a quote-aware codec.
//!
//! A [`Document`] holds headers and rows of [`Cell`]s. Documents are built with
//! append-only operations, checked with [`Document::validate`], and converted
//! to and from CSV text, bytes or files by a [`Codec`].
//!
//! # Example
//!
//! ```
//! use csvdoc::Document;
//!
//! let mut doc = Document::new();
//! doc.add_headers(["Name", "Address"])?
//!     .add_row(["Home", "9 Park Grove, Bristol"])?;
//!
//! let text = csvdoc::to_string(&doc)?;
//! assert_eq!(text, "Name,Address\nHome,\"9 Park Grove, Bristol\"\n");
//!
//! let decoded = csvdoc::from_str(&text)?;
//! assert_eq!(
//!     decoded.rows()[0].cell("address").unwrap().text(),
//!     "9 Park Grove, Bristol"
//! );
//! # Ok::<(), csvdoc::CsvError>(())
//! ```
//!
//! # Format limits
//!
//! The codec handles one record per line. Quoted fields may contain the
//! delimiter and doubled quotes but not line breaks, and headers are never
//! quoted.

pub mod codec;
pub mod error;
pub mod model;

use std::path::Path;

pub use codec::{Codec, CsvFormat, LineTerminator};
pub use error::{CsvError, Result};
pub use model::{Cell, Document, Row, Value};

/// Encode a document to text with the default format.
pub fn to_string(doc: &Document) -> Result<String> {
    Codec::new().encode(doc)
}

/// Encode a document to UTF-8 bytes with the default format.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    Codec::new().encode_bytes(doc)
}

/// Encode a document to a file with the default format.
pub fn to_file(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    Codec::new().encode_file(doc, path)
}

/// Decode a document from text with the default format.
pub fn from_str(text: &str) -> Result<Document> {
    Codec::new().decode(text)
}

/// Decode a document from UTF-8 bytes with the default format.
pub fn from_bytes(bytes: &[u8]) -> Result<Document> {
    Codec::new().decode_bytes(bytes)
}

/// Decode a document from a file with the default format.
pub fn from_file(path: impl AsRef<Path>) -> Result<Document> {
    Codec::new().decode_file(path)
}
