//! CSV encoding and decoding.

mod decoder;
mod encoder;
mod format;
mod tokenizer;

pub use decoder::decode;
pub use encoder::{encode, encode_field};
pub use format::{CsvFormat, LineTerminator};
pub use tokenizer::{split_escaped, split_plain};

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CsvError, Result};
use crate::model::Document;

/// Encoder/decoder bound to one [`CsvFormat`].
#[derive(Debug, Clone, Default)]
pub struct Codec {
    format: CsvFormat,
}

impl Codec {
    /// Create a codec with the default format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec with a custom format.
    pub fn with_format(format: CsvFormat) -> Result<Self> {
        format.validate()?;
        Ok(Self { format })
    }

    /// The format this codec reads and writes.
    pub fn format(&self) -> &CsvFormat {
        &self.format
    }

    /// Encode a document to text.
    pub fn encode(&self, doc: &Document) -> Result<String> {
        encode(doc, &self.format)
    }

    /// Encode a document to UTF-8 bytes.
    pub fn encode_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        self.encode(doc).map(String::into_bytes)
    }

    /// Encode a document and write it to `path`, replacing any existing file.
    ///
    /// Nothing is written if the document fails validation.
    pub fn encode_file(&self, doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = require_path(path.as_ref())?;
        let text = self.encode(doc)?;

        fs::write(path, &text).map_err(|e| CsvError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "wrote CSV file");
        Ok(())
    }

    /// Decode a document from text.
    pub fn decode(&self, text: &str) -> Result<Document> {
        decode(text, &self.format)
    }

    /// Decode a document from UTF-8 bytes.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Document> {
        let text = String::from_utf8(bytes.to_vec())?;
        self.decode(&text)
    }

    /// Read and decode the file at `path`.
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = require_path(path.as_ref())?;
        let bytes = fs::read(path).map_err(|e| CsvError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read CSV file");
        self.decode_bytes(&bytes)
    }
}

impl FromStr for Document {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s, &CsvFormat::default())
    }
}

fn require_path(path: &Path) -> Result<&Path> {
    if path.as_os_str().is_empty() {
        return Err(CsvError::Argument {
            param: "path",
            message: "A file path must be provided.".to_string(),
        });
    }
    Ok(path)
}
