//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CsvError, Result};

/// Line terminator written after every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    /// The terminator as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

/// Delimiter, quote character and line terminator used by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvFormat {
    /// Field delimiter (default: ',').
    pub delimiter: char,
    /// Quote/escape character (default: '"').
    pub quote: char,
    /// Line terminator used when encoding (default: LF).
    pub line_terminator: LineTerminator,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            line_terminator: LineTerminator::Lf,
        }
    }
}

impl CsvFormat {
    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote/escape character.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set the line terminator.
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    /// Check that the delimiter and quote can coexist in one line-based record.
    pub fn validate(&self) -> Result<()> {
        if is_line_break(self.delimiter) {
            return Err(CsvError::InvalidDelimiter(format!(
                "{:?} is a line break",
                self.delimiter
            )));
        }
        if is_line_break(self.quote) {
            return Err(CsvError::Config(format!(
                "quote character {:?} is a line break",
                self.quote
            )));
        }
        if self.delimiter == self.quote {
            return Err(CsvError::Config(format!(
                "delimiter and quote character are both {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}
