//! A single header/value pair.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Value;

/// One value under one header within a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    header: String,
    #[serde(default)]
    value: Value,
}

impl Cell {
    /// Create a cell holding a value.
    pub fn new(header: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }

    /// Create a cell with no value.
    pub fn empty(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: Value::Null,
        }
    }

    /// The header this value belongs to.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The typed value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replace the value. The header is fixed at construction.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// The value rendered as field text.
    pub fn text(&self) -> Cow<'_, str> {
        self.value.render()
    }

    /// True when the rendered value is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Consume the cell and return its value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.header, self.value)
    }
}
