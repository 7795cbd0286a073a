//! In-memory tabular model.

mod cell;
mod document;
mod row;
mod value;

pub use cell::Cell;
pub use document::Document;
pub use row::Row;
pub use value::{DATE_FORMAT, Value};
