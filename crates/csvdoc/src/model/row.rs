//! An ordered group of cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;

/// One record: cells in column order as authored.
///
/// A row carries no invariant of its own. It may reference headers that a
/// [`Document`](super::Document) does not know about; that is caught by
/// [`Document::validate`](super::Document::validate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// All cells in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when every cell is empty (including a row with no cells).
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Find the first cell whose header matches, ignoring case.
    pub fn cell(&self, header: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| headers_match_ignore_case(c.header(), header))
    }

    /// Mutable variant of [`Row::cell`].
    pub fn cell_mut(&mut self, header: &str) -> Option<&mut Cell> {
        self.cells
            .iter_mut()
            .find(|c| headers_match_ignore_case(c.header(), header))
    }

    /// Find the first cell whose header matches exactly.
    pub(crate) fn cell_exact(&self, header: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.header() == header)
    }
}

fn headers_match_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl IntoIterator for Row {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Row {
        Row::from(vec![
            Cell::new("Header 1", 1),
            Cell::new("Header 2", "two"),
            Cell::new("Straße", "x"),
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let row = sample();
        let exact = row.cell("Header 1").unwrap();
        assert_eq!(row.cell("header 1"), Some(exact));
        assert_eq!(row.cell("HEADER 1"), Some(exact));
        assert_eq!(row.cell("STRASSE"), None);
        assert_eq!(row.cell("STRAßE").map(|c| c.text().into_owned()), Some("x".to_string()));
    }

    #[test]
    fn test_lookup_missing_header() {
        assert!(sample().cell("Header 9").is_none());
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let row = Row::from(vec![Cell::new("a", 1), Cell::new("A", 2)]);
        assert_eq!(row.cell("a").unwrap().text(), "1");
        assert_eq!(row.cell_exact("A").unwrap().text(), "2");
    }

    #[test]
    fn test_is_empty() {
        assert!(Row::new().is_empty());
        assert!(Row::from(vec![Cell::empty("a"), Cell::new("b", "  ")]).is_empty());
        assert!(!sample().is_empty());
    }

    #[test]
    fn test_display() {
        let row = Row::from(vec![Cell::new("a", 1), Cell::new("b", 2)]);
        assert_eq!(row.to_string(), "[a] 1, [b] 2");
    }

    #[test]
    fn test_cell_mut() {
        let mut row = sample();
        row.cell_mut("header 2").unwrap().set_value("changed");
        assert_eq!(row.cell("Header 2").unwrap().text(), "changed");
    }
}
