//! Show command - print a decoded document or one of its cells.

use std::path::PathBuf;

use colored::Colorize;
use csvdoc::{Document, LineTerminator};

use crate::cli::FormatArgs;

pub fn run(
    file: PathBuf,
    json_output: bool,
    row: Option<usize>,
    column: Option<String>,
    format: FormatArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let codec = format.codec(LineTerminator::Lf)?;
    let doc = codec.decode_file(&file)?;

    if let (Some(row), Some(column)) = (row, column) {
        println!("{}", lookup(&doc, row, &column)?);
        return Ok(());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", doc.headers().join(" | ").cyan().bold());
    for (i, row) in doc.rows().iter().enumerate() {
        println!("{:>5} {}", (i + 1).to_string().dimmed(), row);
    }
    if verbose {
        println!("{}", summary(&doc).dimmed());
    }

    Ok(())
}

fn summary(doc: &Document) -> String {
    let incomplete = doc
        .rows()
        .iter()
        .filter(|row| row.len() < doc.column_count())
        .count();
    format!(
        "{} row(s), {} column(s), {} incomplete row(s)",
        doc.row_count(),
        doc.column_count(),
        incomplete
    )
}

/// Look up the cell at a 1-based row number under a case-insensitive header.
fn lookup(doc: &Document, row: usize, column: &str) -> Result<String, String> {
    let record = row
        .checked_sub(1)
        .and_then(|index| doc.rows().get(index))
        .ok_or_else(|| format!("Row {} out of range (1-{})", row, doc.row_count()))?;

    record
        .cell(column)
        .map(|cell| cell.text().into_owned())
        .ok_or_else(|| format!("No cell for column '{}' in row {}", column, row))
}
