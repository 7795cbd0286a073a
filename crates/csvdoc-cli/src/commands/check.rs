//! Check command - decode a file and report its shape and validity.

use std::path::PathBuf;

use colored::Colorize;
use csvdoc::{Document, LineTerminator};
use serde::Serialize;

use crate::cli::FormatArgs;

/// Summary of a decoded document.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub headers: Vec<String>,
    pub rows: usize,
    pub blank_rows: usize,
    pub short_rows: usize,
    pub valid: bool,
}

impl CheckReport {
    pub fn from_document(file: &str, doc: &Document) -> Self {
        Self {
            file: file.to_string(),
            headers: doc.headers().to_vec(),
            rows: doc.row_count(),
            blank_rows: doc.rows().iter().filter(|r| r.is_empty()).count(),
            short_rows: doc
                .rows()
                .iter()
                .filter(|r| r.len() < doc.column_count())
                .count(),
            valid: doc.validate(),
        }
    }
}

pub fn run(
    file: PathBuf,
    json_output: bool,
    format: FormatArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let codec = format.codec(LineTerminator::Lf)?;
    let doc = codec.decode_file(&file)?;
    let report = CheckReport::from_document(&file.display().to_string(), &doc);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Checking".cyan().bold(), report.file.white());
    println!();
    println!(
        "Columns: {}",
        report.headers.len().to_string().white().bold()
    );
    if verbose {
        for header in &report.headers {
            println!("  {} {}", "•".dimmed(), header.cyan());
        }
    }
    println!("Rows:    {}", report.rows.to_string().white().bold());

    if report.blank_rows > 0 {
        println!(
            "{} {} blank row(s)",
            "Note:".yellow(),
            report.blank_rows.to_string().white().bold()
        );
    }
    if report.short_rows > 0 {
        println!(
            "{} {} row(s) have fewer fields than headers",
            "Warning:".yellow().bold(),
            report.short_rows.to_string().white().bold()
        );
    }

    println!();
    if report.valid {
        println!("{} document is valid", "OK:".green().bold());
    } else {
        println!("{} document is invalid", "Invalid:".red().bold());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let doc = csvdoc::from_str("A,B\n1,2\n ,\n3\n").unwrap();
        let report = CheckReport::from_document("t.csv", &doc);

        assert_eq!(report.headers, vec!["A", "B"]);
        assert_eq!(report.rows, 3);
        assert_eq!(report.blank_rows, 1);
        assert_eq!(report.short_rows, 1);
        assert!(report.valid);
    }
}
