//! Example: Decode a CSV file and print what csvdoc sees.
//!
//! Usage:
//!   cargo run --example inspect -- <file_path>
//!
//! Example:
//!   cargo run --example inspect -- addresses.csv

use std::env;
use std::path::Path;

fn main() -> csvdoc::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example inspect -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example inspect -- addresses.csv");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("CSV document: {}", file_path);
    println!("{}", separator);
    println!();

    let doc = csvdoc::from_file(path)?;

    println!("## Headers ({} columns)", doc.column_count());
    for header in doc.headers() {
        println!("  {}", header);
    }
    println!();

    println!("## Rows ({} total)", doc.row_count());
    for (i, row) in doc.rows().iter().enumerate() {
        let marker = if row.is_empty() { " (blank)" } else { "" };
        println!("  {:>4}. {}{}", i + 1, row, marker);
    }
    println!();

    println!("## Summary");
    println!("  Valid: {}", doc.validate());
    println!();
    println!("{}", separator);

    Ok(())
}
