//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use csvdoc::{Codec, CsvFormat, LineTerminator};

/// csvdoc: inspect and normalize CSV documents
#[derive(Parser)]
#[command(name = "csvdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a file and report its shape and validity
    Check {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print a decoded document, or a single cell
    Show {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the document as JSON
        #[arg(long)]
        json: bool,

        /// Row number (1-based) of the cell to print
        #[arg(long, requires = "column")]
        row: Option<usize>,

        /// Column header of the cell to print (case-insensitive)
        #[arg(long, requires = "row")]
        column: Option<String>,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Decode a file and re-encode it in canonical form
    Normalize {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write CR-LF line endings
        #[arg(long)]
        crlf: bool,

        #[command(flatten)]
        format: FormatArgs,
    },
}

/// Delimiter and quote options shared by every command.
#[derive(Args, Clone, Debug)]
pub struct FormatArgs {
    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Quote/escape character
    #[arg(short, long, default_value_t = '"')]
    pub quote: char,
}

impl FormatArgs {
    /// Build a codec, optionally overriding the line terminator.
    pub fn codec(&self, line_terminator: LineTerminator) -> csvdoc::Result<Codec> {
        Codec::with_format(
            CsvFormat::default()
                .with_delimiter(self.delimiter)
                .with_quote(self.quote)
                .with_line_terminator(line_terminator),
        )
    }
}
