//! Normalize command - decode a file and write it back in canonical form.

use std::path::PathBuf;

use colored::Colorize;
use csvdoc::LineTerminator;
use tracing::info;

use crate::cli::FormatArgs;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    crlf: bool,
    format: FormatArgs,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let line_terminator = if crlf {
        LineTerminator::CrLf
    } else {
        LineTerminator::Lf
    };
    let codec = format.codec(line_terminator)?;
    let doc = codec.decode_file(&file)?;

    match output {
        Some(path) => {
            codec.encode_file(&doc, &path)?;
            info!(input = %file.display(), output = %path.display(), "normalized CSV file");
            if verbose {
                println!(
                    "{} {} row(s) to {}",
                    "Wrote".green().bold(),
                    doc.row_count().to_string().white().bold(),
                    path.display()
                );
            }
        }
        None => print!("{}", codec.encode(&doc)?),
    }

    Ok(())
}
