//! csvdoc CLI - inspect and normalize CSV documents.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { file, json, format } => {
            commands::check::run(file, json, format, cli.verbose)
        }

        Commands::Show {
            file,
            json,
            row,
            column,
            format,
        } => commands::show::run(file, json, row, column, format, cli.verbose),

        Commands::Normalize {
            file,
            output,
            crlf,
            format,
        } => commands::normalize::run(file, output, crlf, format, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}
