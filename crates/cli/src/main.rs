//! Graphphile CLI - Export and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Export products as CSV to stdout
//! gp-cli export products
//!
//! # Export customers to a file
//! gp-cli export customers --output customers.csv
//!
//! # Summarize a saved cart
//! gp-cli cart inspect cart.json
//! ```
//!
//! # Commands
//!
//! - `export` - Write the products, orders or customers dataset as CSV
//! - `cart inspect` - Print the lines and totals of a saved cart
//!
//! Logs go to stderr so CSV on stdout stays clean. `RUST_LOG` controls the
//! level (default `graphphile_cli=info`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graphphile_admin::export::Dataset;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gp-cli")]
#[command(author, version, about = "Graphphile CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a dataset as CSV
    Export {
        /// Dataset to export (`products`, `orders`, `customers`)
        dataset: Dataset,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Work with saved carts
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Summarize a saved cart JSON file
    Inspect {
        /// Path to the cart JSON
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "graphphile_cli=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Export { dataset, output } => {
            commands::export::run(dataset, output.as_deref())?;
        }
        Commands::Cart { action } => match action {
            CartAction::Inspect { file } => {
                let summary = commands::cart::inspect(&file)?;
                io::stdout().lock().write_all(summary.as_bytes())?;
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_with_output() {
        let cli = Cli::try_parse_from(["gp-cli", "export", "orders", "-o", "out.csv"]).unwrap();
        match cli.command {
            Commands::Export { dataset, output } => {
                assert_eq!(dataset, Dataset::Orders);
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            Commands::Cart { .. } => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_dataset() {
        assert!(Cli::try_parse_from(["gp-cli", "export", "invoices"]).is_err());
    }
}
