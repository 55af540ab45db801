//! CLI binary for pdftables.
//!
//! A thin shim over the library crate that maps CLI flags to [`Client`]
//! calls and prints results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdftables::{Client, Format};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Remaining page balance
  pdftables balance

  # Convert to CSV (writes report.csv next to the source file)
  pdftables convert report.pdf --format csv

  # Excel with one sheet per PDF page
  pdftables convert report.pdf --format xlsx-multiple

  # Machine-readable output
  pdftables --json balance

ENVIRONMENT VARIABLES:
  PDFTABLES_API_KEY   Account API key (from https://pdftables.com/pdf-to-excel-api)
  PDFTABLES_HOST      Override the API endpoint (testing/staging)

SETUP:
  1. Set API key:     export PDFTABLES_API_KEY=...
  2. Convert:         pdftables convert document.pdf --format csv
"#;

/// Convert PDF tables to CSV, XML, or XLSX via the PDFTables API.
#[derive(Parser, Debug)]
#[command(
    name = "pdftables",
    version,
    about = "Convert PDF tables to CSV, XML, or XLSX via the PDFTables API",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDFTables account API key.
    #[arg(long, env = "PDFTABLES_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API endpoint.
    #[arg(long, env = "PDFTABLES_HOST", global = true)]
    host: Option<String>,

    /// Output structured JSON instead of plain text.
    #[arg(long, env = "PDFTABLES_JSON", global = true)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFTABLES_VERBOSE", global = true)]
    verbose: bool,

    /// Suppress all output except errors and results.
    #[arg(short, long, env = "PDFTABLES_QUIET", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of prepaid conversion pages remaining.
    Balance,

    /// Convert a PDF; the output file is written next to the source.
    Convert {
        /// Path to the source PDF.
        input: PathBuf,

        /// Output format.
        #[arg(short, long, value_parser = parse_format)]
        format: Format,
    },
}

/// Map `--format` strings through the library's `FromStr`, keeping its
/// "Unsupported format" message in clap's error output.
fn parse_format(s: &str) -> Result<Format, String> {
    s.parse::<Format>().map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct BalanceOutput {
    balance: u64,
}

#[derive(Serialize)]
struct ConvertOutput {
    input: PathBuf,
    output: PathBuf,
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let api_key = cli
        .api_key
        .clone()
        .context("No API key given. Set PDFTABLES_API_KEY or pass --api-key.")?;

    let client = match cli.host {
        Some(ref host) => Client::with_host(api_key, host),
        None => Client::new(api_key),
    };

    match cli.command {
        Command::Balance => {
            let balance = client
                .get_balance()
                .await
                .context("Failed to fetch balance")?;

            if cli.json {
                println!("{}", serde_json::to_string(&BalanceOutput { balance })?);
            } else {
                println!("{balance}");
            }
        }

        Command::Convert { input, format } => {
            // The library requires absolute paths; resolve relative ones
            // here so `pdftables convert report.pdf` just works.
            let input = if input.is_absolute() {
                input
            } else {
                std::fs::canonicalize(&input)
                    .with_context(|| format!("Cannot resolve path '{}'", input.display()))?
            };

            let output = client
                .convert(&input, format)
                .await
                .with_context(|| format!("Failed to convert '{}'", input.display()))?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string(&ConvertOutput {
                        input,
                        output,
                        format
                    })?
                );
            } else {
                println!("{}", output.display());
            }
        }
    }

    Ok(())
}
