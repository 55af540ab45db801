//! # pdftables
//!
//! Client for the [PDFTables](https://pdftables.com) document-conversion API.
//!
//! PDFTables extracts tabular data from PDF documents server-side. This
//! crate wraps its two HTTP operations:
//!
//! * upload a PDF and receive it converted to CSV, XML, or XLSX
//!   ([`Client::convert`]);
//! * query the remaining prepaid page balance ([`Client::get_balance`]).
//!
//! Each call is one synchronous request/response exchange — no retries, no
//! background work. Authentication is the account API key, sent as the
//! `key` query parameter on every request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdftables::{Client, Format};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pdftables::PdfTablesError> {
//!     let client = Client::new(std::env::var("PDFTABLES_API_KEY").unwrap());
//!
//!     println!("{} pages remaining", client.get_balance().await?);
//!
//!     // Writes /docs/report.csv next to the source file.
//!     let out = client.convert("/docs/report.pdf".as_ref(), Format::Csv).await?;
//!     println!("wrote {}", out.display());
//!     Ok(())
//! }
//! ```
//!
//! Source paths for [`Client::convert`] must be absolute — the output file
//! is derived from the source location, and a relative path would tie it to
//! the process working directory instead. Relative paths are rejected with
//! [`PdfTablesError::NonAbsolutePath`].
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdftables` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdftables = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod client;
pub mod error;
pub mod format;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use client::{derive_output_path, Client, ENDPOINT};
pub use error::PdfTablesError;
pub use format::Format;
