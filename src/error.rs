//! Error types for the pdftables library.
//!
//! The upstream service reports every failure the same way — an error body
//! and a non-2xx status — so historically clients collapsed everything into
//! a single message-plus-sentinel-code value. This crate keeps the
//! message-based contract (the raw response body is always the message of an
//! API failure) but tags each failure mode as its own variant so callers can
//! branch without string matching.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdftables library.
#[derive(Debug, Error)]
pub enum PdfTablesError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Convert was given a relative path.
    ///
    /// The output file is written next to the source file, so a relative
    /// path would derive an output location relative to the process working
    /// directory rather than the document. Rejected up front, before any
    /// file or network I/O.
    #[error("Input path must be absolute: '{path}'\nConvert writes its output next to the source file; resolve the path first (e.g. std::fs::canonicalize).", path = .path.display())]
    NonAbsolutePath { path: PathBuf },

    /// Source PDF could not be opened or read.
    #[error("Failed to read source file '{path}': {source}", path = .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Transport errors ──────────────────────────────────────────────────
    /// Request construction, connection, or body-read failure.
    #[error("Request failed: {reason}")]
    Request { reason: String },

    // ── Service errors ────────────────────────────────────────────────────
    /// The service answered with a non-2xx status.
    ///
    /// `message` is the raw response body text, unedited — the service puts
    /// its human-readable explanation there ("Insufficient balance", etc.).
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The balance endpoint returned 2xx but the body is not an integer.
    #[error("Balance response is not an integer: {body:?}")]
    InvalidBalance {
        body: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A format string did not name one of the supported output formats.
    #[error("Unsupported format: '{value}' (expected csv, xml, xlsx-single, or xlsx-multiple)")]
    UnsupportedFormat { value: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create, write, or sync the converted output file.
    #[error("Failed to write output file '{path}': {source}", path = .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PdfTablesError {
    /// Wrap a reqwest failure, keeping its display form as the reason.
    pub(crate) fn request(err: reqwest::Error) -> Self {
        PdfTablesError::Request {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_is_raw_body() {
        let e = PdfTablesError::Api {
            status: 402,
            message: "Insufficient balance".into(),
        };
        assert_eq!(e.to_string(), "Insufficient balance");
    }

    #[test]
    fn unsupported_format_display() {
        let e = PdfTablesError::UnsupportedFormat {
            value: "docx".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("Unsupported format"), "got: {msg}");
        assert!(msg.contains("docx"));
    }

    #[test]
    fn non_absolute_path_display() {
        let e = PdfTablesError::NonAbsolutePath {
            path: PathBuf::from("docs/report.pdf"),
        };
        assert!(e.to_string().contains("docs/report.pdf"));
    }

    #[test]
    fn invalid_balance_keeps_body() {
        let source = "abc".parse::<u64>().unwrap_err();
        let e = PdfTablesError::InvalidBalance {
            body: "abc".into(),
            source,
        };
        assert!(e.to_string().contains("abc"));
    }
}
