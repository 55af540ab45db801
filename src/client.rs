//! The PDFTables API client.
//!
//! Two operations, each a single linear request/response exchange with no
//! retries and no intermediate state:
//!
//! * [`Client::get_balance`] — `GET <host>/remaining?key=…`, plain-text
//!   integer body.
//! * [`Client::convert`] — `POST <host>?key=…&format=…` with a
//!   multipart/form-data body carrying the PDF in a single file field `f`,
//!   converted document in the response body.
//!
//! ## Why split conversion from the file write?
//!
//! `convert` writes the service's response next to the source PDF, which is
//! convenient but hard to test and occasionally not what a caller wants
//! (piping to stdout, uploading elsewhere). [`Client::convert_to_bytes`] is
//! the effect-free core — upload, status check, body — and `convert` wires
//! it to the filesystem. Both return exactly the bytes the service sent;
//! nothing is touched on disk unless the exchange succeeded.

use crate::error::PdfTablesError;
use crate::format::Format;
use reqwest::multipart;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Production endpoint for the PDFTables API.
pub const ENDPOINT: &str = "https://pdftables.com/api";

/// A configured PDFTables API client.
///
/// Holds the API key and target host; immutable after construction and
/// cheap to share across tasks (the underlying HTTP transport pools
/// connections internally).
///
/// # Example
/// ```rust,no_run
/// use pdftables::{Client, Format};
///
/// #[tokio::main]
/// async fn main() -> Result<(), pdftables::PdfTablesError> {
///     let client = Client::new(std::env::var("PDFTABLES_API_KEY").unwrap());
///     let balance = client.get_balance().await?;
///     println!("{balance} pages remaining");
///     let out = client.convert("/docs/report.pdf".as_ref(), Format::Csv).await?;
///     println!("wrote {}", out.display());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    api_key: String,
    host: String,
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .finish()
    }
}

impl Client {
    /// Create a client pointing at the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_host(api_key, ENDPOINT)
    }

    /// Create a client with an alternate host.
    ///
    /// Intended for tests and staging environments; everything else behaves
    /// exactly as with [`Client::new`].
    pub fn with_host(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The host this client sends requests to.
    pub fn host(&self) -> &str {
        &self.host
    }

    // ── Balance ───────────────────────────────────────────────────────────

    /// Fetch the number of prepaid conversion pages remaining on the account.
    ///
    /// The service answers with the literal decimal balance, possibly
    /// followed by a newline, which is trimmed before parsing.
    ///
    /// # Errors
    /// * [`PdfTablesError::Request`] — connection or body-read failure.
    /// * [`PdfTablesError::Api`] — non-2xx status; the message is the raw
    ///   response body.
    /// * [`PdfTablesError::InvalidBalance`] — 2xx body that is not an integer.
    pub async fn get_balance(&self) -> Result<u64, PdfTablesError> {
        let url = format!("{}/remaining", self.host);
        debug!(url = %url, "requesting balance");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(PdfTablesError::request)?;

        let status = res.status();
        let body = res.text().await.map_err(PdfTablesError::request)?;

        if !status.is_success() {
            return Err(PdfTablesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let trimmed = body.trim();
        let balance = trimmed
            .parse::<u64>()
            .map_err(|source| PdfTablesError::InvalidBalance {
                body: trimmed.to_string(),
                source,
            })?;

        debug!(balance, "balance retrieved");
        Ok(balance)
    }

    // ── Conversion ────────────────────────────────────────────────────────

    /// Convert a PDF and return the converted document bytes.
    ///
    /// This is the effect-free core of [`Client::convert`]: it uploads the
    /// file and returns the response body without touching the filesystem
    /// beyond reading the source.
    ///
    /// # Errors
    /// * [`PdfTablesError::NonAbsolutePath`] — `pdf` is not absolute.
    /// * [`PdfTablesError::FileRead`] — the source could not be read.
    /// * [`PdfTablesError::Request`] — connection or body-read failure.
    /// * [`PdfTablesError::Api`] — non-2xx status; the message is the raw
    ///   response body.
    pub async fn convert_to_bytes(
        &self,
        pdf: &Path,
        format: Format,
    ) -> Result<Vec<u8>, PdfTablesError> {
        if !pdf.is_absolute() {
            return Err(PdfTablesError::NonAbsolutePath {
                path: pdf.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(pdf)
            .await
            .map_err(|source| PdfTablesError::FileRead {
                path: pdf.to_path_buf(),
                source,
            })?;

        // read() succeeded, so the path names a regular file; the fallback
        // name is unreachable in practice.
        let file_name = pdf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        debug!(
            path = %pdf.display(),
            %format,
            size = bytes.len(),
            "uploading PDF for conversion"
        );

        let form = multipart::Form::new().part(
            "f",
            multipart::Part::bytes(bytes).file_name(file_name),
        );

        let res = self
            .http
            .post(&self.host)
            .query(&[("key", self.api_key.as_str()), ("format", format.as_query_param())])
            .multipart(form)
            .send()
            .await
            .map_err(PdfTablesError::request)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.map_err(PdfTablesError::request)?;
            return Err(PdfTablesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = res.bytes().await.map_err(PdfTablesError::request)?;
        debug!(size = body.len(), "conversion response received");
        Ok(body.to_vec())
    }

    /// Convert a PDF and write the result next to the source file.
    ///
    /// The output path is the source directory plus the source base name
    /// with one trailing `.pdf` stripped and the format's extension
    /// appended (see [`derive_output_path`]). An existing file at that path
    /// is truncated and overwritten; the write is flushed to disk before
    /// this function returns. No file is created on any failure.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    /// Everything [`Client::convert_to_bytes`] returns, plus
    /// [`PdfTablesError::OutputWrite`] when the destination cannot be
    /// created, written, or synced.
    pub async fn convert(&self, pdf: &Path, format: Format) -> Result<PathBuf, PdfTablesError> {
        let body = self.convert_to_bytes(pdf, format).await?;

        let out_path = derive_output_path(pdf, format);
        write_output(&out_path, &body).await?;

        info!(
            input = %pdf.display(),
            output = %out_path.display(),
            size = body.len(),
            "conversion written"
        );
        Ok(out_path)
    }
}

/// Compute the output path for a conversion of `pdf` to `format`.
///
/// The file lands in the source directory, named after the source with one
/// trailing literal `.pdf` removed (exact, case-sensitive suffix match — a
/// file named `report.pdf.pdf` becomes `report.pdf.csv`, and `report.pdff`
/// keeps its full name) and the format's extension appended.
pub fn derive_output_path(pdf: &Path, format: Format) -> PathBuf {
    let base = pdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = base.strip_suffix(".pdf").unwrap_or(&base);
    pdf.with_file_name(format!("{stem}.{}", format.extension()))
}

/// Create (or truncate) `path` and write `body`, syncing before close.
async fn write_output(path: &Path, body: &[u8]) -> Result<(), PdfTablesError> {
    let wrap = |source| PdfTablesError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::create(path).await.map_err(wrap)?;
    file.write_all(body).await.map_err(wrap)?;
    file.sync_all().await.map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn output_path_strips_pdf_suffix() {
        assert_eq!(
            derive_output_path(&path("/docs/report.pdf"), Format::Csv),
            path("/docs/report.csv")
        );
        assert_eq!(
            derive_output_path(&path("/docs/report.pdf"), Format::Xml),
            path("/docs/report.xml")
        );
        assert_eq!(
            derive_output_path(&path("/docs/report.pdf"), Format::XlsxSingle),
            path("/docs/report.xlsx")
        );
        assert_eq!(
            derive_output_path(&path("/docs/report.pdf"), Format::XlsxMultiple),
            path("/docs/report.xlsx")
        );
    }

    #[test]
    fn output_path_strips_only_one_suffix() {
        // Exact suffix match: one ".pdf" comes off, no more.
        assert_eq!(
            derive_output_path(&path("/docs/report.pdf.pdf"), Format::Csv),
            path("/docs/report.pdf.csv")
        );
    }

    #[test]
    fn output_path_leaves_near_miss_names_alone() {
        assert_eq!(
            derive_output_path(&path("/docs/report.pdff"), Format::Csv),
            path("/docs/report.pdff.csv")
        );
        // Case-sensitive: ".PDF" is not the suffix we strip.
        assert_eq!(
            derive_output_path(&path("/docs/REPORT.PDF"), Format::Csv),
            path("/docs/REPORT.PDF.csv")
        );
        assert_eq!(
            derive_output_path(&path("/docs/scan"), Format::Xml),
            path("/docs/scan.xml")
        );
    }

    #[test]
    fn output_path_keeps_source_directory() {
        assert_eq!(
            derive_output_path(&path("/a/b/c/deep.pdf"), Format::XlsxSingle),
            path("/a/b/c/deep.xlsx")
        );
    }

    #[tokio::test]
    async fn convert_rejects_relative_path() {
        let client = Client::with_host("k", "http://127.0.0.1:1");
        let err = client
            .convert(Path::new("docs/report.pdf"), Format::Csv)
            .await
            .unwrap_err();
        assert!(matches!(err, PdfTablesError::NonAbsolutePath { .. }));
    }

    #[tokio::test]
    async fn convert_rejects_missing_file_without_network() {
        // Host is unroutable; reaching it would hang, so an immediate
        // FileRead error proves no request was attempted.
        let client = Client::with_host("k", "http://127.0.0.1:1");
        let err = client
            .convert(Path::new("/definitely/not/here.pdf"), Format::Csv)
            .await
            .unwrap_err();
        assert!(matches!(err, PdfTablesError::FileRead { .. }));
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = Client::new("secret-key");
        let dbg = format!("{client:?}");
        assert!(!dbg.contains("secret-key"));
        assert!(dbg.contains("<redacted>"));
    }
}
