//! Output format selection.
//!
//! The service takes the format as a query parameter and returns the
//! converted document in the response body; the format also decides the
//! extension of the file written next to the source PDF. Both XLSX variants
//! share the `.xlsx` extension — they differ only in how pages map to
//! sheets on the service side.

use crate::error::PdfTablesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Comma-separated values; blank row between pages.
    Csv,
    /// HTML `<table>` markup; `<td>` tags may carry `colspan=` attributes.
    Xml,
    /// Excel workbook with every PDF page on one sheet.
    XlsxSingle,
    /// Excel workbook with one sheet per PDF page.
    XlsxMultiple,
}

impl Format {
    /// The wire value sent as the `format` query parameter.
    pub fn as_query_param(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Xml => "xml",
            Format::XlsxSingle => "xlsx-single",
            Format::XlsxMultiple => "xlsx-multiple",
        }
    }

    /// Extension of the output file (without the leading dot).
    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Xml => "xml",
            Format::XlsxSingle | Format::XlsxMultiple => "xlsx",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param())
    }
}

impl FromStr for Format {
    type Err = PdfTablesError;

    /// Parse one of the four wire values.
    ///
    /// Bare `"xlsx"` is deliberately not accepted: the caller must choose
    /// between single-sheet and multi-sheet output.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Format::Csv),
            "xml" => Ok(Format::Xml),
            "xlsx-single" => Ok(Format::XlsxSingle),
            "xlsx-multiple" => Ok(Format::XlsxMultiple),
            other => Err(PdfTablesError::UnsupportedFormat {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_round_trip() {
        for fmt in [
            Format::Csv,
            Format::Xml,
            Format::XlsxSingle,
            Format::XlsxMultiple,
        ] {
            assert_eq!(fmt.as_query_param().parse::<Format>().unwrap(), fmt);
        }
    }

    #[test]
    fn xlsx_variants_share_extension() {
        assert_eq!(Format::XlsxSingle.extension(), "xlsx");
        assert_eq!(Format::XlsxMultiple.extension(), "xlsx");
        assert_eq!(Format::Csv.extension(), "csv");
        assert_eq!(Format::Xml.extension(), "xml");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "docx".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }

    #[test]
    fn bare_xlsx_is_rejected() {
        assert!("xlsx".parse::<Format>().is_err());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        // The service's query parameter is lowercase; accept exactly that.
        assert!("CSV".parse::<Format>().is_err());
    }
}
