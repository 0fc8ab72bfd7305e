//! Report output types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Localized labels exposed to templates, keyed by label name.
pub type LabelMap = BTreeMap<String, String>;

/// Output representations a report can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    /// HTML text output.
    Html,
    /// CSV text output.
    Csv,
    /// Paginated binary PDF output.
    Pdf,
}

impl OutputFormat {
    /// All supported formats, in capability-listing order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Csv, Self::Pdf];

    /// MIME type of the rendered representation.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Csv => "text/csv",
            Self::Pdf => "application/pdf",
        }
    }

    /// Template path suffix for this format (`{template}/{suffix}`).
    #[must_use]
    pub const fn template_suffix(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// File extension for attachment downloads.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        self.template_suffix()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Html => "HTML",
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    /// Parses a wire format value, case-insensitively. Anything outside
    /// HTML/CSV/PDF fails with [`ReportError::UnsupportedFormat`] before any
    /// template access.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "HTML" => Ok(Self::Html),
            "CSV" => Ok(Self::Csv),
            "PDF" => Ok(Self::Pdf),
            other => Err(ReportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Rendered report payload: text for HTML/CSV, binary for PDF.
///
/// The two are mutually exclusive; consumers match on the discriminant or use
/// the typed accessors on [`ReportOutput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportContent {
    /// Text payload (HTML or CSV).
    Text(String),
    /// Binary payload (PDF).
    Binary(Vec<u8>),
}

/// Result envelope for one rendering request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    /// MIME type identifying the rendered representation.
    pub mime_type: String,
    /// Rendered payload.
    pub content: ReportContent,
}

impl ReportOutput {
    /// Creates a text output.
    #[must_use]
    pub fn text(mime_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            content: ReportContent::Text(content.into()),
        }
    }

    /// Creates a binary output.
    #[must_use]
    pub fn binary(mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            content: ReportContent::Binary(content),
        }
    }

    /// Whether the payload is binary.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self.content, ReportContent::Binary(_))
    }

    /// Text payload accessor.
    ///
    /// # Errors
    ///
    /// Fails with [`ReportError::ContentMismatch`] if the payload is binary.
    pub fn as_text(&self) -> Result<&str, ReportError> {
        match &self.content {
            ReportContent::Text(text) => Ok(text),
            ReportContent::Binary(_) => Err(ReportError::ContentMismatch { expected: "text" }),
        }
    }

    /// Binary payload accessor.
    ///
    /// # Errors
    ///
    /// Fails with [`ReportError::ContentMismatch`] if the payload is text.
    pub fn as_bytes(&self) -> Result<&[u8], ReportError> {
        match &self.content {
            ReportContent::Binary(bytes) => Ok(bytes),
            ReportContent::Text(_) => Err(ReportError::ContentMismatch { expected: "binary" }),
        }
    }
}
