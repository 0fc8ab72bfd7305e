//! Report error types.

use thiserror::Error;

use finreport_shared::AppError;

use crate::pdf::PdfError;
use crate::template::{LabelError, TemplateError};

/// Errors that can occur in the report processing pipeline.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input byte stream is not well-formed statement data.
    #[error("malformed statement input: {0}")]
    MalformedInput(String),

    /// No handler is registered for the requested template name.
    #[error("no report handler found for template: {0}")]
    UnknownTemplate(String),

    /// The requested output format is not one of HTML, CSV, or PDF.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The language code is not a two-letter lowercase ISO code.
    #[error("invalid language code: {0}")]
    InvalidLanguage(String),

    /// No label resource exists for the template/language pair.
    #[error("language file not found for template '{template}' and language '{language}'")]
    LanguageFileNotFound {
        /// Template name.
        template: String,
        /// Two-letter language code.
        language: String,
    },

    /// A required template path did not resolve.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Two handlers claimed the same template name at registration time.
    /// Fatal at startup; the process cannot serve requests.
    #[error("duplicate report handler for template: {0}")]
    DuplicateTemplate(String),

    /// The wrong [`super::ReportContent`] accessor was used.
    #[error("report content is not {expected}")]
    ContentMismatch {
        /// The content kind the accessor expected.
        expected: &'static str,
    },

    /// The external HTML-to-PDF conversion step failed.
    #[error("PDF generation failed: {0}")]
    PdfGeneration(String),

    /// Catch-all wrapping an unexpected internal error, cause preserved.
    #[error("failed to process report: {message}")]
    Processing {
        /// Short, caller-safe message.
        message: String,
        /// Root cause, kept for diagnostics.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ReportError {
    /// Wraps an unexpected internal error, preserving the root cause.
    #[must_use]
    pub fn processing(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Processing {
            message: message.into(),
            source,
        }
    }
}

impl From<TemplateError> for ReportError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(path) => Self::TemplateNotFound(path),
            TemplateError::Render { .. } | TemplateError::Load { .. } => {
                Self::processing("template rendering failed", Box::new(err))
            }
        }
    }
}

impl From<LabelError> for ReportError {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::NotFound { template, language } => {
                Self::LanguageFileNotFound { template, language }
            }
            LabelError::Invalid { .. } => {
                Self::processing("language file could not be read", Box::new(err))
            }
        }
    }
}

impl From<PdfError> for ReportError {
    fn from(err: PdfError) -> Self {
        Self::PdfGeneration(err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match &err {
            ReportError::MalformedInput(_)
            | ReportError::UnsupportedFormat(_)
            | ReportError::InvalidLanguage(_)
            | ReportError::LanguageFileNotFound { .. } => Self::Validation(err.to_string()),
            ReportError::UnknownTemplate(_) => Self::NotFound(err.to_string()),
            ReportError::TemplateNotFound(_) | ReportError::PdfGeneration(_) => {
                Self::ExternalService(err.to_string())
            }
            ReportError::DuplicateTemplate(_)
            | ReportError::ContentMismatch { .. }
            | ReportError::Processing { .. } => Self::Internal(err.to_string()),
        }
    }
}
