//! PDF conversion error types.

use thiserror::Error;

/// Errors from the HTML-to-PDF conversion step.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The browser engine failed to launch, navigate, or print.
    #[error("PDF engine error: {0}")]
    Engine(String),

    /// I/O failure while staging conversion inputs.
    #[error("I/O error during PDF conversion: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfError {
    /// Creates an engine error from any displayable cause.
    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}
