//! HTML-to-PDF conversion contract.

use super::error::PdfError;
use super::resources::ResourceResolver;

/// Paper formats supported by the conversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// ISO A4, the fixed format for report output.
    A4,
}

impl PageFormat {
    /// Paper size in inches, `(width, height)`, as the browser engines
    /// expect it.
    #[must_use]
    pub const fn paper_size_inches(self) -> (f64, f64) {
        match self {
            Self::A4 => (8.27, 11.7),
        }
    }
}

/// One conversion job: composed HTML fragments plus page options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfJob {
    /// Required body HTML.
    pub body_html: String,
    /// Optional header fragment; absent when the template set has none.
    pub header_html: Option<String>,
    /// Optional footer fragment; absent when the template set has none.
    pub footer_html: Option<String>,
    /// Paper format.
    pub page_format: PageFormat,
    /// Whether backgrounds are printed.
    pub print_background: bool,
}

impl PdfJob {
    /// Creates an A4 job with backgrounds printed, the pipeline default.
    #[must_use]
    pub fn new(
        body_html: String,
        header_html: Option<String>,
        footer_html: Option<String>,
    ) -> Self {
        Self {
            body_html,
            header_html,
            footer_html,
            page_format: PageFormat::A4,
            print_background: true,
        }
    }

    /// Header/footer display is enabled only when a fragment is present.
    #[must_use]
    pub const fn display_header_footer(&self) -> bool {
        self.header_html.is_some() || self.footer_html.is_some()
    }
}

/// External browser-based HTML-to-PDF conversion engine.
///
/// Implementations acquire an isolated engine instance per call and release
/// it on every exit path; no instance is shared across concurrent requests.
pub trait PdfConverter: Send + Sync {
    /// Converts the job into one paginated PDF document.
    ///
    /// The resolver serves relative `resources/...` references the engine
    /// requests during conversion; unresolvable resources are reported
    /// not-found to the engine without aborting the conversion.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the conversion itself fails.
    fn convert(&self, job: &PdfJob, resolver: &dyn ResourceResolver) -> Result<Vec<u8>, PdfError>;
}

/// Converter used when no browser engine is compiled in: every conversion
/// fails with a clear engine error. HTML and CSV rendering are unaffected.
#[derive(Debug, Default)]
pub struct DisabledConverter;

impl DisabledConverter {
    /// Creates the disabled converter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PdfConverter for DisabledConverter {
    fn convert(&self, _job: &PdfJob, _resolver: &dyn ResourceResolver) -> Result<Vec<u8>, PdfError> {
        Err(PdfError::engine(
            "PDF conversion engine is not enabled; rebuild with the 'chromium' feature",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_header_footer_flag() {
        let body = "<html></html>".to_string();
        assert!(!PdfJob::new(body.clone(), None, None).display_header_footer());
        assert!(PdfJob::new(body.clone(), Some("<h1/>".into()), None).display_header_footer());
        assert!(PdfJob::new(body, None, Some("<p/>".into())).display_header_footer());
    }

    #[test]
    fn test_a4_paper_size() {
        let (w, h) = PageFormat::A4.paper_size_inches();
        assert_eq!(w.to_bits(), 8.27f64.to_bits());
        assert_eq!(h.to_bits(), 11.7f64.to_bits());
    }
}
