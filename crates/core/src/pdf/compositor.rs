//! PDF composition from HTML fragments.

use serde_json::Value;
use tracing::debug;

use crate::report::ReportError;
use crate::template::{TemplateEngine, TemplateError};

use super::converter::{PdfConverter, PdfJob};
use super::resources::ResourceResolver;

/// Composes the body, optional header, and optional footer fragments into
/// one paginated PDF document.
///
/// The body template `{template}/pdf` is required; a failure there is fatal
/// to the whole request. The `{template}/pdf_header` and
/// `{template}/pdf_footer` fragments are best-effort: a template-not-found
/// condition is swallowed (the only place in the pipeline where it is) and
/// the corresponding fragment is simply absent. Any other fragment failure
/// propagates.
///
/// # Errors
///
/// Returns [`ReportError::TemplateNotFound`] when the body template is
/// missing and [`ReportError::PdfGeneration`] when the external conversion
/// step fails.
pub fn compose_pdf(
    engine: &dyn TemplateEngine,
    converter: &dyn PdfConverter,
    resolver: &dyn ResourceResolver,
    template_name: &str,
    vars: &Value,
) -> Result<Vec<u8>, ReportError> {
    let body_html = engine.render(&format!("{template_name}/pdf"), vars)?;

    let header_html = render_optional(engine, &format!("{template_name}/pdf_header"), vars)?;
    if header_html.is_none() {
        debug!(template = template_name, "no header template found");
    }
    let footer_html = render_optional(engine, &format!("{template_name}/pdf_footer"), vars)?;
    if footer_html.is_none() {
        debug!(template = template_name, "no footer template found");
    }

    let job = PdfJob::new(body_html, header_html, footer_html);
    let bytes = converter.convert(&job, resolver)?;
    debug!(size = bytes.len(), "PDF generated successfully");
    Ok(bytes)
}

/// Renders an optional fragment, treating a missing template as absence.
fn render_optional(
    engine: &dyn TemplateEngine,
    template_path: &str,
    vars: &Value,
) -> Result<Option<String>, ReportError> {
    match engine.render(template_path, vars) {
        Ok(html) => Ok(Some(html)),
        Err(TemplateError::NotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
