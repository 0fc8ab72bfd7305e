//! Format-dispatch rendering stage.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::pdf::{compose_pdf, PdfConverter, ResourceResolver};
use crate::template::{LabelLoader, TemplateEngine};

use super::error::ReportError;
use super::types::{LabelMap, OutputFormat, ReportOutput};

/// Shared, read-only rendering collaborators.
///
/// Built once at startup and cloned cheaply into each request; safe to use
/// from concurrent worker threads.
#[derive(Clone)]
pub struct ReportContext {
    /// Template engine resolving `{template}/{suffix}` paths.
    pub template_engine: Arc<dyn TemplateEngine>,
    /// External HTML-to-PDF conversion engine.
    pub pdf_converter: Arc<dyn PdfConverter>,
    /// Resolver for relative template resources requested during conversion.
    pub resources: Arc<dyn ResourceResolver>,
    /// Localized label loader.
    pub labels: Arc<dyn LabelLoader>,
}

/// Renders a parsed model into the requested output format.
///
/// Stateless dispatch over the three terminal branches:
/// - HTML: `{template}/html` through the template engine, `text/html`
/// - CSV: `{template}/csv` through the template engine, `text/csv`
///   (escaping and quoting are the template's concern, not this layer's)
/// - PDF: delegated to the PDF compositor, `application/pdf`
///
/// Templates see the variables `{ "model": ..., "labels": ... }`.
///
/// # Errors
///
/// Propagates [`ReportError::TemplateNotFound`] for missing required
/// templates and [`ReportError::PdfGeneration`] for conversion failures.
pub fn render_report(
    ctx: &ReportContext,
    model: &Value,
    template_name: &str,
    format: OutputFormat,
    labels: &LabelMap,
) -> Result<ReportOutput, ReportError> {
    let vars = json!({
        "model": model,
        "labels": labels,
    });

    debug!(template = template_name, %format, "rendering report");

    match format {
        OutputFormat::Html | OutputFormat::Csv => {
            let path = format!("{template_name}/{}", format.template_suffix());
            let content = ctx.template_engine.render(&path, &vars)?;
            Ok(ReportOutput::text(format.mime_type(), content))
        }
        OutputFormat::Pdf => {
            let bytes = compose_pdf(
                ctx.template_engine.as_ref(),
                ctx.pdf_converter.as_ref(),
                ctx.resources.as_ref(),
                template_name,
                &vars,
            )?;
            Ok(ReportOutput::binary(format.mime_type(), bytes))
        }
    }
}
