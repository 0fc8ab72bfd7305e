//! Report handler contract.

use serde_json::Value;
use tracing::{debug, info};

use super::error::ReportError;
use super::render::{render_report, ReportContext};
use super::types::{LabelMap, OutputFormat, ReportOutput};

/// Capability contract binding one template name to its model-parsing and
/// rendering behavior.
///
/// Concrete handlers implement only [`parse`](Self::parse); rendering is
/// shared default behavior delegating to [`render_report`], and
/// [`process`](Self::process) orchestrates the full parse → label load →
/// render pipeline. There is no partial success: either a complete
/// [`ReportOutput`] is returned or a typed error is raised.
pub trait ReportHandler: Send + Sync {
    /// Template name this handler is registered under.
    fn template_name(&self) -> &'static str;

    /// Parses the raw input byte stream into the handler's model, with all
    /// derived fields computed, serialized for template consumption.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedInput`] for input that does not match
    /// the expected schema.
    fn parse(&self, input: &[u8]) -> Result<Value, ReportError>;

    /// Renders a parsed model into the requested format.
    ///
    /// The default implementation is the shared format dispatcher; handlers
    /// only override this to narrow or replace rendering behavior.
    fn render(
        &self,
        ctx: &ReportContext,
        model: &Value,
        template_name: &str,
        format: OutputFormat,
        labels: &LabelMap,
    ) -> Result<ReportOutput, ReportError> {
        render_report(ctx, model, template_name, format, labels)
    }

    /// Orchestrates parse → label load → render for one request.
    fn process(
        &self,
        ctx: &ReportContext,
        input: &[u8],
        template_name: &str,
        format: OutputFormat,
        language: &str,
    ) -> Result<ReportOutput, ReportError> {
        let model = self.parse(input)?;
        debug!(template = template_name, "parsed model successfully");

        let labels = ctx.labels.load(template_name, language)?;
        debug!(language, "loaded language labels");

        let output = self.render(ctx, &model, template_name, format, &labels)?;
        info!(template = template_name, %format, "report processed successfully");
        Ok(output)
    }
}
