//! Report service facade.

use tracing::{error, info};

use finreport_shared::sanitize_for_logging;

use super::error::ReportError;
use super::registry::ReportRegistry;
use super::render::ReportContext;
use super::types::{OutputFormat, ReportOutput};

/// Facade the transport layer calls for report generation and capability
/// queries.
///
/// Holds the read-only registry and the shared rendering collaborators;
/// safe to share across concurrent requests.
pub struct ReportService {
    registry: ReportRegistry,
    ctx: ReportContext,
}

impl ReportService {
    /// Creates the service from a populated registry and rendering context.
    #[must_use]
    pub fn new(registry: ReportRegistry, ctx: ReportContext) -> Self {
        Self { registry, ctx }
    }

    /// Generates a report from raw statement input.
    ///
    /// Validation (language code format, template lookup) happens before any
    /// parsing or rendering work begins.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidLanguage`] for a language code that is
    /// not two lowercase ASCII letters, [`ReportError::UnknownTemplate`] when
    /// no handler is registered under the name, and propagates pipeline
    /// errors from [`super::ReportHandler::process`].
    pub fn generate(
        &self,
        input: &[u8],
        template_name: &str,
        format: OutputFormat,
        language: &str,
    ) -> Result<ReportOutput, ReportError> {
        info!(
            template = %sanitize_for_logging(template_name),
            %format,
            language = %sanitize_for_logging(language),
            "generating report"
        );

        if !is_valid_language_code(language) {
            return Err(ReportError::InvalidLanguage(language.to_string()));
        }

        let Some(handler) = self.registry.lookup(template_name) else {
            error!(
                template = %sanitize_for_logging(template_name),
                "no report handler found"
            );
            return Err(ReportError::UnknownTemplate(template_name.to_string()));
        };

        handler.process(&self.ctx, input, template_name, format, language)
    }

    /// Capability query: template names mapped to supported output formats.
    #[must_use]
    pub fn available_templates(
        &self,
    ) -> std::collections::BTreeMap<String, Vec<OutputFormat>> {
        self.registry.capabilities()
    }
}

/// A valid language code is exactly two lowercase ASCII letters.
fn is_valid_language_code(language: &str) -> bool {
    language.len() == 2 && language.chars().all(|c| c.is_ascii_lowercase())
}
