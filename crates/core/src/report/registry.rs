//! Report handler registry.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::info;

use crate::statement::StatementReport;

use super::error::ReportError;
use super::handler::ReportHandler;
use super::types::OutputFormat;

/// Maps template names to report handlers.
///
/// Populated once at process start through an explicit registration table
/// (no runtime reflection) and read-only thereafter: single writer during
/// construction, lock-free many-reader access for the process lifetime.
/// Rebuilding the registry yields the same set, so initialization is
/// idempotent.
#[derive(Default)]
pub struct ReportRegistry {
    handlers: HashMap<String, Arc<dyn ReportHandler>>,
}

impl ReportRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry with every built-in report handler registered.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuplicateTemplate`] if two handlers claim the
    /// same template name — fatal at startup.
    pub fn with_default_reports() -> Result<Self, ReportError> {
        let mut registry = Self::new();
        registry.register(Arc::new(StatementReport::new()))?;
        info!(handlers = registry.len(), "initialized report handlers");
        Ok(registry)
    }

    /// Registers a handler under its template name.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::DuplicateTemplate`] if the name is taken.
    pub fn register(&mut self, handler: Arc<dyn ReportHandler>) -> Result<(), ReportError> {
        let name = handler.template_name();
        if self.handlers.contains_key(name) {
            return Err(ReportError::DuplicateTemplate(name.to_string()));
        }
        info!(template = name, "registered report handler");
        self.handlers.insert(name.to_string(), handler);
        Ok(())
    }

    /// Looks up the handler for a template name.
    #[must_use]
    pub fn lookup(&self, template_name: &str) -> Option<Arc<dyn ReportHandler>> {
        self.handlers.get(template_name).cloned()
    }

    /// Capability query: every registered template name mapped to its
    /// supported output formats.
    ///
    /// Every handler is assumed to support all three formats; actual template
    /// file existence is not probed at registration time.
    #[must_use]
    pub fn capabilities(&self) -> BTreeMap<String, Vec<OutputFormat>> {
        self.handlers
            .keys()
            .map(|name| (name.clone(), OutputFormat::ALL.to_vec()))
            .collect()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
