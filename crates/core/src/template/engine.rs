//! Template engine abstraction and Handlebars implementation.

use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;
use tracing::{debug, info};

use super::error::TemplateError;

/// Black-box text templating collaborator.
///
/// Paths follow the `{template}/{suffix}` convention, e.g. `statement/html`
/// or `statement/pdf_header`.
pub trait TemplateEngine: Send + Sync {
    /// Renders the template at `template_path` with the given variables.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] when the path does not resolve and
    /// [`TemplateError::Render`] when rendering itself fails.
    fn render(&self, template_path: &str, vars: &Value) -> Result<String, TemplateError>;

    /// Whether a template is registered at the path.
    fn has_template(&self, template_path: &str) -> bool;
}

/// Handlebars-backed template engine.
///
/// Templates are registered up front, either from a directory tree
/// (`{root}/{template}/{name}.hbs` registered as `{template}/{name}`) or as
/// strings for tests.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl Default for HandlebarsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlebarsEngine {
    /// Creates an engine with no templates registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Handlebars::new(),
        }
    }

    /// Loads every `*.hbs` file from `{root}/{template}/` subdirectories,
    /// registering each under `{template}/{file_stem}`.
    ///
    /// Non-directories and files without the `.hbs` extension (label files,
    /// shared resources) are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] when the tree cannot be read or a
    /// template fails to compile.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let root = root.as_ref();
        let mut engine = Self::new();

        let entries = std::fs::read_dir(root).map_err(|e| TemplateError::Load {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TemplateError::Load {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;
            if !entry.path().is_dir() {
                continue;
            }
            let template_name = entry.file_name().to_string_lossy().into_owned();
            engine.load_template_dir(&entry.path(), &template_name)?;
        }

        info!(root = %root.display(), "loaded report templates");
        Ok(engine)
    }

    fn load_template_dir(&mut self, dir: &Path, template_name: &str) -> Result<(), TemplateError> {
        let entries = std::fs::read_dir(dir).map_err(|e| TemplateError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TemplateError::Load {
                path: dir.display().to_string(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let registered = format!("{template_name}/{stem}");
            self.registry
                .register_template_file(&registered, &path)
                .map_err(|e| TemplateError::Load {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            debug!(template = %registered, "registered template");
        }
        Ok(())
    }

    /// Registers a template from a string. Used by tests and embedded setups.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Load`] when the template fails to compile.
    pub fn register_template_string(
        &mut self,
        template_path: &str,
        source: &str,
    ) -> Result<(), TemplateError> {
        self.registry
            .register_template_string(template_path, source)
            .map_err(|e| TemplateError::Load {
                path: template_path.to_string(),
                message: e.to_string(),
            })
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, template_path: &str, vars: &Value) -> Result<String, TemplateError> {
        if !self.registry.has_template(template_path) {
            return Err(TemplateError::NotFound(template_path.to_string()));
        }
        self.registry
            .render(template_path, vars)
            .map_err(|e| TemplateError::Render {
                path: template_path.to_string(),
                message: e.to_string(),
            })
    }

    fn has_template(&self, template_path: &str) -> bool {
        self.registry.has_template(template_path)
    }
}
