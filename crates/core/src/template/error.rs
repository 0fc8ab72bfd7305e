//! Template and label error types.

use thiserror::Error;

/// Template engine errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template path did not resolve.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template resolved but failed to render.
    #[error("failed to render template {path}: {message}")]
    Render {
        /// Template path.
        path: String,
        /// Engine error message.
        message: String,
    },

    /// A template file could not be loaded at startup.
    #[error("failed to load template {path}: {message}")]
    Load {
        /// File or template path.
        path: String,
        /// Underlying error message.
        message: String,
    },
}

/// Label loading errors.
#[derive(Debug, Error)]
pub enum LabelError {
    /// No label resource exists for the template/language pair.
    #[error("language file not found for template '{template}' and language '{language}'")]
    NotFound {
        /// Template name.
        template: String,
        /// Two-letter language code.
        language: String,
    },

    /// The label resource exists but could not be read or parsed.
    #[error("invalid language file {path}: {message}")]
    Invalid {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },
}
