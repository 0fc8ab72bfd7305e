//! Template engine abstraction and label loading.
//!
//! The template engine is a black-box collaborator to the pipeline: it takes
//! a `{template}/{suffix}` path and a variable tree and produces text. The
//! production implementation is Handlebars with templates loaded from a
//! directory tree at startup.

pub mod engine;
pub mod error;
pub mod labels;

pub use engine::{HandlebarsEngine, TemplateEngine};
pub use error::{LabelError, TemplateError};
pub use labels::{JsonLabelLoader, LabelLoader, StaticLabels};
