//! Report processing pipeline.
//!
//! This module owns the architectural core of the system:
//! - [`ReportRegistry`] - maps template names to report handlers
//! - [`ReportHandler`] - the parse/render capability contract
//! - [`render_report`] - the format-dispatch rendering stage
//! - [`ReportService`] - the facade the transport layer calls

pub mod error;
pub mod handler;
pub mod registry;
pub mod render;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use handler::ReportHandler;
pub use registry::ReportRegistry;
pub use render::{render_report, ReportContext};
pub use service::ReportService;
pub use types::{LabelMap, OutputFormat, ReportContent, ReportOutput};
