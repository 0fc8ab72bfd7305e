//! PDF composition and conversion.
//!
//! The compositor renders the body and the optional header/footer fragments
//! through the template engine, then hands one conversion job to the
//! external HTML-to-PDF engine behind the [`PdfConverter`] trait. Relative
//! `resources/...` references requested during conversion resolve against
//! the bundled template-resource tree.

pub mod compositor;
pub mod converter;
pub mod error;
pub mod resources;

#[cfg(feature = "chromium")]
pub mod chromium;

pub use compositor::compose_pdf;
pub use converter::{DisabledConverter, PageFormat, PdfConverter, PdfJob};
pub use error::PdfError;
pub use resources::{
    content_type_for, resource_path_in_url, ResolvedResource, ResourceResolver,
    TemplateResources,
};

#[cfg(feature = "chromium")]
pub use chromium::ChromiumConverter;
