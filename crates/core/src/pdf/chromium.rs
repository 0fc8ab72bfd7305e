//! Chromium-backed PDF conversion.
//!
//! Mirrors the conversion contract with a real headless browser: the
//! composed HTML is staged in a per-call scratch directory together with any
//! `resources/...` files the resolver can serve, so relative references load
//! from disk during printing. The browser instance is acquired inside the
//! call and dropped on every exit path.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, warn};

use super::converter::{PdfConverter, PdfJob};
use super::error::PdfError;
use super::resources::ResourceResolver;

static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// PDF converter launching one headless Chromium per conversion.
#[derive(Debug, Default)]
pub struct ChromiumConverter;

impl ChromiumConverter {
    /// Creates the converter. The browser binary is located at call time.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PdfConverter for ChromiumConverter {
    fn convert(&self, job: &PdfJob, resolver: &dyn ResourceResolver) -> Result<Vec<u8>, PdfError> {
        let scratch = ScratchDir::create()?;
        stage_resources(&scratch, &job.body_html, resolver)?;

        let html_path = scratch.path().join("report.html");
        std::fs::write(&html_path, &job.body_html)?;

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| PdfError::engine(e.to_string()))?;
        let browser = Browser::new(options).map_err(|e| PdfError::engine(e.to_string()))?;
        let tab = browser.new_tab().map_err(|e| PdfError::engine(e.to_string()))?;

        let url = format!("file://{}", html_path.display());
        tab.navigate_to(&url)
            .map_err(|e| PdfError::engine(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| PdfError::engine(e.to_string()))?;

        let (paper_width, paper_height) = job.page_format.paper_size_inches();
        let pdf_options = PrintToPdfOptions {
            print_background: Some(job.print_background),
            display_header_footer: Some(job.display_header_footer()),
            header_template: job.header_html.clone(),
            footer_template: job.footer_html.clone(),
            paper_width: Some(paper_width),
            paper_height: Some(paper_height),
            ..PrintToPdfOptions::default()
        };

        let bytes = tab
            .print_to_pdf(Some(pdf_options))
            .map_err(|e| PdfError::engine(e.to_string()))?;
        debug!(size = bytes.len(), "chromium printed PDF");
        Ok(bytes)
    }
}

/// Writes every resolvable `resources/...` reference in the HTML beside the
/// staged page so relative file URLs load. Unresolvable references are
/// skipped; the browser then sees a local not-found and printing proceeds.
fn stage_resources(
    scratch: &ScratchDir,
    html: &str,
    resolver: &dyn ResourceResolver,
) -> Result<(), PdfError> {
    for reference in referenced_resources(html) {
        match resolver.resolve(&reference) {
            Some(resource) => {
                let target = scratch.path().join(&reference);
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&target, &resource.bytes)?;
                debug!(resource = %reference, "staged template resource");
            }
            None => warn!(resource = %reference, "resource not found"),
        }
    }
    Ok(())
}

/// Scans HTML for `resources/...` references, stopping each at the first
/// quote, whitespace, or closing angle bracket.
fn referenced_resources(html: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(idx) = rest.find("resources/") {
        let candidate = &rest[idx..];
        let end = candidate
            .find(['"', '\'', ' ', '>', ')'])
            .unwrap_or(candidate.len());
        let reference = &candidate[..end];
        if reference.len() > "resources/".len() && !found.iter().any(|r| r == reference) {
            found.push(reference.to_string());
        }
        rest = &rest[idx + "resources/".len()..];
    }
    found
}

/// Per-call scratch directory, removed on drop.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    fn create() -> Result<Self, PdfError> {
        let path = std::env::temp_dir().join(format!(
            "finreport-pdf-{}-{}",
            std::process::id(),
            SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), %err, "failed to remove scratch directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::referenced_resources;

    #[test]
    fn test_finds_quoted_references() {
        let html = r#"<img src="resources/logo.png"><link href='resources/statement.css'>"#;
        assert_eq!(
            referenced_resources(html),
            vec!["resources/logo.png", "resources/statement.css"]
        );
    }

    #[test]
    fn test_deduplicates_references() {
        let html = r#"<img src="resources/logo.png"><img src="resources/logo.png">"#;
        assert_eq!(referenced_resources(html), vec!["resources/logo.png"]);
    }

    #[test]
    fn test_bare_prefix_is_ignored() {
        assert!(referenced_resources(r#"<a href="resources/">dir</a>"#).is_empty());
    }
}
