//! Template resource resolution for PDF conversion.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

/// Recognized prefix for shared template resources.
pub const RESOURCE_PREFIX: &str = "resources/";

/// One resolved resource, served back to the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Content type inferred from the file extension.
    pub content_type: &'static str,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Resolves relative resource paths requested during PDF conversion.
pub trait ResourceResolver: Send + Sync {
    /// Resolves a `resources/...` path to its bytes and content type, or
    /// `None` when the resource does not exist (the conversion engine then
    /// sees a not-found response rather than an aborted conversion).
    fn resolve(&self, path: &str) -> Option<ResolvedResource>;
}

/// Resolver backed by the bundled template-resource tree on disk
/// (`{templates_root}/resources/...`).
pub struct TemplateResources {
    root: PathBuf,
}

impl TemplateResources {
    /// Creates a resolver rooted at the templates directory.
    #[must_use]
    pub fn new(templates_root: impl Into<PathBuf>) -> Self {
        Self {
            root: templates_root.into(),
        }
    }
}

impl ResourceResolver for TemplateResources {
    fn resolve(&self, path: &str) -> Option<ResolvedResource> {
        if !path.starts_with(RESOURCE_PREFIX) {
            return None;
        }
        // Reject traversal out of the resource tree.
        let relative = Path::new(path);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            warn!(path, "rejected resource path");
            return None;
        }

        let full = self.root.join(relative);
        match std::fs::read(&full) {
            Ok(bytes) => {
                debug!(path = %full.display(), size = bytes.len(), "served resource");
                Some(ResolvedResource {
                    content_type: content_type_for(path),
                    bytes,
                })
            }
            Err(_) => {
                warn!(path = %full.display(), "resource not found");
                None
            }
        }
    }
}

/// Infers a content type from a resource path's extension.
///
/// Recognized: png, jpg, jpeg, gif, svg, css, js. Anything else defaults to
/// a generic binary type.
#[must_use]
pub fn content_type_for(path: &str) -> &'static str {
    let lowered = path.to_ascii_lowercase();
    match lowered.rsplit('.').next() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}

/// Extracts the `resources/...` portion of a URL requested during
/// conversion, or `None` when the request should pass through unmodified.
#[must_use]
pub fn resource_path_in_url(url: &str) -> Option<&str> {
    url.find("/resources/")
        .map(|idx| &url[idx + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("resources/logo.png", "image/png")]
    #[case("resources/photo.JPG", "image/jpeg")]
    #[case("resources/photo.jpeg", "image/jpeg")]
    #[case("resources/anim.gif", "image/gif")]
    #[case("resources/icon.svg", "image/svg+xml")]
    #[case("resources/statement.css", "text/css")]
    #[case("resources/app.js", "application/javascript")]
    #[case("resources/data.bin", "application/octet-stream")]
    #[case("resources/noextension", "application/octet-stream")]
    fn test_content_type_inference(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(content_type_for(path), expected);
    }

    #[rstest]
    #[case("http://localhost/resources/logo.png", Some("resources/logo.png"))]
    #[case("file:///tmp/x/resources/a/b.css", Some("resources/a/b.css"))]
    #[case("https://example.com/other/path.png", None)]
    #[case("about:blank", None)]
    fn test_resource_path_extraction(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(resource_path_in_url(url), expected);
    }

    #[test]
    fn test_resolver_requires_resource_prefix() {
        let resolver = TemplateResources::new("templates");
        assert!(resolver.resolve("statement/html.hbs").is_none());
    }

    #[test]
    fn test_resolver_rejects_traversal() {
        let resolver = TemplateResources::new("templates");
        assert!(resolver.resolve("resources/../secrets.txt").is_none());
    }

    #[test]
    fn test_missing_resource_is_none_not_error() {
        let resolver = TemplateResources::new(std::env::temp_dir().join("finreport-nonexistent"));
        assert!(resolver.resolve("resources/absent.png").is_none());
    }
}
