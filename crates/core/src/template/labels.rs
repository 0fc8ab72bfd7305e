//! Localized label loading.

use std::path::PathBuf;

use tracing::debug;

use crate::report::LabelMap;

use super::error::LabelError;

/// Black-box collaborator loading localized labels for a template/language
/// pair.
pub trait LabelLoader: Send + Sync {
    /// Loads the label mapping for `template_name` in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::NotFound`] when no label resource exists for the
    /// pair.
    fn load(&self, template_name: &str, language: &str) -> Result<LabelMap, LabelError>;
}

/// Loads labels from `{root}/{template}/language_{lang}.json` files.
pub struct JsonLabelLoader {
    root: PathBuf,
}

impl JsonLabelLoader {
    /// Creates a loader rooted at the template directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn label_path(&self, template_name: &str, language: &str) -> PathBuf {
        self.root
            .join(template_name)
            .join(format!("language_{language}.json"))
    }
}

impl LabelLoader for JsonLabelLoader {
    fn load(&self, template_name: &str, language: &str) -> Result<LabelMap, LabelError> {
        let path = self.label_path(template_name, language);
        if !path.is_file() {
            return Err(LabelError::NotFound {
                template: template_name.to_string(),
                language: language.to_string(),
            });
        }

        debug!(path = %path.display(), "loading language file");
        let raw = std::fs::read(&path).map_err(|e| LabelError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_slice(&raw).map_err(|e| LabelError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Convenience for tests and embedded setups: a fixed label map served for
/// every template, failing for languages it does not know.
pub struct StaticLabels {
    language: String,
    labels: LabelMap,
}

impl StaticLabels {
    /// Creates a loader serving `labels` for the single `language`.
    #[must_use]
    pub fn new(language: impl Into<String>, labels: LabelMap) -> Self {
        Self {
            language: language.into(),
            labels,
        }
    }
}

impl LabelLoader for StaticLabels {
    fn load(&self, template_name: &str, language: &str) -> Result<LabelMap, LabelError> {
        if language == self.language {
            Ok(self.labels.clone())
        } else {
            Err(LabelError::NotFound {
                template: template_name.to_string(),
                language: language.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn scratch_templates_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "finreport-labels-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(dir.join("statement")).unwrap();
        dir
    }

    #[test]
    fn test_loads_language_file() {
        let root = scratch_templates_dir();
        std::fs::write(
            root.join("statement/language_en.json"),
            r#"{"title": "Account Statement", "balance": "Balance"}"#,
        )
        .unwrap();

        let loader = JsonLabelLoader::new(&root);
        let labels = loader.load("statement", "en").unwrap();
        assert_eq!(labels["title"], "Account Statement");
        assert_eq!(labels["balance"], "Balance");

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_missing_language_is_not_found() {
        let root = scratch_templates_dir();
        let loader = JsonLabelLoader::new(&root);
        let err = loader.load("statement", "de").unwrap_err();
        assert!(
            matches!(err, LabelError::NotFound { template, language }
                if template == "statement" && language == "de")
        );
        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let root = scratch_templates_dir();
        std::fs::write(root.join("statement/language_en.json"), "not json").unwrap();

        let loader = JsonLabelLoader::new(&root);
        let err = loader.load("statement", "en").unwrap_err();
        assert!(matches!(err, LabelError::Invalid { .. }));
        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_static_labels_single_language() {
        let mut labels = LabelMap::new();
        labels.insert("title".into(), "Statement".into());
        let loader = StaticLabels::new("en", labels);

        assert_eq!(loader.load("statement", "en").unwrap()["title"], "Statement");
        assert!(loader.load("statement", "fr").is_err());
    }
}
