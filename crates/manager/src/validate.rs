//! Validate plugin manifests and collect findings per directory.

use std::path::PathBuf;

use {serde::Serialize, tracing::debug};

use plugkit_manifest::{ValidateOptions, Violation, load_manifest, validate};

use crate::report::absolutize;

/// Findings for one plugin directory.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub path: PathBuf,
    /// `"<name>"@<version> [<id>]` when the manifest loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Set when the directory has no loadable manifest at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.violations.is_empty()
    }
}

/// Run the validator over each source directory.
///
/// The plugin root anchors icon-path checks; `expected_id` feeds the
/// id-mismatch rule.
pub fn validate_dirs(sources: &[PathBuf], expected_id: Option<&str>) -> Vec<ValidationReport> {
    sources
        .iter()
        .map(|source| {
            let source = absolutize(source);
            match load_manifest(&source) {
                Ok(manifest) => {
                    let violations = validate(&manifest, &ValidateOptions {
                        root: Some(&source),
                        expected_id,
                    });
                    ValidationReport {
                        path: source,
                        label: Some(manifest.display_label()),
                        error: None,
                        violations,
                    }
                },
                Err(e) => {
                    debug!(path = %source.display(), error = %e, "not a valid plugin");
                    ValidationReport {
                        path: source.clone(),
                        label: None,
                        error: Some(format!("Plugin {} doesn't have a manifest.", source.display())),
                        violations: Vec::new(),
                    }
                },
            }
        })
        .collect()
}
