use std::path::{Path, PathBuf};

use serde::Serialize;

/// Outcome of one workflow step against one plugin directory.
#[derive(Debug, Clone, Serialize)]
pub struct OpReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OpReport {
    pub fn ok(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            ok: Some(message.into()),
            error: None,
        }
    }

    pub fn error(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            ok: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Resolve a user-supplied plugin directory for reports and messages.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
