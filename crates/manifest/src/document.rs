use std::path::Path;

use {anyhow::Context, serde_json::Value};

/// File name every plugin must carry at its root.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// A plugin's parsed `manifest.json`.
///
/// The raw JSON shape is preserved: any field may be absent or carry the
/// wrong type, and the validator turns that into coded findings.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct PluginManifest(Value);

impl PluginManifest {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.text_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.text_field("name")
    }

    pub fn version(&self) -> Option<&str> {
        self.text_field("version")
    }

    /// `"<name>"@<version> [<id>]` with `?` standing in for missing fields.
    pub fn display_label(&self) -> String {
        format!(
            "\"{}\"@{} [{}]",
            self.name().unwrap_or("?"),
            self.version().unwrap_or("?"),
            self.id().unwrap_or("?"),
        )
    }
}

/// Read and parse `manifest.json` directly under `plugin_dir`.
///
/// A missing file and malformed JSON are both errors; callers treat either
/// as "this directory is not a valid plugin" and never hand the result to
/// the validator.
pub fn load_manifest(plugin_dir: &Path) -> anyhow::Result<PluginManifest> {
    let path = plugin_dir.join(MANIFEST_FILENAME);
    let data = std::fs::read_to_string(&path)
        .with_context(|| format!("no manifest at {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("invalid manifest at {}", path.display()))?;
    Ok(PluginManifest(value))
}
