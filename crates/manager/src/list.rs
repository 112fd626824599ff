//! Enumerate installed development plugins.

use std::path::{Path, PathBuf};

use {anyhow::Context, serde::Serialize, tracing::debug};

use plugkit_manifest::{PluginManifest, load_manifest};

/// An installed plugin: its folder plus the parsed manifest.
#[derive(Debug, Clone, Serialize)]
pub struct InstalledPlugin {
    pub path: PathBuf,
    pub manifest: PluginManifest,
}

impl InstalledPlugin {
    /// Folder name under the install root.
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// List plugins under `install_root`, sorted by folder name.
///
/// Folders without a loadable manifest are skipped. Non-empty `filters`
/// keep only plugins whose folder name or manifest id matches one entry.
pub fn list(install_root: &Path, filters: &[String]) -> anyhow::Result<Vec<InstalledPlugin>> {
    let entries = std::fs::read_dir(install_root)
        .with_context(|| format!("could not read {}", install_root.display()))?;

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    let mut plugins = Vec::new();
    for dir in dirs {
        let manifest = match load_manifest(&dir) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %dir.display(), error = %e, "skipping folder without a manifest");
                continue;
            },
        };
        let plugin = InstalledPlugin {
            path: dir,
            manifest,
        };
        if !filters.is_empty() {
            let matches_dir = filters.iter().any(|f| *f == plugin.dir_name());
            let matches_id = plugin
                .manifest
                .id()
                .is_some_and(|id| filters.iter().any(|f| f == id));
            if !matches_dir && !matches_id {
                continue;
            }
        }
        plugins.push(plugin);
    }
    Ok(plugins)
}
