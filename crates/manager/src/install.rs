//! Install plugin trees into the host application's develop folder.

use std::path::{Path, PathBuf};

use tracing::debug;

use plugkit_manifest::load_manifest;

use crate::report::{OpReport, absolutize};

#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Replace an already-installed plugin instead of refusing.
    pub overwrite: bool,
    /// Remove previously installed files before copying.
    pub clean: bool,
}

/// Install each source directory into `<install_root>/<id>`.
pub fn install(sources: &[PathBuf], install_root: &Path, opts: &InstallOptions) -> Vec<OpReport> {
    sources
        .iter()
        .map(|source| install_one(source, install_root, opts))
        .collect()
}

fn install_one(source: &Path, install_root: &Path, opts: &InstallOptions) -> OpReport {
    let source = absolutize(source);

    let manifest = match load_manifest(&source) {
        Ok(m) => m,
        Err(e) => {
            debug!(path = %source.display(), error = %e, "not a valid plugin");
            return OpReport::error(
                &source,
                "Can't install a plugin that doesn't have a valid manifest.json",
            );
        },
    };
    let Some(id) = manifest.id() else {
        return OpReport::error(
            &source,
            "Can't install a plugin without a plugin ID in the manifest",
        );
    };

    let target = install_root.join(id);
    if target.exists() {
        if !opts.overwrite {
            return OpReport::error(&source, "Plugin exists already; use -o to overwrite");
        }
        if opts.clean {
            debug!(target = %target.display(), "removing files before install");
            if let Err(e) = clear_dir(&target) {
                return OpReport::error(
                    &source,
                    format!("could not clean {}: {e}", target.display()),
                );
            }
        }
    }

    match copy_tree(&source, &target) {
        Ok(()) => OpReport::ok(
            &source,
            format!("{} installed successfully.", manifest.display_label()),
        ),
        Err(e) => OpReport::error(&source, format!("install failed: {e}")),
    }
}

/// Remove a directory's contents without removing the directory itself.
fn clear_dir(dir: &Path) -> anyhow::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(entry.path())?;
        } else {
            std::fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Copy the plugin tree into `dest`, skipping top-level dotfiles.
fn copy_tree(src: &Path, dest: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }
        let target = dest.join(&name);
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Recursively copy a directory.
fn copy_dir_recursive(src: &Path, dest: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dest)?;

    for entry in walkdir::WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
