//! Package plugin trees into distributable archives.
//!
//! Packaging refuses when the manifest has fatal findings (and warnings too
//! under `strict`); the severity policy lives here, not in the validator.

use std::{
    fs::File,
    path::{Component, Path, PathBuf},
};

use {
    anyhow::{Context, Result},
    flate2::{Compression, write::GzEncoder},
    tracing::debug,
};

use plugkit_manifest::{ValidateOptions, load_manifest, validate};

use crate::report::{OpReport, absolutize};

/// Extension of the produced archive (a gzipped tarball).
pub const ARCHIVE_EXT: &str = "xdpkg";

/// Optional per-plugin ignore file: one entry per line, either an exact
/// relative path or a `*.ext` suffix glob; `#` starts a comment.
pub const IGNORE_FILENAME: &str = ".pkgignore";

#[derive(Debug, Clone, Copy, Default)]
pub struct PackageOptions {
    /// Refuse to package on warnings too, not just fatals.
    pub strict: bool,
}

/// Package each source directory into `<parent>/<basename>.xdpkg`.
pub fn package(sources: &[PathBuf], opts: &PackageOptions) -> Vec<OpReport> {
    sources
        .iter()
        .map(|source| package_one(source, opts))
        .collect()
}

fn package_one(source: &Path, opts: &PackageOptions) -> OpReport {
    let source = absolutize(source);

    let manifest = match load_manifest(&source) {
        Ok(m) => m,
        Err(e) => {
            debug!(path = %source.display(), error = %e, "not a valid plugin");
            return OpReport::error(
                &source,
                "Can't package a plugin that doesn't have a valid manifest.json",
            );
        },
    };
    if manifest.id().is_none() {
        return OpReport::error(
            &source,
            "Can't package a plugin without a plugin ID in the manifest",
        );
    }

    let violations = validate(&manifest, &ValidateOptions {
        root: Some(&source),
        ..Default::default()
    });
    let blocking: Vec<String> = violations
        .iter()
        .filter(|v| v.is_fatal() || opts.strict)
        .map(ToString::to_string)
        .collect();
    if !blocking.is_empty() {
        return OpReport::error(
            &source,
            format!(
                "Plugin has validation errors in the manifest.json:\n{}",
                blocking.join("\n")
            ),
        );
    }

    let target = archive_target(&source);
    match write_archive(&source, &target) {
        Ok(file_count) => OpReport::ok(
            &source,
            format!(
                "{} packaged successfully at {} ({file_count} files).",
                manifest.display_label(),
                target.display()
            ),
        ),
        Err(e) => OpReport::error(&source, format!("packaging failed: {e}")),
    }
}

/// `<parent>/<basename>.xdpkg`, next to the plugin directory.
fn archive_target(source: &Path) -> PathBuf {
    let base = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "plugin".into());
    source
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!("{base}.{ARCHIVE_EXT}"))
}

/// Write the gzipped tarball, returning how many files went in.
///
/// Entries are added in sorted order so identical trees produce identical
/// archives.
fn write_archive(source: &Path, target: &Path) -> Result<usize> {
    let ignore = IgnoreList::load(source);

    let file = File::create(target)
        .with_context(|| format!("could not create {}", target.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut count = 0usize;
    for entry in walkdir::WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(source)?;
        if always_skipped(relative) || ignore.matches(relative) {
            continue;
        }
        builder.append_path_with_name(entry.path(), relative)?;
        count += 1;
    }

    builder.into_inner()?.finish()?;
    Ok(count)
}

/// Hidden entries and previously built archives never ship.
fn always_skipped(relative: &Path) -> bool {
    relative.components().any(|c| {
        matches!(c, Component::Normal(name) if name.to_string_lossy().starts_with('.'))
    }) || relative.extension().is_some_and(|e| e == ARCHIVE_EXT)
}

/// Parsed `.pkgignore` entries.
struct IgnoreList {
    exact: Vec<String>,
    suffixes: Vec<String>,
}

impl IgnoreList {
    fn load(root: &Path) -> Self {
        let mut exact = Vec::new();
        let mut suffixes = Vec::new();
        if let Ok(content) = std::fs::read_to_string(root.join(IGNORE_FILENAME)) {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                match line.strip_prefix('*') {
                    Some(suffix) => suffixes.push(suffix.to_string()),
                    None => exact.push(line.trim_end_matches('/').to_string()),
                }
            }
        }
        Self { exact, suffixes }
    }

    /// Exact entries also exclude everything beneath a matched directory.
    fn matches(&self, relative: &Path) -> bool {
        let rel = relative.to_string_lossy().replace('\\', "/");
        self.exact
            .iter()
            .any(|e| rel == *e || rel.starts_with(&format!("{e}/")))
            || self.suffixes.iter().any(|s| rel.ends_with(s.as_str()))
    }
}
