//! Host application install-folder resolution.
//!
//! The host application loads development plugins from a per-channel folder
//! under the user's application-support tree. [`install_root`] resolves that
//! folder, creating the `develop` leaf on demand. An explicit override
//! directory (the CLI wires it to `--install-dir` / `PLUGKIT_INSTALL_DIR`)
//! bypasses resolution entirely, which is also how tests and unsupported
//! platforms exercise the install workflows.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use {
    anyhow::{Context, bail},
    tracing::debug,
};

/// Environment variable the CLI maps onto the install-dir override.
pub const INSTALL_DIR_ENV: &str = "PLUGKIT_INSTALL_DIR";

/// Leaf folder the host application scans for development plugins.
pub const DEVELOP_DIR: &str = "develop";

/// Which installed instance of the host application to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Release,
    Prerelease,
    Dev,
}

impl Channel {
    /// Accepts the long spellings and their shorthands (`r`, `p`, `pre`,
    /// `d`, `development`); the first letter decides.
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.chars().next() {
            Some('r' | 'R') => Ok(Self::Release),
            Some('p' | 'P') => Ok(Self::Prerelease),
            Some('d' | 'D') => Ok(Self::Dev),
            _ => bail!("unknown channel '{value}'; expected release, prerelease, or dev"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Prerelease => "prerelease",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the develop-plugins folder for `channel`.
///
/// With `override_dir` set, that directory is used directly (created if
/// needed). Otherwise the per-platform host root must already exist — its
/// absence means the channel's host application is not installed — and the
/// `develop` leaf underneath it is created on demand.
pub fn install_root(channel: Channel, override_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = override_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("could not create {}", dir.display()))?;
        debug!(path = %dir.display(), "using install dir override");
        return Ok(dir.to_path_buf());
    }

    let root = channel_root(channel)?;
    if !root.exists() {
        bail!(
            "could not locate {}. Is the {channel} version of the host application installed?",
            root.display()
        );
    }

    let develop = root.join(DEVELOP_DIR);
    if !develop.exists() {
        std::fs::create_dir_all(&develop)
            .with_context(|| format!("could not create {}", develop.display()))?;
    }
    Ok(develop)
}

#[cfg(target_os = "macos")]
fn channel_root(channel: Channel) -> anyhow::Result<PathBuf> {
    let base = directories::BaseDirs::new().context("could not determine home directory")?;
    let name = match channel {
        Channel::Release => "Adobe XD CC",
        Channel::Prerelease => "Adobe XD CC (Prerelease)",
        Channel::Dev => "Adobe XD CC (Dev)",
    };
    Ok(base
        .home_dir()
        .join("Library")
        .join("Application Support")
        .join("Adobe")
        .join(name))
}

#[cfg(target_os = "windows")]
fn channel_root(channel: Channel) -> anyhow::Result<PathBuf> {
    let base = directories::BaseDirs::new().context("could not determine home directory")?;
    let package = match channel {
        Channel::Release => "Adobe.CC.XD.adky2gkssdxte",
        Channel::Prerelease => "Adobe.CC.XD.Prerelease_adky2gkssdxte",
        Channel::Dev => "Adobe.CC.XD.Dev_adky2gkssdxte",
    };
    Ok(base
        .home_dir()
        .join("AppData")
        .join("Local")
        .join("Packages")
        .join(package)
        .join("LocalState"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn channel_root(channel: Channel) -> anyhow::Result<PathBuf> {
    bail!(
        "no {channel} host application folder on this platform; set {INSTALL_DIR_ENV} or pass --install-dir"
    )
}
