//! Plugin workflows: install, list, package, validate, watch, and scaffold.
//!
//! Every multi-target workflow takes one or more plugin directories,
//! processes each independently, and returns one report per directory so
//! the CLI can render them as text or JSON.

pub mod install;
pub mod list;
pub mod package;
pub mod report;
pub mod scaffold;
pub mod validate;
pub mod watch;

pub use {
    install::{InstallOptions, install},
    list::{InstalledPlugin, list},
    package::{PackageOptions, package},
    report::OpReport,
    scaffold::scaffold,
    validate::{ValidationReport, validate_dirs},
    watch::{PluginChanged, PluginWatcher},
};
