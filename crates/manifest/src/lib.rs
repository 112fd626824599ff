//! Plugin manifest loading and validation.
//!
//! A plugin declares its metadata in a `manifest.json` at its root. The
//! document is kept in its raw JSON shape so the validator can report
//! missing or malformed fields as coded findings instead of failing to
//! deserialize them.

pub mod constants;
pub mod document;
pub mod validate;

pub use {
    document::{MANIFEST_FILENAME, PluginManifest, load_manifest},
    validate::{Severity, ValidateOptions, Violation, validate},
};
