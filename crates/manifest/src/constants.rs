//! The fixed rule table the validator enforces.
//!
//! Every length bound, supported set, and version pattern lives here so the
//! checks, their tests, and callers all reference one source of truth.

use std::sync::LazyLock;

use regex::Regex;

pub const ID_LEN: usize = 8;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 45;

pub const DESCRIPTION_MIN_LEN: usize = 3;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

pub const SUMMARY_MIN_LEN: usize = 3;
pub const SUMMARY_MAX_LEN: usize = 30;

pub const RELEASE_NOTES_MIN_LEN: usize = 3;
pub const RELEASE_NOTES_MAX_LEN: usize = 1000;

pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 40;

pub const KEYWORD_MIN_LEN: usize = 2;
pub const KEYWORD_CONCAT_MAX_LEN: usize = 100;

/// Host applications plugins may declare under `host.app`.
pub const SUPPORTED_HOSTS: &[&str] = &["XD"];

/// Language codes plugins may declare under `languages`.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "de", "fr", "ja", "ko", "zh", "es", "pt"];

/// Plugin versions are dotted triples with 1-2 digit segments.
#[allow(clippy::unwrap_used)] // literal pattern
pub static PLUGIN_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{1,2}$").unwrap());

/// Host versions are dotted pairs with 1-2 digit segments.
#[allow(clippy::unwrap_used)] // literal pattern
pub static HOST_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\d{1,2}$").unwrap());

/// Bounds quoted in version-format messages.
pub const PLUGIN_MIN_VERSION: &str = "0.0.1";
pub const PLUGIN_MAX_VERSION: &str = "99.99.99";
pub const HOST_MIN_VERSION: &str = "13.0";
pub const HOST_MAX_VERSION: &str = "99.99";
