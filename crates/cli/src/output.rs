//! Result rendering: ANSI status lines, or a single JSON document on stdout.

use {
    plugkit_manager::{InstalledPlugin, OpReport, ValidationReport},
    plugkit_manifest::Severity,
};

// ── ANSI helpers ────────────────────────────────────────────────────────────

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Print workflow reports; returns `true` when every report succeeded.
pub fn render_reports(reports: &[OpReport], json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(reports.iter().all(OpReport::is_ok));
    }
    for report in reports {
        match (&report.ok, &report.error) {
            (Some(msg), _) => println!("[{GREEN}ok{RESET}]  {msg}"),
            (None, Some(msg)) => println!("[{RED}err{RESET}] {msg}"),
            (None, None) => {},
        }
    }
    Ok(reports.iter().all(OpReport::is_ok))
}

/// Print validation reports; returns `true` when every manifest is clean.
pub fn render_validation(reports: &[ValidationReport], json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(reports.iter().all(ValidationReport::is_clean));
    }
    for report in reports {
        if let Some(error) = &report.error {
            println!("[{RED}err{RESET}] {error}");
            continue;
        }
        if report.violations.is_empty() {
            let label = report.label.as_deref().unwrap_or_default();
            println!("[{GREEN}ok{RESET}]  {label} validated successfully");
            continue;
        }
        println!(
            "[{RED}err{RESET}] Plugin {} has validation errors in the manifest.json:",
            report.path.display()
        );
        for violation in &report.violations {
            let color = match violation.severity() {
                Severity::Fatal => RED,
                Severity::Warning => YELLOW,
            };
            println!("  {color}{violation}{RESET}");
        }
    }
    Ok(reports.iter().all(ValidationReport::is_clean))
}

/// Print the plugin listing; returns `true` when anything was found.
pub fn render_list(plugins: &[InstalledPlugin], json: bool) -> anyhow::Result<bool> {
    if json {
        println!("{}", serde_json::to_string_pretty(plugins)?);
        return Ok(!plugins.is_empty());
    }
    for plugin in plugins {
        println!("{}: {}", plugin.dir_name(), plugin.manifest.display_label());
    }
    if plugins.is_empty() {
        println!("[{RED}err{RESET}] No valid plugins installed.");
    }
    Ok(!plugins.is_empty())
}
