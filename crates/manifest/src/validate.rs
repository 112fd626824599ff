//! Manifest validation engine.
//!
//! Runs a fixed battery of independent checks over a plugin manifest and
//! accumulates every violation found. Checks never short-circuit: a missing
//! `host` block does not stop `description` or `keywords` from being
//! examined. Output order is the battery order (then entry index within a
//! rule), so identical inputs produce identical findings.

use std::{fmt, path::Path};

use {serde::Serialize, serde_json::Value};

use crate::{
    constants::{
        AUTHOR_MAX_LEN, AUTHOR_MIN_LEN, DESCRIPTION_MAX_LEN, DESCRIPTION_MIN_LEN,
        HOST_MAX_VERSION, HOST_MIN_VERSION, HOST_VERSION_RE, ID_LEN, KEYWORD_CONCAT_MAX_LEN,
        KEYWORD_MIN_LEN, NAME_MAX_LEN, NAME_MIN_LEN, PLUGIN_MAX_VERSION, PLUGIN_MIN_VERSION,
        PLUGIN_VERSION_RE, RELEASE_NOTES_MAX_LEN, RELEASE_NOTES_MIN_LEN, SUMMARY_MAX_LEN,
        SUMMARY_MIN_LEN, SUPPORTED_HOSTS, SUPPORTED_LANGUAGES,
    },
    document::PluginManifest,
};

/// Severity of a [`Violation`], implied by its code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `F` codes: the manifest cannot be accepted for packaging.
    Fatal,
    /// `W` codes: advisory; surfaced but non-blocking by default.
    Warning,
}

/// A single finding: a stable code plus a self-contained message.
///
/// Messages carry the offending value and the expected constraint, so no
/// further context lookup is needed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub code: &'static str,
    pub message: String,
}

impl Violation {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        if self.code.starts_with('W') {
            Severity::Warning
        } else {
            Severity::Fatal
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Caller-supplied context for a validation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions<'a> {
    /// Directory icon paths resolve against; the current directory when `None`.
    pub root: Option<&'a Path>,
    /// Externally expected plugin id (publishing flows) to check `id` against.
    pub expected_id: Option<&'a str>,
}

type Doc = serde_json::Map<String, Value>;

/// Validate `manifest`, returning every violation in battery order.
///
/// An empty result means the manifest satisfies every rule. The engine
/// never fails on malformed-but-present fields; its only filesystem access
/// is the per-icon existence stat.
pub fn validate(manifest: &PluginManifest, opts: &ValidateOptions) -> Vec<Violation> {
    let mut out = Vec::new();

    let Some(doc) = manifest.raw().as_object() else {
        out.push(Violation::new("F1090", "Manifest must be a JSON object."));
        return out;
    };

    check_id(doc, opts.expected_id, &mut out);
    check_name(doc, &mut out);
    check_version(doc, &mut out);
    check_host(doc, &mut out);
    check_entry_points(doc, &mut out);
    check_icons(doc, opts.root, &mut out);
    check_description(doc, &mut out);
    check_summary(doc, &mut out);
    check_keywords(doc, &mut out);
    check_release_notes(doc, &mut out);
    check_languages(doc, &mut out);
    check_author(doc, &mut out);

    out
}

/// A key counts as present when it exists with a non-null value.
fn present<'a>(doc: &'a Doc, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| !v.is_null())
}

/// Length in Unicode scalar values; non-strings count as empty.
fn text_len(value: &Value) -> usize {
    value.as_str().map_or(0, |s| s.chars().count())
}

/// Render a value for a message: strings bare, anything else as JSON.
fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn check_id(doc: &Doc, expected_id: Option<&str>, out: &mut Vec<Violation>) {
    let Some(id) = present(doc, "id") else {
        out.push(Violation::new(
            "F1000",
            "Manifest is missing a 'id' field. Add a plugin id.",
        ));
        return;
    };
    if let Some(expected) = expected_id
        && id.as_str() != Some(expected)
    {
        out.push(Violation::new(
            "F1001",
            format!(
                "Manifest 'id' does not match expected id. Saw '{}', expected '{expected}'.",
                render(id)
            ),
        ));
    }
    let count = text_len(id);
    if count != ID_LEN {
        out.push(Violation::new(
            "F1002",
            format!("Manifest 'id' character count is incorrect. Count is {count}, expected {ID_LEN}."),
        ));
    }
}

fn check_name(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(name) = present(doc, "name") else {
        out.push(Violation::new("F1010", "Manifest is missing a plugin name."));
        return;
    };
    let len = text_len(name);
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        out.push(Violation::new(
            "F1011",
            format!(
                "Manifest name is not an appropriate length (expected {NAME_MIN_LEN} - {NAME_MAX_LEN} chars, saw {len} chars)."
            ),
        ));
    }
}

fn check_version(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(version) = present(doc, "version") else {
        out.push(Violation::new(
            "F1030",
            "Manifest must specify a version number.",
        ));
        return;
    };
    if !PLUGIN_VERSION_RE.is_match(version.as_str().unwrap_or_default()) {
        out.push(Violation::new(
            "F1031",
            format!(
                "Version format is incorrect. Saw {}, expected {PLUGIN_MIN_VERSION} - {PLUGIN_MAX_VERSION}.",
                render(version)
            ),
        ));
    }
}

fn check_host(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(host) = present(doc, "host") else {
        out.push(Violation::new(
            "F1020",
            "Manifest is missing host requirements. Add a 'host' key.",
        ));
        return;
    };

    match host.get("app").filter(|v| !v.is_null()) {
        None => out.push(Violation::new(
            "F1021",
            "Manifest is missing host app id. Add a host.app key.",
        )),
        Some(app) => {
            if !SUPPORTED_HOSTS.contains(&app.as_str().unwrap_or_default()) {
                out.push(Violation::new(
                    "F1022",
                    format!(
                        "Manifest host is not a recognized host. Saw {}, expected one of {}.",
                        render(app),
                        SUPPORTED_HOSTS.join(", ")
                    ),
                ));
            }
        },
    }

    match host.get("minVersion").filter(|v| !v.is_null()) {
        None => out.push(Violation::new(
            "F1023",
            "Manifest must specify the minimum supported host version.",
        )),
        Some(min) => {
            if !HOST_VERSION_RE.is_match(min.as_str().unwrap_or_default()) {
                out.push(Violation::new(
                    "F1024",
                    format!(
                        "Host minimum version format is incorrect. Saw {}, expected {HOST_MIN_VERSION} - {HOST_MAX_VERSION}.",
                        render(min)
                    ),
                ));
            }
        },
    }

    // maxVersion is checked against its own value.
    if let Some(max) = host.get("maxVersion").filter(|v| !v.is_null())
        && !HOST_VERSION_RE.is_match(max.as_str().unwrap_or_default())
    {
        out.push(Violation::new(
            "F1025",
            format!(
                "Host maximum version format is incorrect. Saw {}, expected {HOST_MIN_VERSION} - {HOST_MAX_VERSION}.",
                render(max)
            ),
        ));
    }
}

fn check_entry_points(doc: &Doc, out: &mut Vec<Violation>) {
    if present(doc, "uiEntryPoints").is_none() {
        out.push(Violation::new(
            "F1040",
            "Manifest must contain UI entry points.",
        ));
    }
}

fn check_icons(doc: &Doc, root: Option<&Path>, out: &mut Vec<Violation>) {
    let Some(icons) = present(doc, "icons") else {
        return;
    };
    let Some(entries) = icons.as_array() else {
        out.push(Violation::new("W2000", "Icons should be an array."));
        return;
    };

    let root = root.unwrap_or(Path::new("."));
    for (idx, icon) in entries.iter().enumerate() {
        let width = icon.get("width").and_then(Value::as_f64);
        let height = icon.get("height").and_then(Value::as_f64);

        if width.is_none() {
            out.push(Violation::new(
                "W2001",
                format!("Icon {idx} should specify a width."),
            ));
        }
        if height.is_none() {
            out.push(Violation::new(
                "W2002",
                format!("Icon {idx} should specify a height."),
            ));
        }
        if let (Some(w), Some(h)) = (width, height)
            && w != h
        {
            out.push(Violation::new(
                "W2003",
                format!("Icon {idx} should be square."),
            ));
        }

        match icon.get("path").and_then(Value::as_str) {
            None => out.push(Violation::new(
                "W2004",
                format!("Icon {idx} should specify a path."),
            )),
            Some(path) => {
                if !root.join(path).exists() {
                    out.push(Violation::new(
                        "W2005",
                        format!("Icon {idx} has path {path}, but no icon was found there."),
                    ));
                }
            },
        }
    }
}

fn check_description(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(description) = present(doc, "description") else {
        out.push(Violation::new(
            "F1050",
            "Manifest must contain a plugin description.",
        ));
        return;
    };
    let len = text_len(description);
    if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&len) {
        out.push(Violation::new(
            "F1051",
            format!(
                "Manifest description is not an appropriate length (expected {DESCRIPTION_MIN_LEN} - {DESCRIPTION_MAX_LEN} chars, saw {len} chars)."
            ),
        ));
    }
}

fn check_summary(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(summary) = present(doc, "summary") else {
        out.push(Violation::new(
            "F1060",
            "Manifest must contain a plugin summary.",
        ));
        return;
    };
    let len = text_len(summary);
    if !(SUMMARY_MIN_LEN..=SUMMARY_MAX_LEN).contains(&len) {
        out.push(Violation::new(
            "F1061",
            format!(
                "Manifest summary is not an appropriate length (expected {SUMMARY_MIN_LEN} - {SUMMARY_MAX_LEN} chars, saw {len} chars)."
            ),
        ));
    }
}

fn check_keywords(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(keywords) = present(doc, "keywords") else {
        return;
    };
    let Some(entries) = keywords.as_array() else {
        out.push(Violation::new("W2010", "Keywords should be an array."));
        return;
    };

    // Short keywords are reported individually but still count toward the
    // concatenated total.
    let mut concat_len = 0usize;
    for keyword in entries {
        let len = text_len(keyword);
        if len < KEYWORD_MIN_LEN {
            out.push(Violation::new(
                "W2011",
                format!(
                    "Keywords should be at least {KEYWORD_MIN_LEN} chars. Found keyword {} with {len} chars.",
                    render(keyword)
                ),
            ));
        }
        concat_len += len;
    }
    if concat_len > KEYWORD_CONCAT_MAX_LEN {
        out.push(Violation::new(
            "W2012",
            format!(
                "Concatenated length of all keywords should be no more than {KEYWORD_CONCAT_MAX_LEN} chars. Found {concat_len} chars."
            ),
        ));
    }
}

fn check_release_notes(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(notes) = present(doc, "releaseNotes") else {
        return;
    };
    let len = text_len(notes);
    if !(RELEASE_NOTES_MIN_LEN..=RELEASE_NOTES_MAX_LEN).contains(&len) {
        out.push(Violation::new(
            "W2020",
            format!(
                "Release notes are not an appropriate length (expected {RELEASE_NOTES_MIN_LEN} - {RELEASE_NOTES_MAX_LEN} chars, saw {len} chars)."
            ),
        ));
    }
}

fn check_languages(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(languages) = present(doc, "languages") else {
        out.push(Violation::new(
            "F1070",
            "Manifest must contain supported languages.",
        ));
        return;
    };
    match languages.as_array() {
        Some(entries) if !entries.is_empty() => {
            for lang in entries {
                if !SUPPORTED_LANGUAGES.contains(&lang.as_str().unwrap_or_default()) {
                    out.push(Violation::new(
                        "F1072",
                        format!(
                            "Unsupported language code \"{}\" found. Only these language codes are supported: {}.",
                            render(lang),
                            SUPPORTED_LANGUAGES.join(", ")
                        ),
                    ));
                }
            }
        },
        _ => out.push(Violation::new(
            "F1071",
            "Languages should be an array with at least one element.",
        )),
    }
}

fn check_author(doc: &Doc, out: &mut Vec<Violation>) {
    let Some(author) = present(doc, "author") else {
        out.push(Violation::new("F1080", "Manifest must contain author."));
        return;
    };
    let len = text_len(author);
    if !(AUTHOR_MIN_LEN..=AUTHOR_MAX_LEN).contains(&len) {
        out.push(Violation::new(
            "F1081",
            format!(
                "Author is not an appropriate length (expected {AUTHOR_MIN_LEN} - {AUTHOR_MAX_LEN} chars, saw {len} chars)."
            ),
        ));
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn run(value: Value) -> Vec<Violation> {
        validate(&PluginManifest::from_value(value), &ValidateOptions::default())
    }

    fn codes(violations: &[Violation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.code).collect()
    }

    fn valid_manifest() -> Value {
        json!({
            "id": "ABCDEFGH",
            "name": "Sample Plugin",
            "version": "1.2.3",
            "host": { "app": "XD", "minVersion": "13.0" },
            "uiEntryPoints": {},
            "description": "Does something useful.",
            "summary": "Something",
            "languages": ["en"],
            "author": "Jane Doe",
        })
    }

    #[test]
    fn full_valid_manifest_passes() {
        assert_eq!(run(valid_manifest()), Vec::new());
    }

    #[test]
    fn empty_manifest_reports_every_missing_field_in_order() {
        let violations = run(json!({}));
        assert_eq!(
            codes(&violations),
            vec![
                "F1000", "F1010", "F1030", "F1020", "F1040", "F1050", "F1060", "F1070", "F1080",
            ],
        );
        assert!(violations.iter().all(Violation::is_fatal));
    }

    #[test]
    fn non_object_document_is_one_finding() {
        assert_eq!(codes(&run(json!([1, 2, 3]))), vec!["F1090"]);
        assert_eq!(codes(&run(json!("nope"))), vec!["F1090"]);
    }

    #[test]
    fn missing_id_and_bad_version_both_reported() {
        let mut manifest = valid_manifest();
        manifest.as_object_mut().unwrap().remove("id");
        manifest["version"] = json!("not-a-version");
        assert_eq!(codes(&run(manifest)), vec!["F1000", "F1031"]);
    }

    #[test]
    fn id_mismatch_quotes_both_values() {
        let manifest = PluginManifest::from_value(valid_manifest());
        let opts = ValidateOptions {
            expected_id: Some("ABCDEFGI"),
            ..Default::default()
        };
        let violations = validate(&manifest, &opts);
        assert_eq!(codes(&violations), vec!["F1001"]);
        assert!(violations[0].message.contains("'ABCDEFGH'"));
        assert!(violations[0].message.contains("'ABCDEFGI'"));
    }

    #[test]
    fn matching_expected_id_is_clean() {
        let manifest = PluginManifest::from_value(valid_manifest());
        let opts = ValidateOptions {
            expected_id: Some("ABCDEFGH"),
            ..Default::default()
        };
        assert_eq!(validate(&manifest, &opts), Vec::new());
    }

    #[test]
    fn id_length_must_be_exact() {
        let mut manifest = valid_manifest();
        manifest["id"] = json!("SHORT");
        let violations = run(manifest);
        assert_eq!(codes(&violations), vec!["F1002"]);
        assert!(violations[0].message.contains("Count is 5"));
    }

    #[test]
    fn name_length_bounds() {
        let mut manifest = valid_manifest();
        manifest["name"] = json!("ab");
        assert_eq!(codes(&run(manifest.clone())), vec!["F1011"]);

        manifest["name"] = json!("abc");
        assert_eq!(run(manifest.clone()), Vec::new());

        manifest["name"] = json!("a".repeat(NAME_MAX_LEN));
        assert_eq!(run(manifest.clone()), Vec::new());

        manifest["name"] = json!("a".repeat(NAME_MAX_LEN + 1));
        assert_eq!(codes(&run(manifest)), vec!["F1011"]);
    }

    #[test]
    fn empty_string_name_is_present_but_too_short() {
        let mut manifest = valid_manifest();
        manifest["name"] = json!("");
        let violations = run(manifest);
        assert_eq!(codes(&violations), vec!["F1011"]);
        assert!(violations[0].message.contains("saw 0 chars"));
    }

    #[test]
    fn version_must_be_dotted_triple() {
        let mut manifest = valid_manifest();
        for bad in ["1.2", "100.0.0", "1.2.3-beta", "v1.2.3"] {
            manifest["version"] = json!(bad);
            let violations = run(manifest.clone());
            assert_eq!(codes(&violations), vec!["F1031"], "version {bad}");
            assert!(violations[0].message.contains(bad));
        }

        manifest["version"] = json!("01.02.03");
        assert_eq!(run(manifest), Vec::new());
    }

    #[test]
    fn host_block_fields_required() {
        let mut manifest = valid_manifest();
        manifest["host"] = json!({});
        assert_eq!(codes(&run(manifest)), vec!["F1021", "F1023"]);
    }

    #[test]
    fn unsupported_host_app_names_the_set() {
        let mut manifest = valid_manifest();
        manifest["host"] = json!({ "app": "PS", "minVersion": "13.0" });
        let violations = run(manifest);
        assert_eq!(codes(&violations), vec!["F1022"]);
        assert!(violations[0].message.contains("XD"));
    }

    #[test]
    fn min_version_format_checked() {
        let mut manifest = valid_manifest();
        manifest["host"] = json!({ "app": "XD", "minVersion": "13" });
        assert_eq!(codes(&run(manifest)), vec!["F1024"]);
    }

    #[test]
    fn max_version_checked_against_its_own_value() {
        let mut manifest = valid_manifest();
        manifest["host"] = json!({ "app": "XD", "minVersion": "13.0", "maxVersion": "banana" });
        let violations = run(manifest.clone());
        assert_eq!(codes(&violations), vec!["F1025"]);
        assert!(violations[0].message.contains("banana"));

        manifest["host"] = json!({ "app": "XD", "minVersion": "13.0", "maxVersion": "21.5" });
        assert_eq!(run(manifest), Vec::new());
    }

    #[test]
    fn icons_must_be_an_array() {
        let mut manifest = valid_manifest();
        manifest["icons"] = json!("icon.png");
        assert_eq!(codes(&run(manifest)), vec!["W2000"]);
    }

    #[test]
    fn non_square_icon_with_missing_file_yields_exactly_two_warnings() {
        let tmp = tempfile::tempdir().unwrap();
        let mut manifest = valid_manifest();
        manifest["icons"] = json!([{ "width": 10, "height": 20, "path": "a.png" }]);

        let opts = ValidateOptions {
            root: Some(tmp.path()),
            ..Default::default()
        };
        let violations = validate(&PluginManifest::from_value(manifest), &opts);
        assert_eq!(codes(&violations), vec!["W2003", "W2005"]);
        assert!(violations[1].message.contains("a.png"));
    }

    #[test]
    fn square_icon_with_existing_file_is_clean() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("icon.png"), b"png").unwrap();

        let mut manifest = valid_manifest();
        manifest["icons"] = json!([{ "width": 24, "height": 24, "path": "icon.png" }]);

        let opts = ValidateOptions {
            root: Some(tmp.path()),
            ..Default::default()
        };
        assert_eq!(validate(&PluginManifest::from_value(manifest), &opts), Vec::new());
    }

    #[test]
    fn bare_icon_entry_reports_all_three_missing_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let mut manifest = valid_manifest();
        manifest["icons"] = json!([{}]);

        let opts = ValidateOptions {
            root: Some(tmp.path()),
            ..Default::default()
        };
        let violations = validate(&PluginManifest::from_value(manifest), &opts);
        assert_eq!(codes(&violations), vec!["W2001", "W2002", "W2004"]);
    }

    #[test]
    fn one_bad_icon_does_not_mask_the_next() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("ok.png"), b"png").unwrap();

        let mut manifest = valid_manifest();
        manifest["icons"] = json!([
            {},
            { "width": 48, "height": 48, "path": "ok.png" },
            { "width": 10, "height": 20, "path": "ok.png" },
        ]);

        let opts = ValidateOptions {
            root: Some(tmp.path()),
            ..Default::default()
        };
        let violations = validate(&PluginManifest::from_value(manifest), &opts);
        assert_eq!(codes(&violations), vec!["W2001", "W2002", "W2004", "W2003"]);
    }

    #[test]
    fn summary_has_its_own_code_and_wording() {
        let mut manifest = valid_manifest();
        manifest["summary"] = json!("a".repeat(SUMMARY_MAX_LEN + 1));
        let violations = run(manifest);
        assert_eq!(codes(&violations), vec!["F1061"]);
        assert!(violations[0].message.contains("summary"));
    }

    #[test]
    fn keyword_min_length_is_inclusive() {
        let mut manifest = valid_manifest();
        manifest["keywords"] = json!(["ab"]);
        assert_eq!(run(manifest.clone()), Vec::new());

        manifest["keywords"] = json!(["a"]);
        let violations = run(manifest);
        assert_eq!(codes(&violations), vec!["W2011"]);
        assert!(violations[0].message.contains("with 1 chars"));
    }

    #[test]
    fn first_keyword_is_length_checked_too() {
        let mut manifest = valid_manifest();
        manifest["keywords"] = json!(["a", "design"]);
        assert_eq!(codes(&run(manifest)), vec!["W2011"]);
    }

    #[test]
    fn keywords_must_be_an_array() {
        let mut manifest = valid_manifest();
        manifest["keywords"] = json!("design, tools");
        assert_eq!(codes(&run(manifest)), vec!["W2010"]);
    }

    #[test]
    fn keyword_concat_counts_every_keyword() {
        let mut manifest = valid_manifest();
        // 34 three-char keywords: 102 chars total, each individually fine.
        manifest["keywords"] = json!(vec!["abc"; 34]);
        let violations = run(manifest.clone());
        assert_eq!(codes(&violations), vec!["W2012"]);
        assert!(violations[0].message.contains("Found 102 chars"));

        // A short keyword still counts toward the total alongside its own
        // finding: 1 + 50 + 50 = 101.
        manifest["keywords"] = json!(["a", "b".repeat(50), "c".repeat(50)]);
        assert_eq!(codes(&run(manifest)), vec!["W2011", "W2012"]);
    }

    #[test]
    fn release_notes_checked_only_when_present() {
        let mut manifest = valid_manifest();
        manifest["releaseNotes"] = json!("ok");
        assert_eq!(codes(&run(manifest.clone())), vec!["W2020"]);

        manifest["releaseNotes"] = json!("Fixed a crash on export.");
        assert_eq!(run(manifest), Vec::new());
    }

    #[test]
    fn languages_must_be_nonempty_array_of_supported_codes() {
        let mut manifest = valid_manifest();
        manifest["languages"] = json!([]);
        assert_eq!(codes(&run(manifest.clone())), vec!["F1071"]);

        manifest["languages"] = json!("en");
        assert_eq!(codes(&run(manifest.clone())), vec!["F1071"]);

        manifest["languages"] = json!(["en", "xx"]);
        let violations = run(manifest.clone());
        assert_eq!(codes(&violations), vec!["F1072"]);
        assert!(violations[0].message.contains("\"xx\""));
        assert!(violations[0].message.contains("en, de, fr, ja, ko, zh, es, pt"));

        manifest["languages"] = json!(["en", "de", "ja"]);
        assert_eq!(run(manifest), Vec::new());
    }

    #[test]
    fn author_length_bounds() {
        let mut manifest = valid_manifest();
        manifest["author"] = json!("ab");
        assert_eq!(codes(&run(manifest.clone())), vec!["F1081"]);

        manifest["author"] = json!("a".repeat(AUTHOR_MAX_LEN + 1));
        assert_eq!(codes(&run(manifest)), vec!["F1081"]);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let mut manifest = valid_manifest();
        // Three scalar values, nine UTF-8 bytes.
        manifest["summary"] = json!("日本語");
        assert_eq!(run(manifest), Vec::new());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let mut manifest = valid_manifest();
        manifest.as_object_mut().unwrap().remove("name");
        manifest["icons"] = json!([{ "width": 10, "height": 20, "path": "a.png" }]);
        manifest["keywords"] = json!(["a"]);

        let manifest = PluginManifest::from_value(manifest);
        let opts = ValidateOptions {
            root: Some(tmp.path()),
            ..Default::default()
        };
        let first = validate(&manifest, &opts);
        let second = validate(&manifest, &opts);
        assert_eq!(first, second);
        assert_eq!(codes(&first), vec!["F1010", "W2003", "W2005", "W2011"]);
    }

    #[test]
    fn severity_follows_code_prefix() {
        let fatal = Violation::new("F1000", "x");
        let warning = Violation::new("W2000", "x");
        assert_eq!(fatal.severity(), Severity::Fatal);
        assert!(fatal.is_fatal());
        assert_eq!(warning.severity(), Severity::Warning);
        assert!(!warning.is_fatal());
    }

    #[test]
    fn display_prefixes_the_code() {
        let v = Violation::new("F1000", "Manifest is missing a 'id' field. Add a plugin id.");
        assert_eq!(
            v.to_string(),
            "F1000: Manifest is missing a 'id' field. Add a plugin id."
        );
    }
}
