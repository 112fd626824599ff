//! Scaffold a new plugin project.

use std::path::Path;

use {
    anyhow::{Context, bail},
    rand::Rng,
};

use plugkit_manifest::{
    MANIFEST_FILENAME, PluginManifest,
    constants::{ID_LEN, NAME_MAX_LEN, NAME_MIN_LEN},
};

const MAIN_STUB: &str = r#"function run(selection) {
  // Plugin logic goes here.
}

module.exports = {
  commands: {
    run,
  },
};
"#;

/// Generate a fresh plugin id: uppercase alphanumerics, manifest length.
fn generate_id() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Create a starter plugin at `dir`: a manifest that passes validation plus
/// a minimal entry-point stub. Refuses a non-empty target directory.
pub fn scaffold(dir: &Path, name: &str) -> anyhow::Result<PluginManifest> {
    let name_len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name_len) {
        bail!("plugin name must be {NAME_MIN_LEN} - {NAME_MAX_LEN} chars, got {name_len}");
    }

    if dir.exists() && dir.read_dir()?.next().is_some() {
        bail!("{} is not empty", dir.display());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("could not create {}", dir.display()))?;

    let manifest = PluginManifest::from_value(serde_json::json!({
        "id": generate_id(),
        "name": name,
        "version": "1.0.0",
        "host": { "app": "XD", "minVersion": "13.0" },
        "uiEntryPoints": [
            { "type": "menu", "label": name, "commandId": "run" }
        ],
        "description": format!("{name} does not do anything interesting yet."),
        "summary": "A starter plugin",
        "languages": ["en"],
        "author": "Your Name",
    }));

    std::fs::write(
        dir.join(MANIFEST_FILENAME),
        serde_json::to_string_pretty(manifest.raw())?,
    )?;
    std::fs::write(dir.join("main.js"), MAIN_STUB)?;

    Ok(manifest)
}
