//! Filesystem watcher for plugin source trees.
//!
//! Watches each plugin root for changes with debouncing and reports which
//! root changed so the caller can re-install just that plugin.

use std::{
    path::{Component, Path, PathBuf},
    sync::mpsc,
    time::Duration,
};

use {
    anyhow::Result,
    notify_debouncer_full::{
        DebounceEventResult, Debouncer, RecommendedCache, new_debouncer,
        notify::{EventKind, RecommendedWatcher, RecursiveMode},
    },
    tracing::{debug, warn},
};

/// Debounce window for change events.
const DEBOUNCE: Duration = Duration::from_millis(250);

/// Index of the watched root that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginChanged(pub usize);

/// Watches plugin source trees with debouncing.
///
/// Must be kept alive (not dropped) for events to continue.
pub struct PluginWatcher {
    _debouncers: Vec<Debouncer<RecommendedWatcher, RecommendedCache>>,
}

impl PluginWatcher {
    /// Start watching the given plugin roots. Returns the watcher and a
    /// receiver yielding the index of whichever root changed.
    pub fn start(roots: &[PathBuf]) -> Result<(Self, mpsc::Receiver<PluginChanged>)> {
        let (tx, rx) = mpsc::channel();

        let mut debouncers = Vec::with_capacity(roots.len());
        for (idx, root) in roots.iter().enumerate() {
            let tx = tx.clone();
            let mut debouncer = new_debouncer(
                DEBOUNCE,
                None,
                move |result: DebounceEventResult| match result {
                    Ok(events) => {
                        let changed = events.iter().any(|event| {
                            matches!(
                                event.kind,
                                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                            ) && event.paths.iter().any(|p| !ignored(p))
                        });
                        if changed {
                            let _ = tx.send(PluginChanged(idx));
                        }
                    },
                    Err(errors) => {
                        for e in errors {
                            warn!(error = %e, "plugin watcher error");
                        }
                    },
                },
            )?;
            debouncer.watch(root, RecursiveMode::Recursive)?;
            debug!(root = %root.display(), "watching plugin directory");
            debouncers.push(debouncer);
        }

        Ok((
            Self {
                _debouncers: debouncers,
            },
            rx,
        ))
    }
}

/// Editor droppings and dependency churn don't trigger reinstalls.
fn ignored(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => {
            let name = name.to_string_lossy();
            name == "node_modules" || name.starts_with('.')
        },
        _ => false,
    })
}
