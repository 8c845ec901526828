//! On-disk copy of the saved header state.

use anyhow::{Context, Result};
use std::{fs, io, path::Path};

use collapsible_tui::{CollapsibleState, SavedStateMap};
use collapsible_utils::{atomic_write, recover_bak_file};

/// Reads a saved-state map. Any failure is logged and treated as "nothing saved".
pub fn load(path: &Path) -> Option<SavedStateMap> {
    recover_bak_file(path);

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), "Failed to read saved state: {err}");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(map) => Some(map),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Ignoring malformed saved state: {err}");
            None
        }
    }
}

pub fn store(path: &Path, state: &CollapsibleState) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(&state.save()).context("failed to encode saved state")?;
    atomic_write(path, &bytes)
        .with_context(|| format!("failed to write saved state to {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Saved header state");
    Ok(())
}
