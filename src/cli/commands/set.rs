//! `set` command: upsert one key and write the file back.

use std::path::Path;

use anyhow::{Context, Result};

use crate::services::store::ConfigStore;

/// Sets `key` to `value` in `file`, creating the file when absent.
pub fn execute(file: &Path, key: &str, value: &str) -> Result<()> {
    let mut store = ConfigStore::with_default_path(file);
    if store.default_path_exists() {
        store
            .load()
            .with_context(|| format!("failed to load {}", file.display()))?;
    }

    store.set(key, value);
    store
        .store()
        .with_context(|| format!("failed to write {}", file.display()))?;
    Ok(())
}
