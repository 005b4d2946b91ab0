//! `remove` command: delete one key and write the file back.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::services::store::ConfigStore;

/// Removes `key` from `file`; fails without writing when the key is absent.
pub fn execute(file: &Path, key: &str) -> Result<()> {
    let mut store = ConfigStore::with_default_path(file);
    store
        .load()
        .with_context(|| format!("failed to load {}", file.display()))?;

    if store.remove(key).is_none() {
        bail!("key {key:?} not found in {}", file.display());
    }

    store
        .store()
        .with_context(|| format!("failed to write {}", file.display()))?;
    Ok(())
}
