//! `get` command: print one value.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::services::store::ConfigStore;

/// Prints the value stored under `key`, falling back to `default`.
pub fn execute(file: &Path, key: &str, default: Option<&str>) -> Result<()> {
    let mut store = ConfigStore::new();
    store
        .load_path(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    match store.get(key).or(default) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!("key {key:?} not found in {}", file.display()),
    }
}
