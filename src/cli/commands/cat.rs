//! `cat` command: print the canonical serialized document.

use std::path::Path;

use anyhow::{Context, Result};

use crate::services::store::ConfigStore;

/// Prints `file` in canonical form, or its ordered entry model as JSON.
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let mut store = ConfigStore::new();
    store
        .load_path(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(store.entries())?);
    } else {
        print!("{}", store.stringify());
    }
    Ok(())
}
