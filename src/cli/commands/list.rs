//! `list` command: render the effective settings.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::services::store::ConfigStore;

/// Prints the effective settings of `file` as a table or a JSON object.
pub fn execute(file: &Path, plain: bool, json: bool) -> Result<()> {
    let mut store = ConfigStore::new();
    store
        .load_path(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    if json {
        // BTreeMap for stable key order in the emitted object.
        let map: BTreeMap<String, String> = store.to_map().into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        println!("{}", store.to_formatted_effective_string(!plain));
    }
    Ok(())
}
