//! Command-line interface for inspecting and editing configuration files.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    name = "lineconf",
    version,
    about = "Inspect and edit key = value configuration files without disturbing comments or layout"
)]
pub struct Cli {
    /// Configuration file to operate on.
    #[arg(short, long, global = true, default_value = "lineconf.conf")]
    pub file: PathBuf,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the value stored under a key.
    Get {
        /// Key to look up.
        key: String,
        /// Value to print when the key is absent.
        #[arg(long)]
        default: Option<String>,
    },
    /// Set or update a key, then write the file back.
    Set {
        /// Key to set.
        key: String,
        /// Value to store.
        value: String,
    },
    /// Remove a key, then write the file back.
    Remove {
        /// Key to remove.
        key: String,
    },
    /// Render the effective settings as a table.
    List {
        /// Borderless output, suitable for piping.
        #[arg(long)]
        plain: bool,
        /// Emit the effective settings as a JSON object instead.
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },
    /// Print the document in its canonical serialized form.
    Cat {
        /// Emit the ordered entry model as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}
