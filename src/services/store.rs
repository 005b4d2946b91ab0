//! Order-preserving configuration store.
//!
//! Keeps one ordered sequence of document entries (pairs, comments, blank
//! lines) next to a key -> value index. The sequence is the serialization
//! source of truth; the index serves O(1) lookups. All mutation funnels
//! through [`ConfigStore::set`] and [`ConfigStore::remove`], so the two
//! substructures can never drift.

use std::collections::HashMap;
use std::fmt;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::domain::error::ConfigError;
use crate::domain::models::{ConfigChange, Entry, ListenerId};
use crate::infrastructure::fs;
use crate::output::table;

/// Callback invoked synchronously on every mutation, in registration order.
pub type ChangeListener = Box<dyn FnMut(&str, ConfigChange<'_>)>;

/// Staged result of scanning one source line.
///
/// `parse` validates the whole text into these before touching the store,
/// which makes a failing parse all-or-nothing.
enum ScannedLine {
    Pair(String, String),
    Comment(String),
    Blank,
}

/// In-memory, order-preserving `key = value` configuration store.
///
/// Parses line-oriented configuration text with `#` comments and blank
/// lines, keeps every line in document order, and serializes back to the
/// same form. Pair lines are normalized to `key = value` spacing on output;
/// everything else round-trips verbatim.
///
/// # Example
///
/// ```
/// use lineconf::ConfigStore;
///
/// let mut store = ConfigStore::new();
/// store.parse("# network\nhost = localhost:2255\n")?;
/// assert_eq!(store.get("host"), Some("localhost:2255"));
///
/// store.set("host", "localhost:9000");
/// assert_eq!(
///     store.stringify(),
///     "# network\nhost = localhost:9000\n"
/// );
/// # Ok::<(), lineconf::ConfigError>(())
/// ```
pub struct ConfigStore {
    entries: Vec<Entry>,
    index: HashMap<String, String>,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener_id: u64,
    default_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
            default_path: None,
        }
    }

    /// Creates an empty store remembering `path` for parameterless
    /// [`load`](Self::load) / [`store`](Self::store).
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::new();
        store.default_path = Some(path.into());
        store
    }

    /// Remembers `path` for parameterless [`load`](Self::load) /
    /// [`store`](Self::store).
    pub fn set_default_path(&mut self, path: impl Into<PathBuf>) {
        self.default_path = Some(path.into());
    }

    /// The remembered default path, if any.
    pub fn default_path(&self) -> Option<&Path> {
        self.default_path.as_deref()
    }

    /// Whether the remembered default path points at an existing file.
    pub fn default_path_exists(&self) -> bool {
        self.default_path
            .as_deref()
            .is_some_and(|path| path.exists())
    }

    /// Parses configuration text and appends its lines to the store.
    ///
    /// Lines whose trimmed form starts with `#` become comments (kept
    /// verbatim), empty or whitespace-only lines become blanks, and every
    /// other line must contain `=`: the text left of the first `=` is the
    /// key, everything right of it the value, both trimmed. Pair lines go
    /// through the same upsert path as [`set`](Self::set), so a key that
    /// appears twice keeps the position of its first occurrence and the
    /// value of its last, and listeners fire per parsed pair.
    ///
    /// Parsing is all-or-nothing: a line without `=` fails with
    /// [`ConfigError::MalformedLine`] and leaves the store untouched.
    /// Repeated calls accumulate; `parse` never clears existing entries.
    pub fn parse(&mut self, source: &str) -> Result<(), ConfigError> {
        let mut scanned = Vec::new();
        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                scanned.push(ScannedLine::Comment(line.to_string()));
            } else if trimmed.is_empty() {
                scanned.push(ScannedLine::Blank);
            } else {
                let Some((key, value)) = line.split_once('=') else {
                    return Err(ConfigError::MalformedLine(line.to_string()));
                };
                scanned.push(ScannedLine::Pair(
                    key.trim().to_string(),
                    value.trim().to_string(),
                ));
            }
        }

        let line_count = scanned.len();
        for line in scanned {
            match line {
                ScannedLine::Comment(text) => self.entries.push(Entry::Comment(text)),
                ScannedLine::Blank => self.entries.push(Entry::Blank),
                ScannedLine::Pair(key, value) => self.set(key, value),
            }
        }
        debug!(lines = line_count, "parsed configuration text");
        Ok(())
    }

    /// Inserts or updates a key.
    ///
    /// An existing pair is mutated in place, keeping its document position;
    /// a new key appends a pair at the end. Registered listeners are then
    /// invoked with the key and new value, in registration order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.index.insert(key.clone(), value.clone());
        let existing = self
            .entries
            .iter_mut()
            .find(|entry| entry.key() == Some(key.as_str()));
        if let Some(Entry::Pair { value: slot, .. }) = existing {
            *slot = value.clone();
        } else {
            self.entries.push(Entry::Pair {
                key: key.clone(),
                value: value.clone(),
            });
        }
        self.notify(&key, ConfigChange::Set(&value));
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(String::as_str)
    }

    /// Returns the value stored under `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Removes `key` and its pair entry, returning the removed value.
    ///
    /// Listeners are notified with [`ConfigChange::Removed`] only when a
    /// pair was actually removed; removing an absent key is a silent no-op.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed = self.index.remove(key)?;
        if let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.key() == Some(key))
        {
            self.entries.remove(position);
        }
        self.notify(key, ConfigChange::Removed);
        Some(removed)
    }

    /// Whether `key` is currently set.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Total number of document entries, comments and blank lines included.
    ///
    /// This is the literal line count of the serialized document, not the
    /// number of settings; see [`pair_count`](Self::pair_count) for that.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of effective `key = value` settings.
    pub fn pair_count(&self) -> usize {
        self.index.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the ordered document model.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Empties the document and the index. Listeners stay registered and
    /// are not notified.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Snapshot copy of the current key -> value mapping, decoupled from
    /// future mutation.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.index.clone()
    }

    /// Fetches `key` and parses it with `T`'s [`FromStr`]; returns
    /// `default` when the key is missing or the value does not parse.
    pub fn get_parsed<T: FromStr>(&self, key: &str, default: T) -> T {
        self.get(key)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    /// Typed getter for `i8`.
    pub fn get_i8(&self, key: &str, default: i8) -> i8 {
        self.get_parsed(key, default)
    }

    /// Typed getter for `i16`.
    pub fn get_i16(&self, key: &str, default: i16) -> i16 {
        self.get_parsed(key, default)
    }

    /// Typed getter for `i32`.
    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.get_parsed(key, default)
    }

    /// Typed getter for `i64`.
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get_parsed(key, default)
    }

    /// Typed getter for `bool`; accepts `true` and `false`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get_parsed(key, default)
    }

    /// Typed getter for `char`; the value must be exactly one character.
    pub fn get_char(&self, key: &str, default: char) -> char {
        self.get_parsed(key, default)
    }

    /// Typed getter for `f32`.
    ///
    /// Besides standard float syntax, a single trailing `f`/`F`/`d`/`D`
    /// literal suffix is accepted, so `3f` reads as `3.0`.
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.get(key).and_then(parse_float).unwrap_or(default)
    }

    /// Typed getter for `f64`. Accepts the same trailing literal suffixes
    /// as [`get_f32`](Self::get_f32).
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(parse_float).unwrap_or(default)
    }

    /// Serializes the document in entry order.
    ///
    /// Comments are emitted verbatim, blanks as bare line breaks, and pairs
    /// in the canonical `key = value` form, each terminated with `\n`.
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            match entry {
                Entry::Comment(text) => {
                    out.push_str(text);
                    out.push('\n');
                }
                Entry::Blank => out.push('\n'),
                Entry::Pair { key, value } => {
                    out.push_str(key);
                    out.push_str(" = ");
                    out.push_str(value);
                    out.push('\n');
                }
            }
        }
        out
    }

    /// Renders the effective settings (pairs only, comments and blanks
    /// excluded) as a two-column `Key`/`Value` table. `decorated` toggles
    /// borders. Does not mutate the store.
    pub fn to_formatted_effective_string(&self, decorated: bool) -> String {
        let rows: Vec<Vec<String>> = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Pair { key, value } => Some(vec![key.clone(), value.clone()]),
                _ => None,
            })
            .collect();
        table::render(&["Key", "Value"], &rows, decorated)
    }

    /// Registers a change listener and returns its registration handle.
    ///
    /// Duplicate registrations are allowed; each one fires once per event.
    pub fn add_change_listener(
        &mut self,
        listener: impl FnMut(&str, ConfigChange<'_>) + 'static,
    ) -> ListenerId {
        let id = ListenerId::new(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes the listener registered under `id`; returns whether one was
    /// removed.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Drops every registered listener.
    pub fn clear_change_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Parses the file at `path` into the store.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let text = fs::read_all(path.as_ref())?;
        self.parse(&text)
    }

    /// Parses the remembered default path into the store.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let path = self.default_path.clone().ok_or(ConfigError::NoDefaultPath)?;
        self.load_path(path)
    }

    /// Reads `reader` to the end and parses the text into the store.
    pub fn load_reader(&mut self, mut reader: impl Read) -> Result<(), ConfigError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse(&text)
    }

    /// Writes the serialized document to the file at `path`.
    pub fn store_path(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write_all(path.as_ref(), &self.stringify())
    }

    /// Writes the serialized document to the remembered default path.
    pub fn store(&self) -> Result<(), ConfigError> {
        let path = self.default_path.as_deref().ok_or(ConfigError::NoDefaultPath)?;
        self.store_path(path)
    }

    /// Writes the serialized document to `writer`.
    pub fn store_writer(&self, mut writer: impl Write) -> Result<(), ConfigError> {
        writer.write_all(self.stringify().as_bytes())?;
        Ok(())
    }

    fn notify(&mut self, key: &str, change: ConfigChange<'_>) {
        for (_, listener) in &mut self.listeners {
            listener(key, change);
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("listeners", &self.listeners.len())
            .field("default_path", &self.default_path)
            .finish()
    }
}

/// Float parse with optional Java-style literal suffix (`3f`, `1.5D`).
fn parse_float<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse()
        .ok()
        .or_else(|| strip_float_suffix(raw)?.parse().ok())
}

fn strip_float_suffix(raw: &str) -> Option<&str> {
    match raw.strip_suffix(['f', 'F', 'd', 'D']) {
        Some(stripped) if !stripped.is_empty() => Some(stripped),
        _ => None,
    }
}
