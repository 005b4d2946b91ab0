//! Change-notification types for configuration listeners.

use std::fmt;

/// Payload passed to change listeners on every mutation.
///
/// Removal is its own variant rather than an in-band sentinel string, so it
/// can never collide with a legal configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange<'a> {
    /// The key was inserted or its value replaced.
    Set(&'a str),
    /// The key and its pair entry were removed.
    Removed,
}

/// Opaque handle identifying one listener registration.
///
/// Returned by listener registration and used for targeted removal.
/// Duplicate registrations of the same callback get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
