//! Line-level document model for the textual configuration format.

use serde::{Deserialize, Serialize};

/// One line of a configuration document.
///
/// A parsed document is an ordered sequence of entries. Serialization walks
/// that sequence, which is how comments and blank lines survive a
/// parse/stringify round trip. Entries have no identity beyond their
/// position; `Pair` keys are kept unique by the store, not by the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Entry {
    /// An active `key = value` setting.
    Pair {
        /// Setting name, unique among `Pair` entries at any instant.
        key: String,
        /// Current value, may be empty.
        value: String,
    },
    /// A full comment line, kept verbatim including the leading `#`.
    Comment(String),
    /// An empty or whitespace-only line, kept as a bare line break.
    Blank,
}

impl Entry {
    /// Returns the key when this entry is a `Pair`.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Pair { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Returns the value when this entry is a `Pair`.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Pair { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Whether this entry is a `key = value` pair.
    pub fn is_pair(&self) -> bool {
        matches!(self, Self::Pair { .. })
    }

    /// Whether this entry is a comment line.
    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Whether this entry is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_accessors() {
        let entry = Entry::Pair {
            key: "host".to_string(),
            value: "localhost".to_string(),
        };
        assert!(entry.is_pair());
        assert_eq!(entry.key(), Some("host"));
        assert_eq!(entry.value(), Some("localhost"));
    }

    #[test]
    fn test_non_pair_accessors() {
        let comment = Entry::Comment("# note".to_string());
        assert!(comment.is_comment());
        assert_eq!(comment.key(), None);
        assert_eq!(comment.value(), None);

        let blank = Entry::Blank;
        assert!(blank.is_blank());
        assert_eq!(blank.key(), None);
    }
}
