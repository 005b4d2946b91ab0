//! Whole-file read/write helpers.
//!
//! The contract is deliberately small: read the full textual payload or
//! write it back, releasing the file on every exit path. Failures are
//! propagated unchanged as [`ConfigError::Io`].

use std::path::Path;

use tracing::debug;

use crate::domain::error::ConfigError;

/// Reads the full textual payload of the file at `path`.
pub fn read_all(path: &Path) -> Result<String, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read configuration file");
    Ok(text)
}

/// Writes `text` to the file at `path`, creating or truncating it.
pub fn write_all(path: &Path, text: &str) -> Result<(), ConfigError> {
    std::fs::write(path, text)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote configuration file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_then_read_round_trips() {
        let file = NamedTempFile::new().unwrap();
        write_all(file.path(), "key = value\n").unwrap();
        assert_eq!(read_all(file.path()).unwrap(), "key = value\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_all(&dir.path().join("does-not-exist.conf"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
