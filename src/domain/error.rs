use thiserror::Error;

/// Errors surfaced by parsing and file-backed load/store operations.
///
/// Typed-getter parse failures are deliberately absent: those are recovered
/// locally and replaced by the caller-supplied default.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed line, no '=' separator: {0:?}")]
    MalformedLine(String),

    #[error("Default path not defined")]
    NoDefaultPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
