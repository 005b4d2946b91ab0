//! Infrastructure layer module
//!
//! File-backed read/write for configuration documents. The store core never
//! touches the filesystem directly; it goes through this layer.

pub mod fs;
