//! Lineconf - order-preserving textual configuration store
//!
//! Lineconf parses line-oriented `key = value` documents while keeping
//! comments, blank lines, and pair order intact, provides O(1) lookups with
//! typed accessors and change notification, and serializes back to the same
//! textual form.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the line-level document model and error taxonomy
//! - **Service Layer** (`services`): the order-preserving store itself
//! - **Infrastructure Layer** (`infrastructure`): file-backed load/store
//! - **Output Layer** (`output`): table rendering for effective settings
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use lineconf::ConfigStore;
//!
//! let mut store = ConfigStore::new();
//! store.parse("# endpoints\n\nhost = localhost:2255\nretries = 3\n")?;
//!
//! assert_eq!(store.get("host"), Some("localhost:2255"));
//! assert_eq!(store.get_i32("retries", 1), 3);
//!
//! store.set("host", "localhost:9000");
//! assert_eq!(
//!     store.stringify(),
//!     "# endpoints\n\nhost = localhost:9000\nretries = 3\n"
//! );
//! # Ok::<(), lineconf::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod output;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::ConfigError;
pub use domain::models::{ConfigChange, Entry, ListenerId};
pub use services::store::{ChangeListener, ConfigStore};
