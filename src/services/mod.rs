pub mod store;

pub use store::{ChangeListener, ConfigStore};
