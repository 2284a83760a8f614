pub mod repo;

pub use repo::{Connection, History, METADATA_DIR};
