//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod directory;
pub mod store;

pub use config::Config;
pub use directory::HolidaysDir;
pub use store::{JsonFileStore, MemoryStore, PersistentStore};
