//! Initialize holidays directory use case

use crate::error::Result;
use crate::infrastructure::{Config, HolidaysDir, PersistentStore};
use std::fs;
use std::path::Path;

/// Initialize a new holidays directory at the specified path with an empty slot.
pub fn init(path: &Path) -> Result<HolidaysDir> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let dir = HolidaysDir::new(path.to_path_buf());
    dir.initialize()?;

    let config = Config::default();
    dir.save_config(&config)?;

    let mut store = dir.store(&config);
    store.save(&Default::default())?;

    tracing::info!(root = %path.display(), "initialized holidays directory");
    Ok(dir)
}
