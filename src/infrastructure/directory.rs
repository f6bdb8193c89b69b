//! Holidays directory discovery and layout

use crate::error::{HolidaysError, Result};
use crate::infrastructure::{Config, JsonFileStore};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory containing a `.holidays` folder with config and slots
#[derive(Debug, Clone)]
pub struct HolidaysDir {
    pub root: PathBuf,
}

impl HolidaysDir {
    /// Create a handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        HolidaysDir { root }
    }

    /// Discover the holidays root by walking up from the current directory.
    /// First checks the HOLIDAYS_ROOT environment variable.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("HOLIDAYS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_holidays_dir(&path) {
                return Ok(HolidaysDir::new(path));
            } else {
                return Err(HolidaysError::Config(format!(
                    "HOLIDAYS_ROOT is set to '{}' but no .holidays directory found. \
                    Run 'holidays init' in that directory or unset HOLIDAYS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the holidays root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_holidays_dir(&current) {
                tracing::debug!(root = %current.display(), "found holidays directory");
                return Ok(HolidaysDir::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(HolidaysError::NotHolidaysDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_holidays_dir(path: &Path) -> bool {
        path.join(".holidays").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_holidays_dir(&self.root)
    }

    /// Create the .holidays directory
    pub fn initialize(&self) -> Result<()> {
        let holidays_dir = self.root.join(".holidays");

        if holidays_dir.exists() {
            return Err(HolidaysError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&holidays_dir)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// The JSON slot selected by the given config
    pub fn store(&self, config: &Config) -> JsonFileStore {
        JsonFileStore::new(self.root.join(".holidays").join(config.slot_file_name()))
    }
}
