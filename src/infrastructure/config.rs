//! Configuration management

use crate::error::{HolidaysError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SLOT: &str = "holidays";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the storage slot; entries live in `.holidays/<slot>.json`
    #[serde(default = "default_slot")]
    pub slot: String,
    /// Ask before deleting an entry
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slot: default_slot(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Load config from .holidays/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".holidays").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HolidaysError::NotHolidaysDirectory(path.to_path_buf())
            } else {
                HolidaysError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| HolidaysError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_slot(&config.slot)?;
        Ok(config)
    }

    /// Save config to .holidays/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let holidays_dir = path.join(".holidays");
        let config_path = holidays_dir.join("config.toml");

        if !holidays_dir.exists() {
            fs::create_dir(&holidays_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| HolidaysError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// File name of the storage slot
    pub fn slot_file_name(&self) -> String {
        format!("{}.json", self.slot)
    }
}

/// Slot names become file stems, so keep them to a safe alphabet
pub fn validate_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(HolidaysError::Config(format!(
            "Invalid slot name: '{}'",
            slot
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.slot, "holidays");
        assert!(config.confirm_delete);
        assert_eq!(config.slot_file_name(), "holidays.json");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            slot: "work".to_string(),
            confirm_delete: false,
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".holidays").exists());
        assert!(temp.path().join(".holidays/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".holidays")).unwrap();
        fs::write(temp.path().join(".holidays/config.toml"), "").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            HolidaysError::NotHolidaysDirectory(_) => {}
            other => panic!("Expected NotHolidaysDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_bad_slot() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".holidays")).unwrap();
        fs::write(
            temp.path().join(".holidays/config.toml"),
            "slot = \"../escape\"\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(HolidaysError::Config(_))
        ));
    }

    #[test]
    fn test_validate_slot() {
        assert!(validate_slot("holidays").is_ok());
        assert!(validate_slot("work_2024-q1").is_ok());
        assert!(validate_slot("").is_err());
        assert!(validate_slot("a/b").is_err());
        assert!(validate_slot("a.json").is_err());
    }
}
