//! Config management use case

use crate::error::{HolidaysError, Result};
use crate::infrastructure::config::validate_slot;
use crate::infrastructure::{Config, HolidaysDir};

pub const CONFIG_KEYS: &str = "slot, confirm_delete";

/// Service for managing holidays configuration
pub struct ConfigService {
    dir: HolidaysDir,
}

impl ConfigService {
    pub fn new(dir: HolidaysDir) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.dir.load_config()?;

        match key {
            "slot" => Ok(config.slot),
            "confirm_delete" => Ok(config.confirm_delete.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.dir.load_config()?;

        match key {
            "slot" => {
                validate_slot(value)?;
                config.slot = value.to_string();
            }
            "confirm_delete" => {
                config.confirm_delete = parse_bool(value)?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.dir.save_config(&config)?;
        tracing::debug!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.dir.load_config()
    }
}

fn unknown_key(key: &str) -> HolidaysError {
    HolidaysError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, CONFIG_KEYS
    ))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(HolidaysError::Config(format!(
            "Invalid boolean: '{}'. Use true or false",
            value
        ))),
    }
}
