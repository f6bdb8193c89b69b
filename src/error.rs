//! Error types for holidays

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the holidays application
#[derive(Debug, Error)]
pub enum HolidaysError {
    #[error("Not a holidays directory: {0}")]
    NotHolidaysDirectory(PathBuf),

    #[error("Holiday not found: {0}")]
    EntryNotFound(String),

    #[error("Ambiguous key '{prefix}' matches {count} holidays")]
    AmbiguousKey { prefix: String, count: usize },

    #[error("Form is incomplete: description and date are both required")]
    IncompleteForm,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HolidaysError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HolidaysError::NotHolidaysDirectory(_) => 2,
            HolidaysError::EntryNotFound(_) | HolidaysError::AmbiguousKey { .. } => 3,
            HolidaysError::IncompleteForm => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HolidaysError::NotHolidaysDirectory(path) => {
                format!(
                    "Not a holidays directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'holidays init' in this directory to start a list\n\
                    • Navigate to an existing holidays directory\n\
                    • Set HOLIDAYS_ROOT environment variable to your holidays path",
                    path.display()
                )
            }
            HolidaysError::EntryNotFound(key) => {
                format!(
                    "No holiday matches key: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'holidays list' to see the keys of saved holidays\n\
                    • A unique prefix of a key is enough (e.g., the first 8 characters)",
                    key
                )
            }
            HolidaysError::AmbiguousKey { prefix, count } => {
                format!(
                    "Key prefix '{}' matches {} holidays\n\n\
                    Suggestions:\n\
                    • Type more characters of the key\n\
                    • Use 'holidays list' to see the full keys",
                    prefix, count
                )
            }
            HolidaysError::IncompleteForm => {
                "Nothing saved: description and date are both required\n\n\
                Example:\n\
                holidays add --date 2024-07-04 --descr \"Trip\""
                    .to_string()
            }
            HolidaysError::Prompt(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run the command from an interactive terminal\n\
                    • Pass --yes to skip the confirmation\n\
                    • Disable confirmations: holidays config confirm_delete false",
                    msg
                )
            }
            HolidaysError::Config(msg) => {
                if msg.contains("Invalid slot") {
                    format!(
                        "{}\n\n\
                        Slot names may contain letters, digits, '-' and '_'\n\
                        Example: holidays config slot holidays-2024",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HolidaysError
pub type Result<T> = std::result::Result<T, HolidaysError>;
