//! Holiday entries and their keys

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque unique key of a holiday entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryKey(String);

impl EntryKey {
    pub fn new(key: impl Into<String>) -> Self {
        EntryKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryKey {
    fn from(key: &str) -> Self {
        EntryKey::new(key)
    }
}

/// A single holiday: a calendar date and its description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: EntryKey,
    pub date: NaiveDate,
    pub descr: String,
}

impl Entry {
    pub fn new(key: EntryKey, date: NaiveDate, descr: impl Into<String>) -> Self {
        Entry {
            key,
            date,
            descr: descr.into(),
        }
    }

    /// Human-readable `date | descr` label used by lists and prompts
    pub fn label(&self) -> String {
        format!("{} | {}", self.date.format("%Y-%m-%d"), self.descr)
    }
}

/// All entries of a repository, indexed by key
pub type EntryMap = BTreeMap<EntryKey, Entry>;
