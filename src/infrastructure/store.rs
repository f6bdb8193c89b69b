//! Persistent storage slot for the entry mapping
//!
//! A slot holds one JSON object. Top-level keys are entry keys and values are
//! records `{ "id", "descr", "date" }`, where `id` repeats the top-level key.
//! Slots written before keys were generated identifiers carry no `id`; their
//! top-level key (the date) is taken as the entry key.

use crate::domain::{Entry, EntryKey, EntryMap};
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A single named slot holding the serialized entry mapping
pub trait PersistentStore {
    /// Read the slot. An absent or unparsable slot yields an empty mapping.
    fn load(&self) -> Result<EntryMap>;

    /// Overwrite the slot with the given mapping
    fn save(&mut self, entries: &EntryMap) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    descr: String,
    date: NaiveDate,
}

/// Serialize the mapping into slot contents
pub fn encode_slot(entries: &EntryMap) -> Result<String> {
    let records: BTreeMap<&str, StoredEntry> = entries
        .iter()
        .map(|(key, entry)| {
            (
                key.as_str(),
                StoredEntry {
                    id: Some(key.as_str().to_string()),
                    descr: entry.descr.clone(),
                    date: entry.date,
                },
            )
        })
        .collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parse slot contents, treating absent or malformed contents as empty.
/// Records that fail to decode are skipped; the rest of the slot survives.
pub fn decode_slot(contents: Option<&[u8]>) -> EntryMap {
    let Some(contents) = contents else {
        return EntryMap::new();
    };

    let records: BTreeMap<String, serde_json::Value> = match serde_json::from_slice(contents) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("unparsable holidays slot, starting empty: {e}");
            return EntryMap::new();
        }
    };

    records
        .into_iter()
        .filter_map(|(key, value)| {
            let record: StoredEntry = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(%key, "skipping unreadable holiday record: {e}");
                    return None;
                }
            };
            if let Some(id) = record.id.as_deref() {
                if id != key {
                    tracing::debug!(%key, %id, "record id differs from slot key, using slot key");
                }
            }
            let key = EntryKey::new(key);
            let entry = Entry::new(key.clone(), record.date, record.descr);
            Some((key, entry))
        })
        .collect()
}

/// Slot stored as a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replace_with(&self, tmp_path: &Path) -> std::io::Result<()> {
        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        fs::rename(tmp_path, &self.path)
    }
}

impl PersistentStore for JsonFileStore {
    fn load(&self) -> Result<EntryMap> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(decode_slot(Some(contents.as_slice()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no holidays slot yet");
                Ok(decode_slot(None))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn save(&mut self, entries: &EntryMap) -> Result<()> {
        let contents = encode_slot(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.holidays-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("slot.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if let Err(e) = self.replace_with(&tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved holidays slot");
        Ok(())
    }
}

/// Slot kept in memory, holding the same serialized text a file would
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Start from pre-existing slot contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        MemoryStore {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl PersistentStore for MemoryStore {
    fn load(&self) -> Result<EntryMap> {
        Ok(decode_slot(self.contents.as_deref().map(str::as_bytes)))
    }

    fn save(&mut self, entries: &EntryMap) -> Result<()> {
        self.contents = Some(encode_slot(entries)?);
        Ok(())
    }
}
