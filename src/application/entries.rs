//! Entry repository: the authoritative in-memory collection of holidays
//!
//! Every mutation is followed by [`EntryRepository::sync`], which writes the
//! whole mapping to the injected [`PersistentStore`]. Storage errors are
//! returned to the caller; the in-memory mapping keeps the mutation.

use crate::domain::{Entry, EntryKey, EntryMap};
use crate::error::Result;
use crate::infrastructure::PersistentStore;

pub struct EntryRepository<S: PersistentStore> {
    entries: EntryMap,
    store: S,
}

impl<S: PersistentStore> EntryRepository<S> {
    /// Read the slot once and take ownership of the store
    pub fn open(store: S) -> Result<Self> {
        let entries = store.load()?;
        tracing::debug!(count = entries.len(), "opened holidays repository");
        Ok(EntryRepository { entries, store })
    }

    /// All entries in key order
    pub fn list(&self) -> Vec<&Entry> {
        self.entries.values().collect()
    }

    pub fn get(&self, key: &EntryKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &EntryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &EntryKey> {
        self.entries.keys()
    }

    /// Insert or replace the entry at its key
    pub fn upsert(&mut self, entry: Entry) -> Result<()> {
        tracing::debug!(key = %entry.key, "upsert holiday");
        self.entries.insert(entry.key.clone(), entry);
        self.sync()
    }

    /// Remove the entry at `key`; absent keys are not an error
    pub fn delete(&mut self, key: &EntryKey) -> Result<()> {
        let removed = self.entries.remove(key).is_some();
        tracing::debug!(%key, removed, "delete holiday");
        self.sync()
    }

    /// Write the full mapping to the store, replacing its previous contents
    pub fn sync(&mut self) -> Result<()> {
        self.store.save(&self.entries)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
