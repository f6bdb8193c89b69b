//! Read-only view of the repository that raises edit/delete intents

use crate::application::EntryRepository;
use crate::domain::{Entry, EntryKey, Intent};
use crate::error::{HolidaysError, Result};
use crate::infrastructure::PersistentStore;

pub struct ListPresenter<'a, S: PersistentStore> {
    repository: &'a EntryRepository<S>,
}

impl<'a, S: PersistentStore> ListPresenter<'a, S> {
    pub fn new(repository: &'a EntryRepository<S>) -> Self {
        ListPresenter { repository }
    }

    pub fn entries(&self) -> Vec<&'a Entry> {
        self.repository.list()
    }

    /// Find an entry by exact key or unique key prefix
    pub fn resolve(&self, key_or_prefix: &str) -> Result<&'a Entry> {
        if let Some(entry) = self.repository.get(&EntryKey::from(key_or_prefix)) {
            return Ok(entry);
        }

        let matches: Vec<&EntryKey> = if key_or_prefix.is_empty() {
            Vec::new()
        } else {
            self.repository
                .keys()
                .filter(|key| key.as_str().starts_with(key_or_prefix))
                .collect()
        };

        match matches.as_slice() {
            [key] => self
                .repository
                .get(key)
                .ok_or_else(|| HolidaysError::EntryNotFound(key_or_prefix.to_string())),
            [] => Err(HolidaysError::EntryNotFound(key_or_prefix.to_string())),
            many => Err(HolidaysError::AmbiguousKey {
                prefix: key_or_prefix.to_string(),
                count: many.len(),
            }),
        }
    }

    pub fn edit_intent(&self, key_or_prefix: &str) -> Result<Intent> {
        Ok(Intent::Edit(self.resolve(key_or_prefix)?.clone()))
    }

    pub fn delete_intent(&self, key_or_prefix: &str) -> Result<Intent> {
        Ok(Intent::Delete(self.resolve(key_or_prefix)?.clone()))
    }

    /// Render the list, one `key  date | descr` row per entry
    pub fn render(&self) -> String {
        let entries = self.entries();
        if entries.is_empty() {
            return "No holidays found".to_string();
        }

        let mut output = String::new();
        for entry in entries {
            output.push_str(&format!("{}  {}\n", entry.key, entry.label()));
        }
        output
    }
}
