//! Add/edit form state and the intents that drive it

use crate::domain::{Entry, EntryKey};
use chrono::NaiveDate;

/// Whether the form creates a new entry or replaces an existing one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(EntryKey),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add",
            FormMode::Edit(_) => "Edit",
        }
    }
}

/// Field values of the form while the user types
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub descr: String,
    pub date: Option<NaiveDate>,
    pub key: Option<EntryKey>,
}

impl FormFields {
    /// Empty fields carrying a pending key
    pub fn empty(key: Option<EntryKey>) -> Self {
        FormFields {
            descr: String::new(),
            date: None,
            key,
        }
    }

    /// Fields seeded from an existing entry
    pub fn from_entry(entry: &Entry) -> Self {
        FormFields {
            descr: entry.descr.clone(),
            date: Some(entry.date),
            key: Some(entry.key.clone()),
        }
    }

    /// Both required fields hold a value
    pub fn is_complete(&self) -> bool {
        !self.descr.is_empty() && self.date.is_some()
    }

    /// Build the entry these fields describe, if complete and keyed
    pub fn to_entry(&self) -> Option<Entry> {
        if !self.is_complete() {
            return None;
        }
        Some(Entry::new(self.key.clone()?, self.date?, self.descr.clone()))
    }
}

/// A user action raised from the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Edit(Entry),
    Delete(Entry),
}

/// A delete awaiting the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub entry: Entry,
}

impl DeleteRequest {
    pub fn new(entry: Entry) -> Self {
        DeleteRequest { entry }
    }

    /// The question put to the user
    pub fn question(&self) -> String {
        format!("Are you sure to delete the item: {}?", self.entry.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_fields_are_incomplete() {
        let fields = FormFields::empty(Some(EntryKey::from("k")));
        assert!(!fields.is_complete());
        assert!(fields.to_entry().is_none());
    }

    #[test]
    fn test_descr_without_date_is_incomplete() {
        let fields = FormFields {
            descr: "Trip".to_string(),
            date: None,
            key: Some(EntryKey::from("k")),
        };
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_complete_fields_build_entry() {
        let fields = FormFields {
            descr: "Trip".to_string(),
            date: Some(date(2024, 7, 4)),
            key: Some(EntryKey::from("k")),
        };
        let entry = fields.to_entry().unwrap();
        assert_eq!(entry.key.as_str(), "k");
        assert_eq!(entry.descr, "Trip");
        assert_eq!(entry.date, date(2024, 7, 4));
    }

    #[test]
    fn test_from_entry_round_trips() {
        let entry = Entry::new(EntryKey::from("a"), date(2024, 1, 1), "Old");
        assert_eq!(FormFields::from_entry(&entry).to_entry(), Some(entry));
    }

    #[test]
    fn test_delete_question() {
        let request = DeleteRequest::new(Entry::new(
            EntryKey::from("a"),
            date(2024, 12, 25),
            "Christmas",
        ));
        assert_eq!(
            request.question(),
            "Are you sure to delete the item: 2024-12-25 | Christmas?"
        );
    }

    #[test]
    fn test_mode_titles() {
        assert_eq!(FormMode::Add.title(), "Add");
        assert_eq!(FormMode::Edit(EntryKey::from("a")).title(), "Edit");
        assert_eq!(FormMode::default(), FormMode::Add);
    }
}
