//! Add/edit form controller
//!
//! The form is either adding a new holiday under a pending fresh key, or
//! editing an existing one. Submitting in either mode upserts the entry and
//! returns the form to an empty Add state. Deletes go through a two-step
//! request/resolve exchange so the caller decides how to ask the user.

use crate::application::EntryRepository;
use crate::domain::{DeleteRequest, Entry, FormFields, FormMode, IdentifierSource, Intent};
use crate::error::Result;
use crate::infrastructure::PersistentStore;
use chrono::NaiveDate;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The entry was written to the repository
    Saved(Entry),
    /// A required field is empty; nothing changed
    Blocked,
}

/// Result of answering a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Entry),
    Declined,
    NothingPending,
}

pub struct FormController<I: IdentifierSource> {
    mode: FormMode,
    fields: FormFields,
    pending_delete: Option<DeleteRequest>,
    ids: I,
}

impl<I: IdentifierSource> FormController<I> {
    /// A form in the empty Add state
    pub fn new(mut ids: I) -> Self {
        let fields = FormFields::empty(Some(ids.next_key()));
        FormController {
            mode: FormMode::Add,
            fields,
            pending_delete: None,
            ids,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    pub fn set_descr(&mut self, descr: impl Into<String>) {
        self.fields.descr = descr.into();
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.fields.date = date;
    }

    /// Submission is available once both required fields hold a value
    pub fn can_submit(&self) -> bool {
        self.fields.is_complete()
    }

    /// Commit the form to the repository
    pub fn submit<S: PersistentStore>(
        &mut self,
        repository: &mut EntryRepository<S>,
    ) -> Result<SubmitOutcome> {
        if !self.can_submit() {
            return Ok(SubmitOutcome::Blocked);
        }

        let mut fields = self.fields.clone();
        match &self.mode {
            FormMode::Add => {
                let mut key = match fields.key.take() {
                    Some(key) => key,
                    None => self.ids.next_key(),
                };
                while repository.contains(&key) {
                    tracing::debug!(%key, "pending key already taken, drawing another");
                    key = self.ids.next_key();
                }
                fields.key = Some(key);
            }
            FormMode::Edit(key) => fields.key = Some(key.clone()),
        }

        let Some(entry) = fields.to_entry() else {
            return Ok(SubmitOutcome::Blocked);
        };

        repository.upsert(entry.clone())?;
        tracing::info!(key = %entry.key, mode = self.mode.title(), "saved holiday");
        self.enter_add();
        Ok(SubmitOutcome::Saved(entry))
    }

    /// Discard the fields and return to Add
    pub fn cancel(&mut self) {
        self.enter_add();
    }

    /// Switch to editing `entry`, replacing any edit in progress
    pub fn edit(&mut self, entry: &Entry) {
        self.mode = FormMode::Edit(entry.key.clone());
        self.fields = FormFields::from_entry(entry);
    }

    /// Record a pending delete and return the question to put to the user
    pub fn request_delete(&mut self, entry: Entry) -> DeleteRequest {
        let request = DeleteRequest::new(entry);
        self.pending_delete = Some(request.clone());
        request
    }

    /// Apply or discard the pending delete
    pub fn resolve_delete<S: PersistentStore>(
        &mut self,
        repository: &mut EntryRepository<S>,
        confirmed: bool,
    ) -> Result<DeleteOutcome> {
        let Some(request) = self.pending_delete.take() else {
            return Ok(DeleteOutcome::NothingPending);
        };

        if !confirmed {
            return Ok(DeleteOutcome::Declined);
        }

        repository.delete(&request.entry.key)?;
        tracing::info!(key = %request.entry.key, "deleted holiday");
        self.enter_add();
        Ok(DeleteOutcome::Deleted(request.entry))
    }

    /// Route a list intent; delete intents come back as a request to confirm
    pub fn apply(&mut self, intent: Intent) -> Option<DeleteRequest> {
        match intent {
            Intent::Edit(entry) => {
                self.edit(&entry);
                None
            }
            Intent::Delete(entry) => Some(self.request_delete(entry)),
        }
    }

    fn enter_add(&mut self) {
        self.mode = FormMode::Add;
        self.fields = FormFields::empty(Some(self.ids.next_key()));
    }
}
