//! Application layer - Use cases and orchestration

pub mod entries;
pub mod form;
pub mod init;
pub mod list_presenter;
pub mod manage_config;

pub use entries::EntryRepository;
pub use form::{DeleteOutcome, FormController, SubmitOutcome};
pub use list_presenter::ListPresenter;
pub use manage_config::ConfigService;
