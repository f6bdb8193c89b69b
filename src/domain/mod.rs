//! Domain layer - Holiday entries, keys and form state

pub mod entry;
pub mod form;
pub mod identifier;

pub use entry::{Entry, EntryKey, EntryMap};
pub use form::{DeleteRequest, FormFields, FormMode, Intent};
pub use identifier::{IdentifierSource, UuidSource};
