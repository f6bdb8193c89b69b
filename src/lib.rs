//! holidays - Personal holiday list
//!
//! Keeps date + description pairs in a JSON slot inside a `.holidays`
//! directory, with an add/edit form and a list that raise edit and delete
//! intents.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::HolidaysError;
