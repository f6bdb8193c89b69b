//! Output formatting utilities

use crate::domain::Entry;

/// Format one holiday for `show`
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "key:   {}\ndate:  {}\ndescr: {}\n",
        entry.key,
        entry.date.format("%Y-%m-%d"),
        entry.descr
    )
}

/// Confirmation line after a save or delete
pub fn format_change(verb: &str, entry: &Entry) -> String {
    format!("{} {}  {}", verb, entry.key, entry.label())
}
