//! Sources of fresh entry keys

use crate::domain::EntryKey;
use uuid::Uuid;

/// Produces a new opaque unique key on every call
pub trait IdentifierSource {
    fn next_key(&mut self) -> EntryKey;
}

/// Random UUID v4 keys
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdentifierSource for UuidSource {
    fn next_key(&mut self) -> EntryKey {
        EntryKey::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic keys `id-1`, `id-2`, ... for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: usize,
}

#[cfg(test)]
impl SequentialIds {
    /// Start the sequence at `next` instead of 1; 0 behaves like 1
    pub fn starting_at(next: usize) -> Self {
        SequentialIds {
            next: next.saturating_sub(1),
        }
    }
}

#[cfg(test)]
impl IdentifierSource for SequentialIds {
    fn next_key(&mut self) -> EntryKey {
        self.next += 1;
        EntryKey::new(format!("id-{}", self.next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_keys_are_distinct() {
        let mut source = UuidSource;
        let a = source.next_key();
        let b = source.next_key();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_sequential_ids() {
        let mut source = SequentialIds::default();
        assert_eq!(source.next_key().as_str(), "id-1");
        assert_eq!(source.next_key().as_str(), "id-2");

        let mut source = SequentialIds::starting_at(5);
        assert_eq!(source.next_key().as_str(), "id-5");

        let mut source = SequentialIds::starting_at(0);
        assert_eq!(source.next_key().as_str(), "id-1");
    }
}
