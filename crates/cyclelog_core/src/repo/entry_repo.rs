//! Entry repository contract and session-scoped implementation.
//!
//! # Responsibility
//! - Own the ordered collection of saved entries.
//! - Hand out owned snapshots so readers never observe later writes.
//!
//! # Invariants
//! - Writes call `LogEntry::validate()` before the entry is stored.
//! - Storage order is insertion order, newest first.
//! - Entry IDs are unique within one repository.

use crate::model::entry::{EntryId, EntryValidationError, LogEntry};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(EntryValidationError),
    DuplicateId(EntryId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "entry already stored: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Storage interface for saved entries.
pub trait EntryRepository {
    /// Stores one entry ahead of all existing ones.
    fn insert_entry(&mut self, entry: LogEntry) -> RepoResult<EntryId>;
    /// Gets one entry by id.
    fn get_entry(&self, id: EntryId) -> Option<LogEntry>;
    /// Returns an owned snapshot, newest first.
    fn list_entries(&self) -> Vec<LogEntry>;
    /// Number of stored entries.
    fn entry_count(&self) -> usize;
}

/// Process-lifetime entry store. Nothing outlives the session.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEntryRepository {
    // Oldest first internally so inserts are O(1); reads reverse.
    entries: Vec<LogEntry>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryRepository for InMemoryEntryRepository {
    fn insert_entry(&mut self, entry: LogEntry) -> RepoResult<EntryId> {
        entry.validate()?;
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            return Err(RepoError::DuplicateId(entry.id));
        }
        let id = entry.id;
        self.entries.push(entry);
        Ok(id)
    }

    fn get_entry(&self, id: EntryId) -> Option<LogEntry> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }

    fn list_entries(&self) -> Vec<LogEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
