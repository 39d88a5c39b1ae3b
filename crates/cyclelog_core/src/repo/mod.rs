//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the entry storage contract used by services.
//! - Keep the session store injectable instead of process-global.
//!
//! # Invariants
//! - Repository writes must enforce `LogEntry::validate()` before storing.
//! - Reads return owned snapshots, never references into live storage.

pub mod entry_repo;
