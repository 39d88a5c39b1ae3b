//! Domain model for the health journal.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Hold the static catalogs (mood tags, indicator checklists) as data.
//!
//! # Invariants
//! - Every saved entry and symptom row is identified by a stable UUID.
//! - Catalog data is fixed at build time; users never extend it.

pub mod entry;
pub mod indicator;
pub mod mood;
