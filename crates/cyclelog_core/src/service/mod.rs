//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the pure computations (indicator matching, visit plan) callable
//!   without a repository, over any entry snapshot.

pub mod entry_service;
pub mod insight_service;
pub mod visit_plan;
