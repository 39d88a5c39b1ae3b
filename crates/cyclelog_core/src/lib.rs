//! Core domain logic for the CycleLog health journal.
//! This crate is the single source of truth for entry invariants, indicator
//! matching and visit-plan rendering.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::entry::{
    EntryId, EntryValidationError, LogEntry, SymptomId, SymptomRating, DEFAULT_SYMPTOM_RATING,
    MAX_SYMPTOM_RATING, MIN_SYMPTOM_RATING,
};
pub use model::indicator::IndicatorChecklist;
pub use model::mood::{find_mood, mood_catalog, moods_in_category, MoodCategory, MoodTag};
pub use repo::entry_repo::{EntryRepository, InMemoryEntryRepository, RepoError, RepoResult};
pub use service::entry_service::{EntryDraft, EntryService, EntryServiceError};
pub use service::insight_service::{
    count_indicators_matched, indicator_report, insights_summary, matched_indicators,
    IndicatorReport, IndicatorStatus, InsightsSummary,
};
pub use service::visit_plan::{
    generate_plan, top_moods, top_symptoms, MoodFrequency, SymptomStats, VisitPlan,
    EMPTY_PLAN_MESSAGE, TOP_MOOD_LIMIT, TOP_SYMPTOM_LIMIT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
