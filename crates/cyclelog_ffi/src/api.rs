//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the session entry store for the lifetime of the process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported in response envelopes, never thrown.
//! - Nothing is persisted; the store lives as long as the process.

use chrono::NaiveDate;
use cyclelog_core::{
    core_version as core_version_inner, find_mood, init_logging as init_logging_inner,
    mood_catalog as mood_catalog_inner, ping as ping_inner, EntryDraft, EntryService,
    IndicatorReport, InMemoryEntryRepository, LogEntry, MoodTag,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

static SESSION: OnceLock<Mutex<EntryService<InMemoryEntryRepository>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Mood picker item.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodTagItem {
    pub label: String,
    /// Spectrum placement in `[0, 1]` for bubble coloring.
    pub position: f64,
    /// Category display name.
    pub major: String,
}

/// Symptom row submitted with a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomInput {
    pub name: String,
    /// Clamped into `1..=10`.
    pub rating: i64,
}

/// Saved entry row for list display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListItem {
    pub entry_id: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub mood_labels: Vec<String>,
    /// `name (rating/10)` per symptom.
    pub symptom_summaries: Vec<String>,
    pub journal_preview: Option<String>,
}

/// One checklist as shown on the insights screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub title: String,
    pub matched_count: u32,
    pub total: u32,
    pub indicators: Vec<String>,
    pub logged: Vec<bool>,
}

/// Insights screen payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsResponse {
    pub entry_count: u32,
    pub pcos: ChecklistItem,
    pub endometriosis: ChecklistItem,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created entry ID on success.
    pub entry_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl EntryActionResponse {
    fn success(message: impl Into<String>, entry_id: String) -> Self {
        Self {
            ok: true,
            entry_id: Some(entry_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// Returns the fixed mood catalog in spectrum order.
#[flutter_rust_bridge::frb(sync)]
pub fn mood_catalog() -> Vec<MoodTagItem> {
    mood_catalog_inner().iter().map(to_mood_tag_item).collect()
}

/// Saves one entry into the session store.
///
/// # FFI contract
/// - `date` must be ISO `YYYY-MM-DD`.
/// - `mood_labels` must name catalog moods (case-insensitive).
/// - Blank symptom names, unknown moods and empty entries are rejected.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_save(
    date: String,
    mood_labels: Vec<String>,
    symptoms: Vec<SymptomInput>,
    journal: String,
) -> EntryActionResponse {
    match build_draft(&date, &mood_labels, &symptoms, journal) {
        Ok(draft) => match with_session(|service| service.save_draft(draft)) {
            Ok(entry) => EntryActionResponse::success("Entry saved.", entry.id.to_string()),
            Err(err) => EntryActionResponse::failure(format!("entry_save failed: {err}")),
        },
        Err(message) => {
            warn!("event=entry_save module=ffi status=rejected reason=invalid_input");
            EntryActionResponse::failure(format!("entry_save failed: {message}"))
        }
    }
}

/// Lists saved entries, newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn entries_list() -> Vec<EntryListItem> {
    with_session(|service| service.snapshot())
        .iter()
        .map(to_entry_list_item)
        .collect()
}

/// Returns checklist match state over the session entries.
#[flutter_rust_bridge::frb(sync)]
pub fn insights_summary() -> InsightsResponse {
    let summary = with_session(|service| service.insights());
    InsightsResponse {
        entry_count: saturating_u32(summary.entry_count),
        pcos: to_checklist_item(summary.pcos),
        endometriosis: to_checklist_item(summary.endometriosis),
    }
}

/// Generates the copyable visit plan text over the session entries.
#[flutter_rust_bridge::frb(sync)]
pub fn visit_plan_generate(user_notes: String, chart_notes: String) -> String {
    with_session(|service| service.visit_plan(&user_notes, &chart_notes))
}

fn build_draft(
    date: &str,
    mood_labels: &[String],
    symptoms: &[SymptomInput],
    journal: String,
) -> Result<EntryDraft, String> {
    let date = NaiveDate::parse_from_str(date.trim(), ENTRY_DATE_FORMAT)
        .map_err(|err| format!("invalid date `{}`: {err}", date.trim()))?;
    let mut draft = EntryDraft::new(date);

    for label in mood_labels {
        let mood = find_mood(label).ok_or_else(|| format!("unknown mood `{}`", label.trim()))?;
        // Duplicate labels must not toggle a mood back off.
        if !draft.moods().iter().any(|selected| selected.label == mood.label) {
            draft.toggle_mood(mood);
        }
    }
    for symptom in symptoms {
        draft
            .add_symptom(&symptom.name, symptom.rating)
            .map_err(|err| err.to_string())?;
    }
    draft.set_journal(journal);
    Ok(draft)
}

fn with_session<T>(f: impl FnOnce(&mut EntryService<InMemoryEntryRepository>) -> T) -> T {
    let mut guard = lock_session();
    f(&mut *guard)
}

fn lock_session() -> MutexGuard<'static, EntryService<InMemoryEntryRepository>> {
    let session =
        SESSION.get_or_init(|| Mutex::new(EntryService::new(InMemoryEntryRepository::new())));
    // A panic mid-call cannot leave a half-written entry; recover the guard.
    session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_mood_tag_item(tag: &MoodTag) -> MoodTagItem {
    MoodTagItem {
        label: tag.label.clone(),
        position: tag.position,
        major: tag.major.as_str().to_string(),
    }
}

fn to_entry_list_item(entry: &LogEntry) -> EntryListItem {
    EntryListItem {
        entry_id: entry.id.to_string(),
        date: entry.date.format(ENTRY_DATE_FORMAT).to_string(),
        mood_labels: entry.mood_labels().map(str::to_string).collect(),
        symptom_summaries: entry
            .symptoms
            .iter()
            .map(|symptom| format!("{} ({}/10)", symptom.name, symptom.rating))
            .collect(),
        journal_preview: entry.journal_preview(),
    }
}

fn to_checklist_item(report: IndicatorReport) -> ChecklistItem {
    let (indicators, logged) = report
        .items
        .into_iter()
        .map(|item| (item.label, item.logged))
        .unzip();
    ChecklistItem {
        title: report.title,
        matched_count: saturating_u32(report.matched_count),
        total: saturating_u32(report.total),
        indicators,
        logged,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
