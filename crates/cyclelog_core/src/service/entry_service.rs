//! Entry logging use-case service.
//!
//! # Responsibility
//! - Hold in-progress form state (`EntryDraft`) and turn it into saved entries.
//! - Expose read snapshots to the insight and visit-plan computations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Reads return owned snapshots; callers never see shared mutable state.
//! - Logs carry counts and ids only, never user-entered text.

use crate::model::entry::{
    EntryId, EntryValidationError, LogEntry, SymptomId, SymptomRating, DEFAULT_SYMPTOM_RATING,
};
use crate::model::mood::MoodTag;
use crate::repo::entry_repo::{EntryRepository, RepoError};
use crate::service::insight_service::{insights_summary, InsightsSummary};
use crate::service::visit_plan::generate_plan;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for entry use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryServiceError {
    /// Input failed entry-level validation.
    InvalidEntry(EntryValidationError),
    /// Storage rejected the write.
    Repo(RepoError),
}

impl Display for EntryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntry(err) => write!(f, "invalid entry: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EntryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEntry(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for EntryServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::InvalidEntry(value)
    }
}

impl From<RepoError> for EntryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidEntry(err),
            other => Self::Repo(other),
        }
    }
}

/// In-progress entry form state.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    moods: Vec<MoodTag>,
    symptoms: Vec<SymptomRating>,
    journal: String,
}

impl EntryDraft {
    /// Starts an empty draft for the given day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            moods: Vec::new(),
            symptoms: Vec::new(),
            journal: String::new(),
        }
    }

    /// Selects the mood when absent, deselects it when present.
    ///
    /// Returns whether the mood is selected afterwards.
    pub fn toggle_mood(&mut self, mood: &MoodTag) -> bool {
        if let Some(index) = self.moods.iter().position(|m| m.label == mood.label) {
            self.moods.remove(index);
            false
        } else {
            self.moods.push(mood.clone());
            true
        }
    }

    /// Appends a symptom row from form input.
    ///
    /// # Errors
    /// - `EmptySymptomName` when the name is blank after trimming.
    pub fn add_symptom(
        &mut self,
        name: &str,
        rating: i64,
    ) -> Result<SymptomId, EntryValidationError> {
        let symptom = SymptomRating::new(name, rating)?;
        let id = symptom.id;
        self.symptoms.push(symptom);
        Ok(id)
    }

    /// Removes one symptom row. Returns whether a row was removed.
    pub fn remove_symptom(&mut self, id: SymptomId) -> bool {
        let before = self.symptoms.len();
        self.symptoms.retain(|symptom| symptom.id != id);
        self.symptoms.len() != before
    }

    pub fn set_journal(&mut self, journal: impl Into<String>) {
        self.journal = journal.into();
    }

    pub fn moods(&self) -> &[MoodTag] {
        &self.moods
    }

    pub fn symptoms(&self) -> &[SymptomRating] {
        &self.symptoms
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    /// Mirrors the save button: a symptom or non-blank journal is required.
    pub fn can_save(&self) -> bool {
        !self.symptoms.is_empty() || !self.journal.trim().is_empty()
    }

    /// Rating the symptom stepper shows after each add.
    pub fn default_rating() -> u8 {
        DEFAULT_SYMPTOM_RATING
    }

    fn into_entry(self) -> Result<LogEntry, EntryValidationError> {
        LogEntry::new(self.date, self.moods, self.symptoms, self.journal)
    }
}

/// Use-case service over an injected entry repository.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves a draft as a new entry, newest first.
    pub fn save_draft(&mut self, draft: EntryDraft) -> Result<LogEntry, EntryServiceError> {
        let entry = match draft.into_entry() {
            Ok(entry) => entry,
            Err(err) => {
                warn!("event=entry_save module=service status=rejected reason={err}");
                return Err(err.into());
            }
        };
        self.save_entry(entry)
    }

    /// Stores an already-built entry (import paths).
    pub fn save_entry(&mut self, entry: LogEntry) -> Result<LogEntry, EntryServiceError> {
        let saved = entry.clone();
        let entry_id = self.repo.insert_entry(entry)?;
        info!(
            "event=entry_save module=service status=ok entry_id={} moods={} symptoms={} has_journal={}",
            entry_id,
            saved.moods.len(),
            saved.symptoms.len(),
            !saved.journal.trim().is_empty()
        );
        Ok(saved)
    }

    /// Gets one entry by stable ID.
    pub fn get_entry(&self, id: EntryId) -> Option<LogEntry> {
        self.repo.get_entry(id)
    }

    /// Owned snapshot of all entries, newest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.repo.list_entries()
    }

    pub fn entry_count(&self) -> usize {
        self.repo.entry_count()
    }

    /// Checklist match state over the current snapshot.
    pub fn insights(&self) -> InsightsSummary {
        insights_summary(&self.snapshot())
    }

    /// Visit plan text over the current snapshot.
    pub fn visit_plan(&self, user_notes: &str, chart_notes: &str) -> String {
        generate_plan(&self.snapshot(), user_notes, chart_notes)
    }
}
