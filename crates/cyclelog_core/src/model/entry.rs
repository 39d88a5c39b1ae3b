//! Log entry domain model.
//!
//! # Responsibility
//! - Define the daily record combining moods, symptom ratings and journal text.
//! - Normalize user input at construction time so downstream aggregation can
//!   trust names, ratings and mood ordering.
//!
//! # Invariants
//! - `SymptomRating::rating` is always within `1..=10`.
//! - `SymptomRating::name` is non-empty after trimming.
//! - `LogEntry::moods` is ordered by label with no duplicate labels.
//! - Every mood is a catalog tag; decoded labels resolve through the catalog.
//! - A saved entry has at least one symptom or a non-blank journal.

use crate::model::mood::{find_mood, MoodTag};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one saved entry.
pub type EntryId = Uuid;
/// Stable identifier of one symptom rating row.
pub type SymptomId = Uuid;

/// Lowest severity accepted by the rating stepper.
pub const MIN_SYMPTOM_RATING: u8 = 1;
/// Highest severity accepted by the rating stepper.
pub const MAX_SYMPTOM_RATING: u8 = 10;
/// Rating the symptom form resets to after each add.
pub const DEFAULT_SYMPTOM_RATING: u8 = 5;

const JOURNAL_PREVIEW_MAX_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Validation failures for entry construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Caller supplied the nil UUID as identity.
    NilId,
    /// Symptom name is empty after trimming.
    EmptySymptomName,
    /// Persisted rating falls outside `1..=10`.
    RatingOutOfRange(i64),
    /// Entry has neither symptoms nor journal text.
    EmptyEntry,
    /// Mood label is not part of the fixed catalog.
    UnknownMood(String),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
            Self::EmptySymptomName => write!(f, "symptom name must not be empty"),
            Self::RatingOutOfRange(value) => write!(
                f,
                "symptom rating {value} is outside {MIN_SYMPTOM_RATING}..={MAX_SYMPTOM_RATING}"
            ),
            Self::EmptyEntry => write!(f, "entry needs at least one symptom or journal text"),
            Self::UnknownMood(label) => write!(f, "unknown mood `{label}`"),
        }
    }
}

impl Error for EntryValidationError {}

/// One symptom with its severity for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymptomRatingWire")]
pub struct SymptomRating {
    pub id: SymptomId,
    /// Free-text label, trimmed; inner spacing is kept as typed.
    pub name: String,
    /// Severity in `1..=10`.
    pub rating: u8,
}

impl SymptomRating {
    /// Creates a rating from form input.
    ///
    /// The rating is clamped the way the stepper control clamps it; only the
    /// name can make construction fail.
    pub fn new(name: &str, rating: i64) -> Result<Self, EntryValidationError> {
        let name = normalize_symptom_name(name).ok_or(EntryValidationError::EmptySymptomName)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            rating: clamp_rating(rating),
        })
    }

    /// Checks the name and range invariants on an already-built rating.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(EntryValidationError::EmptySymptomName);
        }
        check_rating_range(i64::from(self.rating))
    }

    /// Case-folded name used for indicator matching.
    pub fn folded_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Deserialize)]
struct SymptomRatingWire {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    name: String,
    rating: i64,
}

impl TryFrom<SymptomRatingWire> for SymptomRating {
    type Error = EntryValidationError;

    fn try_from(value: SymptomRatingWire) -> Result<Self, Self::Error> {
        if value.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        check_rating_range(value.rating)?;
        let name = normalize_symptom_name(&value.name)
            .ok_or(EntryValidationError::EmptySymptomName)?;
        Ok(Self {
            id: value.id,
            name,
            rating: clamp_rating(value.rating),
        })
    }
}

/// One day's saved log record.
///
/// Entries are immutable once created; the store only ever adds new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LogEntryWire")]
pub struct LogEntry {
    pub id: EntryId,
    /// Calendar day the entry describes, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub moods: Vec<MoodTag>,
    pub symptoms: Vec<SymptomRating>,
    /// Free text; stored as typed, not trimmed.
    pub journal: String,
}

impl LogEntry {
    /// Creates an entry with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyEntry` when there are no symptoms and the journal is blank.
    pub fn new(
        date: NaiveDate,
        moods: Vec<MoodTag>,
        symptoms: Vec<SymptomRating>,
        journal: impl Into<String>,
    ) -> Result<Self, EntryValidationError> {
        Self::with_id(Uuid::new_v4(), date, moods, symptoms, journal)
    }

    /// Creates an entry with a caller-provided ID (import paths).
    pub fn with_id(
        id: EntryId,
        date: NaiveDate,
        moods: Vec<MoodTag>,
        symptoms: Vec<SymptomRating>,
        journal: impl Into<String>,
    ) -> Result<Self, EntryValidationError> {
        let entry = Self {
            id,
            date,
            moods: normalize_moods(moods),
            symptoms,
            journal: journal.into(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks entry-level invariants, including every symptom and mood.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        for symptom in &self.symptoms {
            symptom.validate()?;
        }
        if let Some(mood) = self.moods.iter().find(|mood| find_mood(&mood.label).is_none()) {
            return Err(EntryValidationError::UnknownMood(mood.label.clone()));
        }
        if self.symptoms.is_empty() && self.journal.trim().is_empty() {
            return Err(EntryValidationError::EmptyEntry);
        }
        Ok(())
    }

    /// Single-line journal summary for list rows, or `None` when blank.
    pub fn journal_preview(&self) -> Option<String> {
        let normalized = WHITESPACE_RE.replace_all(&self.journal, " ");
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.chars().take(JOURNAL_PREVIEW_MAX_CHARS).collect())
    }

    /// Mood labels in stored order.
    pub fn mood_labels(&self) -> impl Iterator<Item = &str> {
        self.moods.iter().map(|mood| mood.label.as_str())
    }
}

#[derive(Deserialize)]
struct LogEntryWire {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    date: NaiveDate,
    #[serde(default)]
    moods: Vec<MoodTagWire>,
    #[serde(default)]
    symptoms: Vec<SymptomRating>,
    #[serde(default)]
    journal: String,
}

/// Only the label is trusted; position and category come from the catalog.
#[derive(Deserialize)]
struct MoodTagWire {
    label: String,
}

impl TryFrom<LogEntryWire> for LogEntry {
    type Error = EntryValidationError;

    fn try_from(value: LogEntryWire) -> Result<Self, Self::Error> {
        let moods = value
            .moods
            .into_iter()
            .map(|wire| {
                find_mood(&wire.label)
                    .cloned()
                    .ok_or(EntryValidationError::UnknownMood(wire.label))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_id(
            value.id,
            value.date,
            moods,
            value.symptoms,
            value.journal,
        )
    }
}

/// Trims a symptom name.
///
/// Returns `None` when nothing is left.
pub fn normalize_symptom_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_rating_range(rating: i64) -> Result<(), EntryValidationError> {
    let range = i64::from(MIN_SYMPTOM_RATING)..=i64::from(MAX_SYMPTOM_RATING);
    if range.contains(&rating) {
        Ok(())
    } else {
        Err(EntryValidationError::RatingOutOfRange(rating))
    }
}

/// Clamps an arbitrary integer into the valid severity range.
pub fn clamp_rating(rating: i64) -> u8 {
    let clamped = rating.clamp(i64::from(MIN_SYMPTOM_RATING), i64::from(MAX_SYMPTOM_RATING));
    // Always fits after the clamp above.
    clamped as u8
}

fn normalize_moods(mut moods: Vec<MoodTag>) -> Vec<MoodTag> {
    moods.sort_by(|left, right| left.label.cmp(&right.label));
    moods.dedup_by(|left, right| left.label == right.label);
    moods
}
