//! Mood tag catalog.
//!
//! # Responsibility
//! - Define the fixed set of mood descriptors the picker offers.
//! - Place each tag on a one-dimensional spectrum for display coloring.
//!
//! # Invariants
//! - The catalog is static and never user-extended.
//! - Positions are within `[0, 1]` and ascend in catalog order.
//! - Labels are unique.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse grouping of mood tags along the spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    Stress,
    Tense,
    Mood,
    Balance,
    Calm,
    Energy,
    Clarity,
    Fatigue,
    Body,
}

impl MoodCategory {
    /// All categories in spectrum order.
    pub const ALL: [MoodCategory; 9] = [
        Self::Stress,
        Self::Tense,
        Self::Mood,
        Self::Balance,
        Self::Calm,
        Self::Energy,
        Self::Clarity,
        Self::Fatigue,
        Self::Body,
    ];

    /// Stable display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stress => "Stress",
            Self::Tense => "Tense",
            Self::Mood => "Mood",
            Self::Balance => "Balance",
            Self::Calm => "Calm",
            Self::Energy => "Energy",
            Self::Clarity => "Clarity",
            Self::Fatigue => "Fatigue",
            Self::Body => "Body",
        }
    }
}

/// One selectable mood descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodTag {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    /// Spectrum placement in `[0, 1]`.
    pub position: f64,
    pub major: MoodCategory,
}

impl MoodTag {
    fn catalog_item(label: &str, position: f64, major: MoodCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            position,
            major,
        }
    }
}

static MOOD_CATALOG: Lazy<Vec<MoodTag>> = Lazy::new(|| {
    use MoodCategory::*;

    [
        ("Overwhelmed", 0.01, Stress),
        ("Panicky", 0.03, Stress),
        ("On edge", 0.05, Stress),
        ("Overstimulated", 0.07, Stress),
        ("Frustrated", 0.09, Stress),
        ("Irritable", 0.11, Tense),
        ("Snappy", 0.12, Tense),
        ("Restless", 0.13, Tense),
        ("Uneasy", 0.14, Tense),
        ("Wired", 0.15, Tense),
        ("Low mood", 0.17, Mood),
        ("Sad", 0.18, Mood),
        ("Sensitive", 0.19, Mood),
        ("Tearful", 0.20, Mood),
        ("Unmotivated", 0.22, Mood),
        ("Self-critical", 0.24, Mood),
        ("Okay", 0.27, Balance),
        ("Stable", 0.30, Balance),
        ("Grounded", 0.32, Balance),
        ("Centered", 0.34, Balance),
        ("Hopeful", 0.36, Balance),
        ("Calm", 0.40, Calm),
        ("Peaceful", 0.42, Calm),
        ("Safe", 0.44, Calm),
        ("Patient", 0.46, Calm),
        ("In control", 0.48, Calm),
        ("Energized", 0.52, Energy),
        ("Motivated", 0.54, Energy),
        ("Social", 0.56, Energy),
        ("Confident", 0.58, Energy),
        ("Upbeat", 0.60, Energy),
        ("Focused", 0.63, Clarity),
        ("Clear-headed", 0.65, Clarity),
        ("Productive", 0.67, Clarity),
        ("Present", 0.69, Clarity),
        ("Foggy", 0.71, Fatigue),
        ("Drained", 0.74, Fatigue),
        ("Tired", 0.77, Fatigue),
        ("Exhausted", 0.80, Fatigue),
        ("Burned out", 0.83, Fatigue),
        ("Numb", 0.86, Fatigue),
        ("Heavy", 0.88, Body),
        ("Sluggish", 0.91, Body),
        ("Sleepy", 0.94, Body),
        ("Worn out", 0.97, Body),
    ]
    .into_iter()
    .map(|(label, position, major)| MoodTag::catalog_item(label, position, major))
    .collect()
});

/// Returns the fixed mood catalog in spectrum order.
pub fn mood_catalog() -> &'static [MoodTag] {
    MOOD_CATALOG.as_slice()
}

/// Finds a catalog tag by label, ignoring case and surrounding whitespace.
pub fn find_mood(label: &str) -> Option<&'static MoodTag> {
    let needle = label.trim().to_lowercase();
    mood_catalog()
        .iter()
        .find(|tag| tag.label.to_lowercase() == needle)
}

/// Returns catalog tags belonging to one category.
pub fn moods_in_category(category: MoodCategory) -> impl Iterator<Item = &'static MoodTag> {
    mood_catalog()
        .iter()
        .filter(move |tag| tag.major == category)
}

#[cfg(test)]
mod tests {
    use super::{find_mood, mood_catalog, moods_in_category, MoodCategory};
    use std::collections::HashSet;

    #[test]
    fn catalog_positions_are_in_range_and_ascending() {
        let catalog = mood_catalog();
        assert_eq!(catalog.len(), 45);
        assert!(catalog
            .iter()
            .all(|tag| (0.0..=1.0).contains(&tag.position)));
        assert!(catalog
            .windows(2)
            .all(|pair| pair[0].position < pair[1].position));
    }

    #[test]
    fn catalog_labels_are_unique() {
        let labels = mood_catalog()
            .iter()
            .map(|tag| tag.label.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), mood_catalog().len());
    }

    #[test]
    fn catalog_ids_are_stable_within_process() {
        let first = find_mood("calm").expect("calm exists");
        let second = find_mood("  CALM ").expect("calm exists");
        assert_eq!(first.id, second.id);
        assert_eq!(first.major, MoodCategory::Calm);
    }

    #[test]
    fn every_category_has_tags() {
        for category in MoodCategory::ALL {
            assert!(moods_in_category(category).count() > 0, "{}", category.as_str());
        }
    }
}
