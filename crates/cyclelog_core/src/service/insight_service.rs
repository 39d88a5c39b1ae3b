//! Indicator matching over logged symptoms.
//!
//! # Responsibility
//! - Report which checklist phrases have been logged at least once.
//! - Shape per-checklist results for the insights screen.
//!
//! # Invariants
//! - Matching is case-insensitive on symptom names.
//! - Results are always a subset of the given indicators, original casing kept.
//! - All functions are pure; results are recomputed on every read.

use crate::model::entry::LogEntry;
use crate::model::indicator::IndicatorChecklist;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Returns the indicators whose case-folded form matches a logged symptom.
///
/// An empty entry collection yields an empty set.
pub fn matched_indicators<S: AsRef<str>>(
    indicators: &[S],
    entries: &[LogEntry],
) -> BTreeSet<String> {
    let logged = logged_symptom_names(entries);
    let mut matched = BTreeSet::new();
    for indicator in indicators {
        let indicator: &str = indicator.as_ref();
        if logged.contains(&indicator.to_lowercase()) {
            matched.insert(indicator.to_string());
        }
    }
    matched
}

/// Cardinality of `matched_indicators`.
pub fn count_indicators_matched<S: AsRef<str>>(indicators: &[S], entries: &[LogEntry]) -> usize {
    matched_indicators(indicators, entries).len()
}

/// Match state of one checklist phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorStatus {
    pub label: String,
    pub logged: bool,
}

/// One checklist with per-phrase match flags in checklist order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndicatorReport {
    pub checklist: IndicatorChecklist,
    pub title: String,
    pub items: Vec<IndicatorStatus>,
    pub matched_count: usize,
    pub total: usize,
}

/// Everything the insights screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsSummary {
    pub entry_count: usize,
    pub pcos: IndicatorReport,
    pub endometriosis: IndicatorReport,
}

/// Builds the report for one built-in checklist.
pub fn indicator_report(checklist: IndicatorChecklist, entries: &[LogEntry]) -> IndicatorReport {
    let indicators = checklist.indicators();
    let matched = matched_indicators(indicators, entries);
    let items = indicators
        .iter()
        .map(|label| IndicatorStatus {
            label: (*label).to_string(),
            logged: matched.contains(*label),
        })
        .collect::<Vec<_>>();

    IndicatorReport {
        checklist,
        title: checklist.title().to_string(),
        items,
        matched_count: matched.len(),
        total: indicators.len(),
    }
}

/// Builds both checklist reports plus the entry count.
pub fn insights_summary(entries: &[LogEntry]) -> InsightsSummary {
    InsightsSummary {
        entry_count: entries.len(),
        pcos: indicator_report(IndicatorChecklist::Pcos, entries),
        endometriosis: indicator_report(IndicatorChecklist::Endometriosis, entries),
    }
}

fn logged_symptom_names(entries: &[LogEntry]) -> HashSet<String> {
    entries
        .iter()
        .flat_map(|entry| entry.symptoms.iter())
        .map(|symptom| symptom.folded_name())
        .collect()
}
