//! Next-visit plan generation.
//!
//! # Responsibility
//! - Aggregate mood frequency and symptom severity over the entry history.
//! - Render the fixed-format plain-text brief a user brings to a clinic visit.
//!
//! # Invariants
//! - Output depends only on the inputs; the same inputs render the same text.
//! - At most `TOP_MOOD_LIMIT` moods and `TOP_SYMPTOM_LIMIT` symptoms are listed,
//!   ordered by descending count.
//! - Equal counts keep first-appearance order over the given entry slice.
//! - An empty history renders `EMPTY_PLAN_MESSAGE`, never an error.
//! - Talking points and disclaimers are fixed text, never derived from data.

use crate::model::entry::LogEntry;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// Text returned when there is nothing to summarize yet.
pub const EMPTY_PLAN_MESSAGE: &str =
    "No logs yet. Add a few entries first so I can pull patterns for your next visit.";
/// Maximum moods listed under "Common moods".
pub const TOP_MOOD_LIMIT: usize = 5;
/// Maximum symptoms listed under "Top symptoms".
pub const TOP_SYMPTOM_LIMIT: usize = 6;

const WINDOW_DATE_FORMAT: &str = "%b %-d, %Y";

const TALKING_POINTS: [&str; 5] = [
    "What diagnoses are you considering, and what criteria would confirm/deny them?",
    "What tests or imaging are appropriate (and what would each one rule in/out)?",
    "What are my treatment options now vs later (pain, cycle regulation, fertility goals)?",
    "What red flags should prompt urgent care?",
    "If symptoms persist, what is the stepwise plan and timeline for follow-up?",
];

const DISCLAIMERS: [&str; 2] = [
    "This tool does not diagnose. It organizes your notes + your logs to support evaluation.",
    "Only paste chart text you feel comfortable sharing.",
];

/// How often one mood label was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodFrequency {
    pub label: String,
    pub count: usize,
}

/// Aggregated severity for one symptom name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomStats {
    pub name: String,
    /// Number of ratings logged under this name.
    pub count: usize,
    /// Arithmetic mean of the ratings.
    pub average: f64,
    pub max: u8,
}

/// Structured form of the visit plan before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitPlan {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub entry_count: usize,
    pub top_symptoms: Vec<SymptomStats>,
    pub top_moods: Vec<MoodFrequency>,
    /// Trimmed user notes; `None` when blank.
    pub user_notes: Option<String>,
    /// Trimmed chart notes; `None` when blank.
    pub chart_notes: Option<String>,
}

impl VisitPlan {
    /// Aggregates entries and notes into a plan.
    ///
    /// Returns `None` for an empty history.
    pub fn build(entries: &[LogEntry], user_notes: &str, chart_notes: &str) -> Option<Self> {
        let window_start = entries.iter().map(|entry| entry.date).min()?;
        let window_end = entries.iter().map(|entry| entry.date).max()?;

        Some(Self {
            window_start,
            window_end,
            entry_count: entries.len(),
            top_symptoms: top_symptoms(entries, TOP_SYMPTOM_LIMIT),
            top_moods: top_moods(entries, TOP_MOOD_LIMIT),
            user_notes: non_blank(user_notes),
            chart_notes: non_blank(chart_notes),
        })
    }

    /// Renders the plain-text brief.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("NEXT VISIT PLAN\n");
        out.push_str(&format!(
            "Log window: {} – {}\n",
            self.window_start.format(WINDOW_DATE_FORMAT),
            self.window_end.format(WINDOW_DATE_FORMAT)
        ));
        out.push_str(&format!("Entries: {}\n\n", self.entry_count));

        out.push_str("1) What I want to discuss (my words)\n");
        push_bullet_or(&mut out, self.user_notes.as_deref(), "(Add your notes below)");

        out.push_str("2) Patterns from my logs\n");
        if self.top_symptoms.is_empty() {
            out.push_str("• Symptoms: (none logged)\n");
        } else {
            out.push_str("• Top symptoms:\n");
            for symptom in &self.top_symptoms {
                out.push_str(&format!(
                    "  - {} ({} days), avg {:.1}/10, max {}/10\n",
                    symptom.name, symptom.count, symptom.average, symptom.max
                ));
            }
        }

        if self.top_moods.is_empty() {
            out.push_str("\n• Moods: (none selected)\n\n");
        } else {
            out.push_str("\n• Common moods:\n");
            for mood in &self.top_moods {
                out.push_str(&format!("  - {} ({} days)\n", mood.label, mood.count));
            }
            out.push('\n');
        }

        out.push_str("3) Optional: pasted chart/clinician notes\n");
        push_bullet_or(&mut out, self.chart_notes.as_deref(), "(Nothing pasted)");

        out.push_str("4) Suggested questions / talking points\n");
        for point in TALKING_POINTS {
            out.push_str(&format!("• {point}\n"));
        }
        out.push('\n');

        out.push_str("Notes:\n");
        for line in DISCLAIMERS {
            out.push_str(&format!("• {line}\n"));
        }

        out
    }
}

/// Generates the visit plan text for the given history and notes.
///
/// Notes consisting only of whitespace count as empty.
pub fn generate_plan(entries: &[LogEntry], user_notes: &str, chart_notes: &str) -> String {
    match VisitPlan::build(entries, user_notes, chart_notes) {
        Some(plan) => {
            debug!(
                "event=visit_plan_generate module=service status=ok entries={} symptom_groups={} mood_groups={}",
                plan.entry_count,
                plan.top_symptoms.len(),
                plan.top_moods.len()
            );
            plan.render()
        }
        None => {
            debug!("event=visit_plan_generate module=service status=empty entries=0");
            EMPTY_PLAN_MESSAGE.to_string()
        }
    }
}

/// Most frequently selected moods, at most `limit`.
pub fn top_moods(entries: &[LogEntry], limit: usize) -> Vec<MoodFrequency> {
    let mut groups: Vec<MoodFrequency> = Vec::new();
    let mut index_by_label: HashMap<&str, usize> = HashMap::new();

    for label in entries.iter().flat_map(LogEntry::mood_labels) {
        match index_by_label.get(label) {
            Some(&index) => groups[index].count += 1,
            None => {
                index_by_label.insert(label, groups.len());
                groups.push(MoodFrequency {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    groups.sort_by(|left, right| right.count.cmp(&left.count));
    groups.truncate(limit);
    groups
}

/// Most frequently logged symptoms with severity stats, at most `limit`.
///
/// Grouping is by exact symptom name.
pub fn top_symptoms(entries: &[LogEntry], limit: usize) -> Vec<SymptomStats> {
    struct Group<'a> {
        name: &'a str,
        count: usize,
        total: u64,
        max: u8,
    }

    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for symptom in entries.iter().flat_map(|entry| entry.symptoms.iter()) {
        let name = symptom.name.as_str();
        match index_by_name.get(name) {
            Some(&index) => {
                let group = &mut groups[index];
                group.count += 1;
                group.total += u64::from(symptom.rating);
                group.max = group.max.max(symptom.rating);
            }
            None => {
                index_by_name.insert(name, groups.len());
                groups.push(Group {
                    name,
                    count: 1,
                    total: u64::from(symptom.rating),
                    max: symptom.rating,
                });
            }
        }
    }

    groups.sort_by(|left, right| right.count.cmp(&left.count));
    groups
        .into_iter()
        .take(limit)
        .map(|group| SymptomStats {
            name: group.name.to_string(),
            count: group.count,
            average: group.total as f64 / group.count as f64,
            max: group.max,
        })
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn push_bullet_or(out: &mut String, text: Option<&str>, placeholder: &str) {
    out.push_str(&format!("• {}\n\n", text.unwrap_or(placeholder)));
}

#[cfg(test)]
mod tests {
    use super::{non_blank, push_bullet_or};

    #[test]
    fn non_blank_trims_whitespace_and_newlines() {
        assert_eq!(non_blank("  \n\t "), None);
        assert_eq!(non_blank("\n ask about iron \n").as_deref(), Some("ask about iron"));
    }

    #[test]
    fn bullet_falls_back_to_placeholder() {
        let mut out = String::new();
        push_bullet_or(&mut out, None, "(Nothing pasted)");
        assert_eq!(out, "• (Nothing pasted)\n\n");
    }
}
