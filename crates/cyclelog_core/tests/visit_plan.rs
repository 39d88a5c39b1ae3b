use chrono::NaiveDate;
use cyclelog_core::{
    find_mood, generate_plan, top_moods, top_symptoms, LogEntry, SymptomRating, VisitPlan,
    EMPTY_PLAN_MESSAGE, TOP_MOOD_LIMIT, TOP_SYMPTOM_LIMIT,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn entry(date: NaiveDate, moods: &[&str], symptoms: &[(&str, i64)]) -> LogEntry {
    let moods = moods
        .iter()
        .map(|label| find_mood(label).unwrap().clone())
        .collect();
    let symptoms = symptoms
        .iter()
        .map(|(name, rating)| SymptomRating::new(name, *rating).unwrap())
        .collect();
    LogEntry::new(date, moods, symptoms, "logged").unwrap()
}

#[test]
fn empty_history_returns_placeholder_message() {
    assert_eq!(generate_plan(&[], "", ""), EMPTY_PLAN_MESSAGE);
    assert_eq!(
        generate_plan(&[], "questions", "chart"),
        "No logs yet. Add a few entries first so I can pull patterns for your next visit."
    );
}

#[test]
fn renders_full_plan_with_placeholders() {
    let entries = vec![entry(day(2025, 1, 5), &["Calm"], &[("Pelvic pain", 6)])];

    let expected = "NEXT VISIT PLAN\n\
Log window: Jan 5, 2025 – Jan 5, 2025\n\
Entries: 1\n\
\n\
1) What I want to discuss (my words)\n\
• (Add your notes below)\n\
\n\
2) Patterns from my logs\n\
• Top symptoms:\n  - Pelvic pain (1 days), avg 6.0/10, max 6/10\n\
\n\
• Common moods:\n  - Calm (1 days)\n\
\n\
3) Optional: pasted chart/clinician notes\n\
• (Nothing pasted)\n\
\n\
4) Suggested questions / talking points\n\
• What diagnoses are you considering, and what criteria would confirm/deny them?\n\
• What tests or imaging are appropriate (and what would each one rule in/out)?\n\
• What are my treatment options now vs later (pain, cycle regulation, fertility goals)?\n\
• What red flags should prompt urgent care?\n\
• If symptoms persist, what is the stepwise plan and timeline for follow-up?\n\
\n\
Notes:\n\
• This tool does not diagnose. It organizes your notes + your logs to support evaluation.\n\
• Only paste chart text you feel comfortable sharing.\n";

    assert_eq!(generate_plan(&entries, "", ""), expected);
}

#[test]
fn symptom_line_reports_count_average_and_max() {
    let entries = vec![
        entry(day(2025, 1, 7), &[], &[("Pelvic pain", 8)]),
        entry(day(2025, 1, 5), &[], &[("Pelvic pain", 6)]),
    ];

    let plan = generate_plan(&entries, "", "");
    assert!(plan.contains("  - Pelvic pain (2 days), avg 7.0/10, max 8/10\n"));
    assert!(plan.contains("Log window: Jan 5, 2025 – Jan 7, 2025\n"));
    assert!(plan.contains("Entries: 2\n"));
}

#[test]
fn log_window_uses_date_order_not_insertion_order() {
    let entries = vec![
        entry(day(2025, 3, 1), &[], &[("Nausea", 2)]),
        entry(day(2024, 12, 30), &[], &[("Nausea", 3)]),
        entry(day(2025, 2, 14), &[], &[("Nausea", 4)]),
    ];

    let plan = generate_plan(&entries, "", "");
    assert!(plan.contains("Log window: Dec 30, 2024 – Mar 1, 2025\n"));
}

#[test]
fn notes_are_trimmed_and_whitespace_only_counts_as_empty() {
    let entries = vec![entry(day(2025, 1, 5), &[], &[("Acne", 4)])];

    let blank = generate_plan(&entries, "  \n\t", "\n\n ");
    assert!(blank.contains("• (Add your notes below)\n\n"));
    assert!(blank.contains("• (Nothing pasted)\n\n"));
    assert_eq!(blank, generate_plan(&entries, "", ""));

    let filled = generate_plan(
        &entries,
        "\n  Ask about iron levels \n",
        " Ultrasound 2024 clear\n",
    );
    assert!(filled.contains("• Ask about iron levels\n\n"));
    assert!(filled.contains("• Ultrasound 2024 clear\n\n"));
}

#[test]
fn missing_symptoms_and_moods_render_placeholders() {
    let date = day(2025, 1, 5);
    let entries = vec![LogEntry::new(date, Vec::new(), Vec::new(), "journal only").unwrap()];

    let plan = generate_plan(&entries, "", "");
    assert!(plan.contains("2) Patterns from my logs\n• Symptoms: (none logged)\n"));
    assert!(plan.contains("\n• Moods: (none selected)\n\n3) Optional"));
}

#[test]
fn top_lists_are_capped_and_sorted_by_descending_count() {
    let mut entries = Vec::new();
    let symptom_names = ["A", "B", "C", "D", "E", "F", "G", "H"];
    let mood_labels = ["Calm", "Sad", "Tired", "Focused", "Hopeful", "Numb", "Wired"];
    for (index, name) in symptom_names.iter().enumerate() {
        // Later names repeat more often.
        for repeat in 0..=index {
            let date = day(2025, 1, 1 + repeat as u32);
            let moods = [mood_labels[index % mood_labels.len()]];
            entries.push(entry(date, &moods, &[(*name, 5)]));
        }
    }

    let symptoms = top_symptoms(&entries, TOP_SYMPTOM_LIMIT);
    assert_eq!(symptoms.len(), TOP_SYMPTOM_LIMIT);
    assert!(symptoms.windows(2).all(|pair| pair[0].count >= pair[1].count));
    assert_eq!(symptoms[0].name, "H");
    assert_eq!(symptoms[0].count, 8);

    let moods = top_moods(&entries, TOP_MOOD_LIMIT);
    assert_eq!(moods.len(), TOP_MOOD_LIMIT);
    assert!(moods.windows(2).all(|pair| pair[0].count >= pair[1].count));

    let plan = generate_plan(&entries, "", "");
    let symptom_lines = plan.lines().filter(|line| line.contains("/10, max")).count();
    assert_eq!(symptom_lines, TOP_SYMPTOM_LIMIT);
}

#[test]
fn single_occurrence_never_outranks_repeated_group() {
    let entries = vec![
        entry(day(2025, 1, 1), &["Sad"], &[("Once", 9)]),
        entry(day(2025, 1, 2), &["Calm"], &[("Twice", 2)]),
        entry(day(2025, 1, 3), &["Calm"], &[("Twice", 4)]),
    ];

    let symptoms = top_symptoms(&entries, TOP_SYMPTOM_LIMIT);
    assert_eq!(symptoms[0].name, "Twice");
    assert_eq!(symptoms[0].count, 2);
    assert!((symptoms[0].average - 3.0).abs() < f64::EPSILON);
    assert_eq!(symptoms[0].max, 4);

    let moods = top_moods(&entries, TOP_MOOD_LIMIT);
    assert_eq!(moods[0].label, "Calm");
    assert_eq!(moods[0].count, 2);
}

#[test]
fn average_is_rendered_with_one_decimal() {
    let entries = vec![
        entry(day(2025, 1, 1), &[], &[("Bloating", 3)]),
        entry(day(2025, 1, 2), &[], &[("Bloating", 4)]),
        entry(day(2025, 1, 3), &[], &[("Bloating", 4)]),
    ];

    let plan = generate_plan(&entries, "", "");
    assert!(plan.contains("  - Bloating (3 days), avg 3.7/10, max 4/10\n"));
}

#[test]
fn generation_is_deterministic_for_same_inputs() {
    let entries = vec![
        entry(day(2025, 1, 5), &["Calm", "Sad"], &[("Fatigue", 5), ("Nausea", 3)]),
        entry(day(2025, 1, 6), &["Sad"], &[("Fatigue", 7)]),
    ];

    let first = generate_plan(&entries, "notes", "chart");
    let second = generate_plan(&entries, "notes", "chart");
    assert_eq!(first, second);
}

#[test]
fn structured_plan_matches_rendered_text() {
    let entries = vec![entry(day(2025, 1, 5), &["Calm"], &[("Fatigue", 5)])];

    let plan = VisitPlan::build(&entries, " talk ", "").unwrap();
    assert_eq!(plan.entry_count, 1);
    assert_eq!(plan.user_notes.as_deref(), Some("talk"));
    assert_eq!(plan.chart_notes, None);
    assert_eq!(plan.render(), generate_plan(&entries, " talk ", ""));

    assert!(VisitPlan::build(&[], "talk", "").is_none());
}
