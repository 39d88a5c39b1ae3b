use chrono::NaiveDate;
use cyclelog_core::{
    find_mood, EntryDraft, EntryService, EntryServiceError, EntryValidationError,
    InMemoryEntryRepository, EMPTY_PLAN_MESSAGE,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

fn service() -> EntryService<InMemoryEntryRepository> {
    EntryService::new(InMemoryEntryRepository::new())
}

#[test]
fn save_draft_stores_entry_newest_first() {
    let mut service = service();

    let mut first = EntryDraft::new(date(5));
    first.add_symptom("Pelvic pain", 6).unwrap();
    let first = service.save_draft(first).unwrap();

    let mut second = EntryDraft::new(date(3));
    second.set_journal("backdated note");
    let second = service.save_draft(second).unwrap();

    let snapshot = service.snapshot();
    assert_eq!(service.entry_count(), 2);
    assert_eq!(snapshot[0].id, second.id);
    assert_eq!(snapshot[1].id, first.id);
    assert_eq!(service.get_entry(first.id).unwrap().symptoms[0].rating, 6);
}

#[test]
fn save_draft_rejects_empty_draft() {
    let mut service = service();
    let mut draft = EntryDraft::new(date(5));
    draft.toggle_mood(find_mood("Calm").unwrap());

    let err = service.save_draft(draft).unwrap_err();
    assert_eq!(
        err,
        EntryServiceError::InvalidEntry(EntryValidationError::EmptyEntry)
    );
    assert_eq!(service.entry_count(), 0);
}

#[test]
fn save_entry_rejects_duplicate_ids() {
    let mut service = service();
    let mut draft = EntryDraft::new(date(5));
    draft.set_journal("once");
    let saved = service.save_draft(draft).unwrap();

    let err = service.save_entry(saved).unwrap_err();
    assert!(matches!(err, EntryServiceError::Repo(_)));
}

#[test]
fn insights_and_plan_read_current_snapshot() {
    let mut service = service();
    assert_eq!(service.visit_plan("", ""), EMPTY_PLAN_MESSAGE);
    assert_eq!(service.insights().pcos.matched_count, 0);

    let mut draft = EntryDraft::new(date(5));
    draft.add_symptom("acne", 4).unwrap();
    draft.add_symptom("BLOATING", 7).unwrap();
    draft.toggle_mood(find_mood("Tired").unwrap());
    service.save_draft(draft).unwrap();

    let insights = service.insights();
    assert_eq!(insights.entry_count, 1);
    assert_eq!(insights.pcos.matched_count, 1);
    assert_eq!(insights.endometriosis.matched_count, 1);

    let plan = service.visit_plan("cramps", "");
    assert!(plan.contains("Entries: 1\n"));
    assert!(plan.contains("  - Tired (1 days)\n"));
    assert!(plan.contains("• cramps\n\n"));
}
