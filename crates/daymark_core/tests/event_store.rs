use daymark_core::{
    CalendarDate, Event, EventRepository, EventTime, EventValidationError,
    InMemoryEventRepository, RepoError,
};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

fn time(hour: u32, minute: u32) -> EventTime {
    EventTime::new(hour, minute).unwrap()
}

fn texts(events: &[Event]) -> Vec<&str> {
    events.iter().map(|event| event.text.as_str()).collect()
}

#[test]
fn add_sorts_by_date_regardless_of_insertion_order() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();
    repo.add_event(date(2025, 8, 23), time(10, 0), "Earlier").unwrap();

    let events = repo.list_events();
    assert_eq!(texts(&events), vec!["Earlier", "Demo"]);
    assert_eq!(events[0].date, date(2025, 8, 23));
    assert_eq!(events[0].time.to_string(), "10:00");
    assert_eq!(events[1].date, date(2025, 8, 25));
}

#[test]
fn list_is_non_decreasing_after_many_adds() {
    let mut repo = InMemoryEventRepository::new();
    let days = [17, 3, 28, 3, 11, 1, 30, 11, 5];
    for (index, day) in days.iter().enumerate() {
        repo.add_event(date(2025, 9, *day), time(9, 0), &format!("event {index}"))
            .unwrap();
    }

    let events = repo.list_events();
    assert_eq!(events.len(), days.len());
    assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn same_day_events_keep_insertion_order_not_time_order() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(18, 0), "evening").unwrap();
    repo.add_event(date(2025, 8, 25), time(7, 0), "morning").unwrap();
    repo.add_event(date(2025, 8, 24), time(12, 0), "day before").unwrap();

    assert_eq!(
        texts(&repo.list_events()),
        vec!["day before", "evening", "morning"]
    );
    assert_eq!(
        texts(&repo.events_on(date(2025, 8, 25))),
        vec!["evening", "morning"]
    );
}

#[test]
fn duplicate_add_is_rejected_and_leaves_collection_unchanged() {
    let mut repo = InMemoryEventRepository::new();
    let first = repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();

    let err = repo
        .add_event(date(2025, 8, 25), time(9, 0), "  Demo ")
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateEvent { existing, .. } if existing == first.id));
    assert_eq!(repo.len(), 1);
}

#[test]
fn near_duplicates_are_accepted() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();
    repo.add_event(date(2025, 8, 25), time(9, 1), "Demo").unwrap();
    repo.add_event(date(2025, 8, 26), time(9, 0), "Demo").unwrap();
    repo.add_event(date(2025, 8, 25), time(9, 0), "demo").unwrap();
    assert_eq!(repo.event_count(), 4);
}

#[test]
fn add_rejects_blank_text_without_mutation() {
    let mut repo = InMemoryEventRepository::new();
    let err = repo.add_event(date(2025, 8, 25), time(9, 0), "  ").unwrap_err();
    assert_eq!(err, RepoError::Validation(EventValidationError::EmptyText));
    assert!(repo.is_empty());
}

#[test]
fn edit_preserves_id_and_resorts() {
    let mut repo = InMemoryEventRepository::new();
    let early = repo.add_event(date(2025, 8, 23), time(9, 0), "early").unwrap();
    repo.add_event(date(2025, 8, 25), time(9, 0), "late").unwrap();

    let edited = repo
        .edit_event(early.id, date(2025, 8, 30), time(14, 15), "moved")
        .unwrap();
    assert_eq!(edited.id, early.id);
    assert_eq!(edited.text, "moved");
    assert_eq!(edited.time, time(14, 15));

    let events = repo.list_events();
    assert_eq!(texts(&events), vec!["late", "moved"]);
    assert_eq!(events[1].id, early.id);
    assert_eq!(repo.get_event(early.id), Some(edited));
}

#[test]
fn edit_may_collide_with_an_existing_event() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();
    let other = repo.add_event(date(2025, 8, 26), time(9, 0), "Other").unwrap();

    repo.edit_event(other.id, date(2025, 8, 25), time(9, 0), "Demo")
        .unwrap();
    let events = repo.list_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.text == "Demo"));
}

#[test]
fn edit_missing_id_returns_not_found() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();
    let before = repo.list_events();

    let missing = Uuid::new_v4();
    let err = repo
        .edit_event(missing, date(2025, 8, 25), time(9, 0), "x")
        .unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
    assert_eq!(repo.list_events(), before);
}

#[test]
fn edit_with_blank_text_leaves_event_untouched() {
    let mut repo = InMemoryEventRepository::new();
    let event = repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();

    let err = repo
        .edit_event(event.id, date(2025, 8, 26), time(9, 0), "")
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.get_event(event.id), Some(event));
}

#[test]
fn delete_removes_event_and_missing_id_is_noop() {
    let mut repo = InMemoryEventRepository::new();
    let keep = repo.add_event(date(2025, 8, 25), time(9, 0), "keep").unwrap();
    let drop = repo.add_event(date(2025, 8, 26), time(9, 0), "drop").unwrap();

    assert!(repo.delete_event(drop.id));
    assert!(!repo.delete_event(drop.id));
    assert!(!repo.delete_event(Uuid::new_v4()));

    assert_eq!(repo.list_events(), vec![keep]);
}

#[test]
fn list_returns_a_snapshot() {
    let mut repo = InMemoryEventRepository::new();
    repo.add_event(date(2025, 8, 25), time(9, 0), "Demo").unwrap();

    let mut snapshot = repo.list_events();
    snapshot[0].text = "mutated".to_string();
    snapshot.clear();

    assert_eq!(texts(&repo.list_events()), vec!["Demo"]);
}
