use chrono::{Duration, TimeZone, Utc};
use nexus_core::service::calendar::entries_on;
use nexus_core::service::search::SEARCH_RESULT_LIMIT;
use nexus_core::{
    calendar_entries, demo_store, search_catalog, AppStore, CalendarEntryKind, Course,
    ManualClock, SearchHitKind, SlotStatus, StoreConfig, User, UserRole,
};
use std::sync::Arc;

#[test]
fn demo_store_boots_with_catalog_and_pending_requests() {
    let store = seeded();

    assert_eq!(store.courses().len(), 5);
    assert_eq!(store.events().len(), 3);
    assert_eq!(store.topics().len(), 3);
    assert_eq!(store.meetings().len(), 1);
    let statuses: Vec<SlotStatus> = store
        .office_hour_slots()
        .iter()
        .map(|slot| slot.status)
        .collect();
    assert_eq!(
        statuses,
        vec![SlotStatus::Requested, SlotStatus::Requested, SlotStatus::Available]
    );

    assert_eq!(store.notifications().len(), 1);
    let launch = &store.notifications()[0];
    assert_eq!(launch.title, "Platform Launched");
    assert_eq!(launch.timestamp, store.now() - Duration::hours(2));
    assert_eq!(store.unread_count(Some(UserRole::Student)), 1);
    assert_eq!(store.unread_count(Some(UserRole::Educator)), 0);
    assert!(store.toasts().is_empty());
}

#[test]
fn approving_seeded_request_schedules_mentorship() {
    let mut store = seeded();

    store.approve_office_hour("s1");

    assert_eq!(store.meetings().len(), 2);
    assert_eq!(store.meetings()[0].title, "Mentorship: Rahul Sharma");
    assert_eq!(store.unread_count(Some(UserRole::Student)), 2);
    assert_eq!(store.toasts().len(), 2);
}

#[test]
fn student_calendar_combines_deadlines_meetings_and_events() {
    let mut store = seeded();
    store.set_current_user(Some(User::new("u1", "Rahul", "rahul@campus.edu", UserRole::Student)));

    let entries = calendar_entries(&store);
    assert_eq!(entries.len(), 5 + 1 + 3);
    assert_eq!(entries[0].title, "Deadline: Cisco Networking Academy");
    assert_eq!(entries[0].kind, CalendarEntryKind::Deadline);

    let on_day = entries_on(&entries, "2026-01-20");
    let titles: Vec<&str> = on_day.iter().map(|entry| entry.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Deadline: Python for AI/ML", "Emerging Technologies Club"]
    );
}

#[test]
fn approved_mentorship_lands_on_next_saturday() {
    let mut store = seeded();
    store.set_current_user(Some(User::new("u1", "Rahul", "rahul@campus.edu", UserRole::Student)));
    store.approve_office_hour("s1");

    let entries = calendar_entries(&store);
    let on_day = entries_on(&entries, "2026-01-10");

    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].title, "Mentorship: Rahul Sharma");
    assert_eq!(on_day[0].kind, CalendarEntryKind::Meet);
    assert!(entries_on(&entries, "2026-01-11").is_empty());
}

#[test]
fn staff_calendar_shows_meetings_only() {
    let mut store = seeded();
    store.set_current_user(Some(User::new("u2", "Prof", "prof@campus.edu", UserRole::Educator)));

    let entries = calendar_entries(&store);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, CalendarEntryKind::Meet);

    store.set_current_user(None);
    assert!(calendar_entries(&store).is_empty());
}

#[test]
fn search_is_case_insensitive_and_grouped() {
    let store = seeded();

    let hits = search_catalog(&store, "PYTHON");
    let kinds: Vec<SearchHitKind> = hits.iter().map(|hit| hit.kind).collect();
    assert_eq!(kinds, vec![SearchHitKind::Course, SearchHitKind::Classroom]);
    assert_eq!(hits[1].title, "Python: Asynchronous Programming");

    let hall_hits = search_catalog(&store, "seminar hall");
    assert_eq!(hall_hits.len(), 2);
    assert!(hall_hits.iter().all(|hit| hit.kind == SearchHitKind::Event));

    assert!(search_catalog(&store, "   ").is_empty());
}

#[test]
fn search_results_are_capped() {
    let mut store = AppStore::default();
    for index in 0..15 {
        store.add_course(Course::new(
            format!("Workshop {index}"),
            "Free",
            "2026-02-01",
            "",
            "",
        ));
    }

    assert_eq!(search_catalog(&store, "workshop").len(), SEARCH_RESULT_LIMIT);
}

fn seeded() -> AppStore {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap());
    demo_store(StoreConfig::default(), Arc::new(clock))
}
