use chrono::{NaiveDate, TimeZone, Utc};
use nexus_core::{
    AppStore, ManualClock, MeetingDatePolicy, MeetingKind, NotificationKind, OfficeHourSlot,
    SlotStatus, StoreConfig, ToastKind, UserRole,
};
use std::sync::Arc;

#[test]
fn approving_requested_slot_cascades_once() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s1",
        "10:00 AM - 10:40 AM",
        "Saturday",
    ));
    store.request_office_hour("s1", "Rahul Sharma", Some("DP".to_string()));
    assert_eq!(store.office_hour_slots()[0].status, SlotStatus::Requested);

    store.approve_office_hour("s1");

    assert_eq!(store.office_hour_slots()[0].status, SlotStatus::Booked);
    assert_eq!(store.meetings().len(), 1);
    let meeting = &store.meetings()[0];
    assert_eq!(meeting.title, "Mentorship: Rahul Sharma");
    assert_eq!(meeting.time, "10:00 AM");
    // Next Saturday after Monday 2026-01-05.
    assert_eq!(meeting.date, "2026-01-10");
    assert_eq!(meeting.kind, MeetingKind::Student);
    assert_eq!(meeting.link, "https://meet.google.com/new");

    let meeting_notifications: Vec<_> = store
        .notifications()
        .iter()
        .filter(|n| n.kind == NotificationKind::Meeting)
        .collect();
    assert_eq!(meeting_notifications.len(), 1);
    assert_eq!(meeting_notifications[0].title, "Mentorship Confirmed");
    assert_eq!(
        meeting_notifications[0].message,
        "Prof. approved your session for 10:00 AM - 10:40 AM."
    );
    assert_eq!(meeting_notifications[0].target_role, Some(UserRole::Student));

    let toasts = store.toasts();
    assert_eq!(toasts.len(), 2);
    assert_eq!(
        toasts[0].message,
        "Session Scheduled: Slot approved for 10:00 AM - 10:40 AM!"
    );
    assert_eq!(toasts[0].kind, ToastKind::Info);
    assert_eq!(toasts[0].target_role, Some(UserRole::Student));
    assert_eq!(toasts[1].message, "Slot 10:00 AM - 10:40 AM confirmed.");
    assert_eq!(toasts[1].kind, ToastKind::Success);
    assert_eq!(toasts[1].target_role, None);

    assert_eq!(store.visible_toasts(Some(UserRole::Educator)).len(), 1);
    assert_eq!(store.visible_toasts(Some(UserRole::Student)).len(), 2);

    store.approve_office_hour("s1");
    assert_eq!(store.meetings().len(), 1);
    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.toasts().len(), 2);
}

#[test]
fn approving_unrequested_slot_only_books_it() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s3",
        "11:20 AM - 12:00 PM",
        "Saturday",
    ));

    store.approve_office_hour("s3");

    assert_eq!(store.office_hour_slots()[0].status, SlotStatus::Booked);
    assert!(store.meetings().is_empty());
    assert!(store.notifications().is_empty());
    assert!(store.toasts().is_empty());
}

#[test]
fn unknown_slot_ids_are_ignored() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s1",
        "10:00 AM - 10:40 AM",
        "Saturday",
    ));

    store.request_office_hour("nope", "Rahul Sharma", None);
    store.approve_office_hour("nope");

    assert_eq!(store.office_hour_slots()[0].status, SlotStatus::Available);
    assert!(store.meetings().is_empty());
}

#[test]
fn requesting_a_taken_slot_keeps_first_student() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s2",
        "10:40 AM - 11:20 AM",
        "Saturday",
    ));

    store.request_office_hour("s2", "Sneha Reddy", None);
    store.request_office_hour("s2", "Someone Else", Some("late".to_string()));

    let slot = &store.office_hour_slots()[0];
    assert_eq!(slot.student_name.as_deref(), Some("Sneha Reddy"));
    assert_eq!(slot.reason, None);
}

#[test]
fn new_slots_are_appended_in_publication_order() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id("a", "09:00 AM - 09:40 AM", "Friday"));
    store.add_office_hour_slot(OfficeHourSlot::available_with_id("b", "09:40 AM - 10:20 AM", "Friday"));

    let ids: Vec<&str> = store
        .office_hour_slots()
        .iter()
        .map(|slot| slot.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn fixed_date_policy_pins_meeting_date() {
    let config = StoreConfig {
        meeting_date_policy: MeetingDatePolicy::Fixed(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()),
        placeholder_meeting_link: "https://meet.example.edu/room".to_string(),
        ..StoreConfig::default()
    };
    let mut store = store_with(config);
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s1",
        "02:00 PM - 02:40 PM",
        "Wednesday",
    ));
    store.request_office_hour("s1", "Rahul Sharma", None);

    store.approve_office_hour("s1");

    let meeting = &store.meetings()[0];
    assert_eq!(meeting.date, "2026-03-14");
    assert_eq!(meeting.time, "02:00 PM");
    assert_eq!(meeting.link, "https://meet.example.edu/room");
}

#[test]
fn unparseable_weekday_falls_back_to_placeholder_date() {
    let mut store = store_with(StoreConfig::default());
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s1",
        "10:00 AM - 10:40 AM",
        "Someday",
    ));
    store.request_office_hour("s1", "Rahul Sharma", None);

    store.approve_office_hour("s1");

    assert_eq!(store.meetings()[0].date, "2026-01-10");
}

fn store_with(config: StoreConfig) -> AppStore {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap());
    AppStore::with_clock(config, Arc::new(clock))
}
