use nexus_core::{
    AppStore, Course, OfficeHourSlot, Route, StoreChange, StoreError, StoreObserver, StoreProvider,
    ToastKind,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingObserver {
    batches: Mutex<Vec<Vec<StoreChange>>>,
}

impl RecordingObserver {
    fn batches(&self) -> Vec<Vec<StoreChange>> {
        self.batches.lock().unwrap().clone()
    }
}

impl StoreObserver for RecordingObserver {
    fn on_change(&self, changes: &[StoreChange]) {
        self.batches.lock().unwrap().push(changes.to_vec());
    }
}

#[test]
fn observers_receive_one_batch_per_mutation() {
    let mut store = AppStore::default();
    let observer = Arc::new(RecordingObserver::default());
    store.subscribe(observer.clone());

    store.add_course(Course::new("Cloud", "Free", "2026-01-30", "", ""));
    store.set_current_route(Route::Classroom);

    assert_eq!(
        observer.batches(),
        vec![
            vec![StoreChange::Courses, StoreChange::Notifications],
            vec![StoreChange::Route],
        ]
    );
}

#[test]
fn approval_cascade_is_reported_as_one_batch() {
    let mut store = AppStore::default();
    store.add_office_hour_slot(OfficeHourSlot::available_with_id(
        "s1",
        "10:00 AM - 10:40 AM",
        "Saturday",
    ));
    store.request_office_hour("s1", "Rahul Sharma", None);

    let observer = Arc::new(RecordingObserver::default());
    store.subscribe(observer.clone());
    store.approve_office_hour("s1");

    let batches = observer.batches();
    assert_eq!(batches.len(), 1);
    assert!(batches[0].contains(&StoreChange::OfficeHours));
    assert!(batches[0].contains(&StoreChange::Meetings));
    assert!(batches[0].contains(&StoreChange::Notifications));
    assert!(batches[0].contains(&StoreChange::Toasts));
}

#[test]
fn no_op_mutations_are_not_published() {
    let mut store = AppStore::default();
    let observer = Arc::new(RecordingObserver::default());
    store.subscribe(observer.clone());

    store.remove_toast("missing");
    store.mark_notifications_read();
    store.approve_office_hour("missing");

    assert!(observer.batches().is_empty());
}

#[test]
fn unsubscribed_observer_stops_receiving() {
    let mut store = AppStore::default();
    let observer = Arc::new(RecordingObserver::default());
    let id = store.subscribe(observer.clone());

    store.notify("hello", ToastKind::Info, None);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.notify("again", ToastKind::Info, None);

    assert_eq!(observer.batches(), vec![vec![StoreChange::Toasts]]);
}

#[test]
fn provider_guards_access_until_installed() {
    let mut provider = StoreProvider::new();
    let err = provider.store().err().unwrap();
    assert_eq!(err, StoreError::NotInitialized);
    assert!(err.to_string().contains("before initialization"));

    provider.install(AppStore::default()).unwrap();
    provider
        .store_mut()
        .unwrap()
        .set_calendar_open(true);
    assert!(provider.store().unwrap().is_calendar_open());
}
