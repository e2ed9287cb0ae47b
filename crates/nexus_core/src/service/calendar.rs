//! Role-specific calendar projection.
//!
//! # Invariants
//! - Students see course deadlines, student meetings and campus events.
//! - Educators and admins see every meeting and nothing else.
//! - Signed-out viewers see nothing.

use crate::model::meeting::MeetingKind;
use crate::model::user::UserRole;
use crate::store::AppStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEntryKind {
    Deadline,
    Meet,
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CalendarEntryKind,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// Calendar entries for the signed-in user.
pub fn calendar_entries(store: &AppStore) -> Vec<CalendarEntry> {
    match store.viewer_role() {
        None => Vec::new(),
        Some(UserRole::Student) => {
            let deadlines = store.courses().iter().map(|course| CalendarEntry {
                title: format!("Deadline: {}", course.name),
                kind: CalendarEntryKind::Deadline,
                date: course.deadline.clone(),
            });
            let meetings = store
                .meetings()
                .iter()
                .filter(|meeting| meeting.kind == MeetingKind::Student)
                .map(|meeting| CalendarEntry {
                    title: meeting.title.clone(),
                    kind: CalendarEntryKind::Meet,
                    date: meeting.date.clone(),
                });
            let events = store.events().iter().map(|event| CalendarEntry {
                title: event.name.clone(),
                kind: CalendarEntryKind::Event,
                date: event.date.clone(),
            });
            deadlines.chain(meetings).chain(events).collect()
        }
        Some(UserRole::Educator | UserRole::Admin) => store
            .meetings()
            .iter()
            .map(|meeting| CalendarEntry {
                title: meeting.title.clone(),
                kind: CalendarEntryKind::Meet,
                date: meeting.date.clone(),
            })
            .collect(),
    }
}

/// Entries falling on `date` (`YYYY-MM-DD`).
pub fn entries_on<'a>(entries: &'a [CalendarEntry], date: &str) -> Vec<&'a CalendarEntry> {
    entries.iter().filter(|entry| entry.date == date).collect()
}
