//! Notification derivation rules.
//!
//! # Responsibility
//! - Map a completed mutation to the platform notifications it announces.
//!
//! # Invariants
//! - Derivation is pure: same event, same drafts.
//! - Drafts carry the audience role; visibility is decided at read time.

use crate::model::catalog::{Course, Enrollment, Event, HostelAnnouncement};
use crate::model::classroom::{AnonymousQuestion, ClassroomTopic, StudentFeedback};
use crate::model::meeting::{Meeting, MeetingKind, OfficeHourSlot};
use crate::model::notification::{NotificationDraft, NotificationKind};
use crate::model::user::UserRole;

/// A completed store mutation, as seen by the derivation services.
#[derive(Debug, Clone, Copy)]
pub enum StoreEvent<'a> {
    CourseAdded(&'a Course),
    EventAdded(&'a Event),
    EnrollmentAdded(&'a Enrollment),
    HostelAnnouncementAdded(&'a HostelAnnouncement),
    TopicUpdated(&'a ClassroomTopic),
    FeedbackSubmitted(&'a StudentFeedback),
    QuestionAdded(&'a AnonymousQuestion),
    MeetingAdded(&'a Meeting),
    /// `meeting` is set only when the slot had a bound student.
    OfficeHourApproved {
        slot: &'a OfficeHourSlot,
        meeting: Option<&'a Meeting>,
    },
}

/// Returns the notifications a mutation emits, in insertion order.
pub fn derive_notifications(event: &StoreEvent<'_>) -> Vec<NotificationDraft> {
    match event {
        StoreEvent::CourseAdded(course) => vec![NotificationDraft::new(
            "New Course",
            format!("Catalog updated: {}", course.name),
            NotificationKind::Success,
            Some(UserRole::Student),
        )],
        StoreEvent::EventAdded(campus_event) => vec![NotificationDraft::new(
            "New Campus Event",
            format!("{} on {}", campus_event.name, campus_event.date),
            NotificationKind::Info,
            Some(UserRole::Student),
        )],
        // Registration needs administrative follow-up, so this is the one
        // student action that reaches admins.
        StoreEvent::EnrollmentAdded(enrollment) => vec![NotificationDraft::new(
            "Action Required: Enrollment Logged",
            format!(
                "Student {} ({}) has registered for the {}: {}. Check catalog availability.",
                enrollment.student_name,
                enrollment.student_email,
                enrollment.kind,
                enrollment.item_name
            ),
            NotificationKind::Success,
            Some(UserRole::Admin),
        )],
        StoreEvent::HostelAnnouncementAdded(_) => Vec::new(),
        StoreEvent::TopicUpdated(topic) => vec![NotificationDraft::new(
            "Curriculum Update",
            format!("New topic for {}: {}", topic.subject, topic.topic_name),
            NotificationKind::Info,
            Some(UserRole::Student),
        )],
        StoreEvent::FeedbackSubmitted(feedback) => vec![NotificationDraft::new(
            "Student Review",
            format!("Sentiment for {}: {}", feedback.subject, feedback.status),
            NotificationKind::Warning,
            Some(UserRole::Educator),
        )],
        StoreEvent::QuestionAdded(question) => vec![NotificationDraft::new(
            "Anonymous Query",
            format!("Query on {}", question.subject),
            NotificationKind::Info,
            Some(UserRole::Educator),
        )],
        StoreEvent::MeetingAdded(meeting) => vec![NotificationDraft::new(
            "Meeting Scheduled",
            format!("{} on {}", meeting.title, meeting.date),
            NotificationKind::Meeting,
            Some(meeting_audience(meeting.kind)),
        )],
        StoreEvent::OfficeHourApproved { slot, meeting } => match meeting {
            Some(_) => vec![NotificationDraft::new(
                "Mentorship Confirmed",
                format!("Prof. approved your session for {}.", slot.time),
                NotificationKind::Meeting,
                Some(UserRole::Student),
            )],
            None => Vec::new(),
        },
    }
}

fn meeting_audience(kind: MeetingKind) -> UserRole {
    match kind {
        MeetingKind::Student => UserRole::Student,
        MeetingKind::Faculty => UserRole::Educator,
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_notifications, StoreEvent};
    use crate::model::classroom::{FeedbackStatus, StudentFeedback};
    use crate::model::meeting::{Meeting, MeetingKind, OfficeHourSlot};
    use crate::model::notification::NotificationKind;
    use crate::model::user::UserRole;

    #[test]
    fn faculty_meetings_notify_educators() {
        let meeting = Meeting::new("Dept sync", "2026-01-09", "03:00 PM", MeetingKind::Faculty, "");
        let drafts = derive_notifications(&StoreEvent::MeetingAdded(&meeting));
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].target_role, Some(UserRole::Educator));
        assert_eq!(drafts[0].kind, NotificationKind::Meeting);
        assert_eq!(drafts[0].message, "Dept sync on 2026-01-09");
    }

    #[test]
    fn feedback_is_a_warning_for_educators() {
        let feedback = StudentFeedback::new("s-1", "Python", FeedbackStatus::Stuck);
        let drafts = derive_notifications(&StoreEvent::FeedbackSubmitted(&feedback));
        assert_eq!(drafts[0].kind, NotificationKind::Warning);
        assert_eq!(drafts[0].target_role, Some(UserRole::Educator));
        assert_eq!(drafts[0].message, "Sentiment for Python: Help! I'm Stuck");
    }

    #[test]
    fn approval_without_meeting_emits_nothing() {
        let slot = OfficeHourSlot::available("11:20 AM - 12:00 PM", "Saturday");
        let drafts = derive_notifications(&StoreEvent::OfficeHourApproved {
            slot: &slot,
            meeting: None,
        });
        assert!(drafts.is_empty());
    }
}
