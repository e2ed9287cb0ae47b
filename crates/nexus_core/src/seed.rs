//! Demo campus state the portal boots with.
//!
//! Seeding writes collections directly, so it emits no notifications or
//! toasts beyond the single launch announcement.

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::model::catalog::{Course, Event, HostelAnnouncement, HostelWing};
use crate::model::classroom::ClassroomTopic;
use crate::model::meeting::{Meeting, MeetingKind, OfficeHourSlot};
use crate::model::notification::{NotificationDraft, NotificationKind};
use crate::model::user::UserRole;
use crate::store::{AppStore, SeedWriter};
use chrono::Duration;
use log::info;
use std::sync::Arc;

/// Builds a store pre-populated with the demo campus catalog.
pub fn demo_store(config: StoreConfig, clock: Arc<dyn Clock>) -> AppStore {
    let launched_at = clock.now() - Duration::hours(2);
    let mut store = AppStore::with_clock(config, clock);
    let mut writer = SeedWriter::new(&mut store);

    writer.courses(demo_courses());
    writer.events(demo_events());
    writer.hostel_announcements(vec![
        HostelAnnouncement::with_id(
            "h1",
            HostelWing::Girls,
            "Mess timings for lunch changed to 12:30 PM.",
            "2025-12-28",
        ),
        HostelAnnouncement::with_id(
            "h6",
            HostelWing::Boys,
            "Cricket tournament registration closes today.",
            "2025-12-28",
        ),
    ]);
    writer.topics(vec![
        ClassroomTopic::with_id("t1", "DSA", "Dynamic Programming Optimization"),
        ClassroomTopic::with_id("t2", "Python", "Asynchronous Programming"),
        ClassroomTopic::with_id("t3", "Machine Learning", "Neural Networks Architecture"),
    ]);
    writer.meetings(vec![Meeting::with_id(
        "m1",
        "Python Revision",
        "2025-12-28",
        "02:30 PM",
        MeetingKind::Student,
        "https://meet.google.com/abc-defg-hij",
    )]);
    writer.office_hour_slots(demo_office_hours());
    writer.notification(
        NotificationDraft::new(
            "Platform Launched",
            "Nexus is now active for campus students.",
            NotificationKind::Info,
            Some(UserRole::Student),
        ),
        launched_at,
        "n1",
    );

    info!(
        "event=store_seed module=seed status=ok courses={} events={} slots={}",
        store.courses().len(),
        store.events().len(),
        store.office_hour_slots().len()
    );
    store
}

fn demo_courses() -> Vec<Course> {
    vec![
        Course::with_id(
            "c1",
            "Cisco Networking Academy",
            "₹0 (Free)",
            "2026-01-27",
            "Master foundational networking skills used globally.",
            "https://www.netacad.com/",
        ),
        Course::with_id(
            "c2",
            "DSA Mastery Program",
            "₹2,499",
            "2026-01-15",
            "Advanced structures and algorithm optimization techniques.",
            "https://nexus.edu/dsa",
        ),
        Course::with_id(
            "c3",
            "Python for AI/ML",
            "₹1,999",
            "2026-01-20",
            "Fast-track your career in Artificial Intelligence.",
            "https://nexus.edu/python",
        ),
        Course::with_id(
            "c4",
            "Full Stack Development",
            "₹4,500",
            "2026-02-05",
            "End-to-end web development with React and Node.js.",
            "https://nexus.edu/fullstack",
        ),
        Course::with_id(
            "c5",
            "Cloud Computing Essentials",
            "₹3,000",
            "2026-01-30",
            "Introduction to AWS, Azure, and GCP architectures.",
            "https://nexus.edu/cloud",
        ),
    ]
}

fn demo_events() -> Vec<Event> {
    vec![
        Event::with_id(
            "e1",
            "Google Developer Groups",
            "CSE Department Seminar Hall",
            "04:00 PM",
            "2026-01-05",
            100,
        ),
        Event::with_id(
            "e2",
            "Swecha Open Source Summit",
            "Mechanical Seminar Hall",
            "10:00 AM",
            "2026-01-12",
            150,
        ),
        Event::with_id(
            "e3",
            "Emerging Technologies Club",
            "Main Auditorium",
            "02:00 PM",
            "2026-01-20",
            300,
        ),
    ]
}

fn demo_office_hours() -> Vec<OfficeHourSlot> {
    let mut rahul = OfficeHourSlot::available_with_id("s1", "10:00 AM - 10:40 AM", "Saturday");
    rahul.request("Rahul Sharma", Some("Need help with DP Optimization".to_string()));
    let mut sneha = OfficeHourSlot::available_with_id("s2", "10:40 AM - 11:20 AM", "Saturday");
    sneha.request("Sneha Reddy", Some("ML Project Architecture Review".to_string()));
    let open = OfficeHourSlot::available_with_id("s3", "11:20 AM - 12:00 PM", "Saturday");
    vec![rahul, sneha, open]
}
