//! Global catalog search.
//!
//! # Invariants
//! - Matching is case-insensitive substring search.
//! - Results are grouped courses, events, announcements, topics, and capped
//!   at `SEARCH_RESULT_LIMIT`.
//! - A blank query returns nothing.

use crate::model::EntityId;
use crate::store::AppStore;
use serde::Serialize;

pub const SEARCH_RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchHitKind {
    Course,
    Event,
    Announcement,
    Classroom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SearchHitKind,
}

pub fn search_catalog(store: &AppStore, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches = |value: &str| value.to_lowercase().contains(&needle);

    let courses = store
        .courses()
        .iter()
        .filter(|course| matches(&course.name) || matches(&course.description))
        .map(|course| SearchHit {
            id: course.id.clone(),
            title: course.name.clone(),
            kind: SearchHitKind::Course,
        });
    let events = store
        .events()
        .iter()
        .filter(|event| matches(&event.name) || matches(&event.venue))
        .map(|event| SearchHit {
            id: event.id.clone(),
            title: event.name.clone(),
            kind: SearchHitKind::Event,
        });
    let announcements = store
        .hostel_announcements()
        .iter()
        .filter(|announcement| matches(&announcement.content))
        .map(|announcement| SearchHit {
            id: announcement.id.clone(),
            title: announcement.content.clone(),
            kind: SearchHitKind::Announcement,
        });
    let topics = store
        .topics()
        .iter()
        .filter(|topic| matches(&topic.topic_name) || matches(&topic.subject))
        .map(|topic| SearchHit {
            id: topic.id.clone(),
            title: format!("{}: {}", topic.subject, topic.topic_name),
            kind: SearchHitKind::Classroom,
        });

    courses
        .chain(events)
        .chain(announcements)
        .chain(topics)
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
