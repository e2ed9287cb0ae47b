//! Administrative catalog: courses, campus events, enrollments and hostel
//! bulletins.
//!
//! # Invariants
//! - Enrollment ids and timestamps are assigned by the store, never by callers.
//! - Enrollments are append-only records.

use super::{new_entity_id, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Course offered through the portal catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub name: String,
    /// Display string, e.g. `₹2,499` or `₹0 (Free)`.
    pub cost: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub deadline: String,
    pub description: String,
    pub website: String,
}

impl Course {
    /// Creates a course with a generated id.
    pub fn new(
        name: impl Into<String>,
        cost: impl Into<String>,
        deadline: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self::with_id(new_entity_id(), name, cost, deadline, description, website)
    }

    pub fn with_id(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        cost: impl Into<String>,
        deadline: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost: cost.into(),
            deadline: deadline.into(),
            description: description.into(),
            website: website.into(),
        }
    }
}

/// Campus event open for attendance registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntityId,
    pub name: String,
    pub venue: String,
    pub time: String,
    pub date: String,
    pub capacity: u32,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        venue: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self::with_id(new_entity_id(), name, venue, time, date, capacity)
    }

    pub fn with_id(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        venue: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            venue: venue.into(),
            time: time.into(),
            date: date.into(),
            capacity,
        }
    }
}

/// What an enrollment registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentKind {
    Course,
    Event,
}

impl Display for EnrollmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Course => f.write_str("Course"),
            Self::Event => f.write_str("Event"),
        }
    }
}

/// Student registration for a course or event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EntityId,
    pub student_name: String,
    pub student_email: String,
    /// Course or event name.
    pub item_name: String,
    #[serde(rename = "type")]
    pub kind: EnrollmentKind,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied part of an enrollment; id and timestamp come from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    pub student_name: String,
    pub student_email: String,
    pub item_name: String,
    #[serde(rename = "type")]
    pub kind: EnrollmentKind,
}

impl EnrollmentRequest {
    pub fn new(
        student_name: impl Into<String>,
        student_email: impl Into<String>,
        item_name: impl Into<String>,
        kind: EnrollmentKind,
    ) -> Self {
        Self {
            student_name: student_name.into(),
            student_email: student_email.into(),
            item_name: item_name.into(),
            kind,
        }
    }

    /// Stamps the request into a stored enrollment.
    pub fn into_enrollment(self, id: EntityId, timestamp: DateTime<Utc>) -> Enrollment {
        Enrollment {
            id,
            student_name: self.student_name,
            student_email: self.student_email,
            item_name: self.item_name,
            kind: self.kind,
            timestamp,
        }
    }
}

/// Hostel wing a bulletin is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostelWing {
    Girls,
    Boys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelAnnouncement {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub wing: HostelWing,
    pub content: String,
    pub date: String,
}

impl HostelAnnouncement {
    pub fn new(wing: HostelWing, content: impl Into<String>, date: impl Into<String>) -> Self {
        Self::with_id(new_entity_id(), wing, content, date)
    }

    pub fn with_id(
        id: impl Into<EntityId>,
        wing: HostelWing,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            wing,
            content: content.into(),
            date: date.into(),
        }
    }
}
