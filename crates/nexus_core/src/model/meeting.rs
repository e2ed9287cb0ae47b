//! Meetings and educator office-hour slots.
//!
//! # Invariants
//! - Meetings are immutable once stored.
//! - Slot status only moves forward: `available -> requested -> booked`, or
//!   straight from `available` to `booked`.

use super::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// Audience of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingKind {
    Student,
    Faculty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: EntityId,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: MeetingKind,
    pub link: String,
}

impl Meeting {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        kind: MeetingKind,
        link: impl Into<String>,
    ) -> Self {
        Self::with_id(new_entity_id(), title, date, time, kind, link)
    }

    pub fn with_id(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        kind: MeetingKind,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            time: time.into(),
            kind,
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Requested,
    Booked,
}

/// One bookable office-hour window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeHourSlot {
    pub id: EntityId,
    /// Range text, e.g. `10:00 AM - 10:40 AM`.
    pub time: String,
    /// Weekday name, e.g. `Saturday`.
    pub day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: SlotStatus,
}

impl OfficeHourSlot {
    /// Creates an open slot with no requester.
    pub fn available(time: impl Into<String>, day: impl Into<String>) -> Self {
        Self::available_with_id(new_entity_id(), time, day)
    }

    pub fn available_with_id(
        id: impl Into<EntityId>,
        time: impl Into<String>,
        day: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            day: day.into(),
            student_name: None,
            reason: None,
            status: SlotStatus::Available,
        }
    }

    /// Bound student, if one requested this slot.
    pub fn requester(&self) -> Option<&str> {
        self.student_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Binds a student to an open slot.
    ///
    /// Returns `false` (and leaves the slot untouched) unless the slot is
    /// still `available`.
    pub fn request(&mut self, student_name: impl Into<String>, reason: Option<String>) -> bool {
        if self.status != SlotStatus::Available {
            return false;
        }
        self.student_name = Some(student_name.into());
        self.reason = reason;
        self.status = SlotStatus::Requested;
        true
    }

    /// Marks the slot booked. Returns `false` when it already was.
    pub fn book(&mut self) -> bool {
        if self.status == SlotStatus::Booked {
            return false;
        }
        self.status = SlotStatus::Booked;
        true
    }
}
