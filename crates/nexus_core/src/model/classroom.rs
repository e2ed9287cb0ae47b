//! Classroom records: per-subject topics, student sentiment and anonymous
//! questions.
//!
//! # Invariants
//! - One topic per subject and one feedback per `(student_id, subject)`; the
//!   keyed books in `store::collections` enforce this.

use super::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Current topic an educator has dispatched for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomTopic {
    pub id: EntityId,
    pub subject: String,
    pub topic_name: String,
}

impl ClassroomTopic {
    pub fn new(subject: impl Into<String>, topic_name: impl Into<String>) -> Self {
        Self::with_id(new_entity_id(), subject, topic_name)
    }

    pub fn with_id(
        id: impl Into<EntityId>,
        subject: impl Into<String>,
        topic_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            topic_name: topic_name.into(),
        }
    }
}

/// Self-reported progress on a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Need a Refresh")]
    NeedRefresh,
    #[serde(rename = "Help! I'm Stuck")]
    Stuck,
}

impl FeedbackStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::NeedRefresh => "Need a Refresh",
            Self::Stuck => "Help! I'm Stuck",
        }
    }
}

impl Display for FeedbackStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFeedback {
    pub student_id: EntityId,
    pub subject: String,
    pub status: FeedbackStatus,
}

impl StudentFeedback {
    pub fn new(
        student_id: impl Into<EntityId>,
        subject: impl Into<String>,
        status: FeedbackStatus,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            subject: subject.into(),
            status,
        }
    }
}

/// Educator-side triage flag on an anonymous question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionPriority {
    #[default]
    Normal,
    High,
}

impl QuestionPriority {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousQuestion {
    pub id: EntityId,
    pub subject: String,
    pub text: String,
    /// Display timestamp as captured by the submitting client.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<QuestionPriority>,
}

impl AnonymousQuestion {
    pub fn new(
        subject: impl Into<String>,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            subject: subject.into(),
            text: text.into(),
            timestamp: timestamp.into(),
            priority: None,
        }
    }

    /// Unset priority reads as normal.
    pub fn effective_priority(&self) -> QuestionPriority {
        self.priority.unwrap_or_default()
    }

    pub fn toggle_priority(&mut self) {
        self.priority = Some(self.effective_priority().toggled());
    }
}
