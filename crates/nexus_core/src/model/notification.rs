//! Platform notifications and ephemeral toasts.
//!
//! # Invariants
//! - Notifications are created unread.
//! - Role targeting is display metadata only: every record is retained for
//!   every role and filtered at read time.

use super::user::UserRole;
use super::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns whether a record targeted at `target` is shown to `viewer`.
///
/// Untargeted records are shown to everyone, including signed-out viewers.
pub fn is_visible_to(target: Option<UserRole>, viewer: Option<UserRole>) -> bool {
    match target {
        None => true,
        Some(role) => viewer == Some(role),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Meeting,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformNotification {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<UserRole>,
}

impl PlatformNotification {
    pub fn is_visible_to(&self, viewer: Option<UserRole>) -> bool {
        is_visible_to(self.target_role, viewer)
    }
}

/// Notification content before the store stamps id, timestamp and read state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub target_role: Option<UserRole>,
}

impl NotificationDraft {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        target_role: Option<UserRole>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            target_role,
        }
    }

    pub fn into_notification(self, id: EntityId, timestamp: DateTime<Utc>) -> PlatformNotification {
        PlatformNotification {
            id,
            title: self.title,
            message: self.message,
            timestamp,
            kind: self.kind,
            read: false,
            target_role: self.target_role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Success,
    Info,
    Error,
}

/// Short-lived banner message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: EntityId,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_role: Option<UserRole>,
}

impl Toast {
    pub fn is_visible_to(&self, viewer: Option<UserRole>) -> bool {
        is_visible_to(self.target_role, viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::is_visible_to;
    use crate::model::user::UserRole;

    #[test]
    fn targeted_records_are_visible_only_to_their_role() {
        for viewer in [UserRole::Student, UserRole::Educator, UserRole::Admin] {
            assert_eq!(
                is_visible_to(Some(UserRole::Educator), Some(viewer)),
                viewer == UserRole::Educator
            );
            assert!(is_visible_to(None, Some(viewer)));
        }
    }

    #[test]
    fn signed_out_viewer_sees_only_untargeted_records() {
        assert!(is_visible_to(None, None));
        assert!(!is_visible_to(Some(UserRole::Student), None));
    }
}
