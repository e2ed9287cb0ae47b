//! Toast emission and timed expiry.
//!
//! # Responsibility
//! - Decide which toasts a mutation shows and to whom.
//! - Own live toasts together with their expiry schedule.
//!
//! # Invariants
//! - Every live toast has exactly one scheduled expiry, keyed by toast id.
//! - Removing a toast cancels its expiry, so a stale deadline can never
//!   remove a toast created later under the same id.
//! - Removal is idempotent.

use crate::model::notification::{Toast, ToastKind};
use crate::model::user::UserRole;
use crate::model::{new_entity_id, EntityId};
use crate::service::notification_deriver::StoreEvent;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;

/// Toast content before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastDraft {
    pub message: String,
    pub kind: ToastKind,
    pub target_role: Option<UserRole>,
}

impl ToastDraft {
    pub fn new(message: impl Into<String>, kind: ToastKind, target_role: Option<UserRole>) -> Self {
        Self {
            message: message.into(),
            kind,
            target_role,
        }
    }
}

/// Returns the toasts a mutation shows, in display order.
pub fn derive_toasts(event: &StoreEvent<'_>) -> Vec<ToastDraft> {
    match event {
        StoreEvent::OfficeHourApproved {
            slot,
            meeting: Some(_),
        } => vec![
            ToastDraft::new(
                format!("Session Scheduled: Slot approved for {}!", slot.time),
                ToastKind::Info,
                Some(UserRole::Student),
            ),
            ToastDraft::new(
                format!("Slot {} confirmed.", slot.time),
                ToastKind::Success,
                None,
            ),
        ],
        _ => Vec::new(),
    }
}

/// Live toasts plus their cancellable expiry schedule.
#[derive(Debug)]
pub struct ToastEmitter {
    toasts: Vec<Toast>,
    deadlines: HashMap<EntityId, DateTime<Utc>>,
    lifetime: Duration,
}

impl ToastEmitter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            deadlines: HashMap::new(),
            lifetime,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Appends a toast and schedules its removal one lifetime after `now`.
    pub fn emit(&mut self, draft: ToastDraft, now: DateTime<Utc>) -> EntityId {
        let id = new_entity_id();
        self.toasts.push(Toast {
            id: id.clone(),
            message: draft.message,
            kind: draft.kind,
            target_role: draft.target_role,
        });
        self.deadlines.insert(id.clone(), deadline_after(now, self.lifetime));
        debug!(
            "event=toast_emit module=toast status=ok id={} kind={:?} lifetime_ms={}",
            id,
            draft.kind,
            self.lifetime.num_milliseconds()
        );
        id
    }

    /// Removes a toast and cancels its scheduled expiry.
    ///
    /// Returns `false` when the id is not live.
    pub fn remove(&mut self, id: &str) -> bool {
        self.deadlines.remove(id);
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Removes every toast whose deadline is at or before `now`.
    ///
    /// Returns expired ids ordered by deadline.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> Vec<EntityId> {
        let mut due: Vec<(DateTime<Utc>, EntityId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, id.clone()))
            .collect();
        due.sort();

        let expired: Vec<EntityId> = due.into_iter().map(|(_, id)| id).collect();
        for id in &expired {
            self.remove(id);
        }
        expired
    }

    /// Earliest pending deadline, for hosts that sleep until the next tick.
    pub fn next_expiry(&self) -> Option<DateTime<Utc>> {
        self.deadlines.values().min().copied()
    }

    pub fn pending_expiries(&self) -> usize {
        self.deadlines.len()
    }
}

/// `now + lifetime`, saturating at the latest representable instant.
fn deadline_after(now: DateTime<Utc>, lifetime: Duration) -> DateTime<Utc> {
    now.checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::{ToastDraft, ToastEmitter};
    use crate::model::notification::ToastKind;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    #[test]
    fn expiry_fires_only_after_lifetime() {
        let start = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut emitter = ToastEmitter::new(Duration::milliseconds(5_000));
        let id = emitter.emit(ToastDraft::new("hi", ToastKind::Success, None), start);

        assert!(emitter
            .expire_due(start + Duration::milliseconds(4_999))
            .is_empty());
        assert_eq!(emitter.toasts().len(), 1);

        let expired = emitter.expire_due(start + Duration::milliseconds(5_000));
        assert_eq!(expired, vec![id]);
        assert!(emitter.toasts().is_empty());
        assert_eq!(emitter.pending_expiries(), 0);
    }

    #[test]
    fn manual_removal_cancels_expiry() {
        let start = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut emitter = ToastEmitter::new(Duration::milliseconds(5_000));
        let first = emitter.emit(ToastDraft::new("a", ToastKind::Info, None), start);
        let second = emitter.emit(
            ToastDraft::new("b", ToastKind::Error, None),
            start + Duration::milliseconds(3_000),
        );

        assert!(emitter.remove(&first));
        assert!(!emitter.remove(&first));
        assert_eq!(
            emitter.next_expiry(),
            Some(start + Duration::milliseconds(8_000))
        );

        assert!(emitter
            .expire_due(start + Duration::milliseconds(6_000))
            .is_empty());
        assert_eq!(emitter.toasts()[0].id, second);
    }

    #[test]
    fn oversized_lifetime_saturates_deadline() {
        let start = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let mut emitter = ToastEmitter::new(Duration::MAX);
        emitter.emit(ToastDraft::new("sticky", ToastKind::Info, None), start);

        assert_eq!(emitter.next_expiry(), Some(DateTime::<Utc>::MAX_UTC));
        assert!(emitter.expire_due(start + Duration::days(365)).is_empty());
        assert_eq!(emitter.toasts().len(), 1);
    }
}
