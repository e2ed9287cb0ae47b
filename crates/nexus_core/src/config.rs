//! Store configuration.
//!
//! # Responsibility
//! - Hold the tunables the store applies to derived records.
//! - Deserialize from host-provided settings with per-field defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Toast lifetime applied when no configuration overrides it.
pub const DEFAULT_TOAST_LIFETIME_MS: u64 = 5_000;
/// Join link stamped on meetings synthesized from office-hour approvals.
pub const DEFAULT_PLACEHOLDER_MEETING_LINK: &str = "https://meet.google.com/new";

/// Date the portal historically used for every approved mentorship session.
pub fn legacy_placeholder_meeting_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 10).unwrap_or(NaiveDate::MIN)
}

/// How the date of a meeting synthesized from an office-hour slot is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "date")]
pub enum MeetingDatePolicy {
    /// Next occurrence of the slot's weekday strictly after today.
    #[default]
    NextWeekday,
    /// Always the given date.
    Fixed(NaiveDate),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub toast_lifetime_ms: u64,
    pub meeting_date_policy: MeetingDatePolicy,
    pub placeholder_meeting_link: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            toast_lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
            meeting_date_policy: MeetingDatePolicy::default(),
            placeholder_meeting_link: DEFAULT_PLACEHOLDER_MEETING_LINK.to_string(),
        }
    }
}
