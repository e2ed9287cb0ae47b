//! Office-hour approval cascade helpers.
//!
//! # Responsibility
//! - Extract the start time from slot range text.
//! - Choose the date of a synthesized mentorship meeting.
//! - Build that meeting from an approved slot.
//!
//! # Invariants
//! - A meeting is synthesized only for slots with a bound student.
//! - Unparseable weekdays fall back to the legacy placeholder date.

use crate::config::{legacy_placeholder_meeting_date, MeetingDatePolicy, StoreConfig};
use crate::model::meeting::{Meeting, MeetingKind, OfficeHourSlot};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static SLOT_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d{1,2}:\d{2}\s*[AaPp][Mm])\s*-\s*\d{1,2}:\d{2}\s*[AaPp][Mm]\s*$")
        .expect("valid slot range regex")
});

/// Returns the start of a slot range such as `10:00 AM - 10:40 AM`.
///
/// Text that is not a range is returned trimmed and unchanged.
pub fn slot_start_time(range: &str) -> String {
    if let Some(captures) = SLOT_RANGE_RE.captures(range) {
        return captures[1].to_string();
    }
    match range.split_once(" - ") {
        Some((start, _)) => start.trim().to_string(),
        None => range.trim().to_string(),
    }
}

/// Resolves the meeting date for a slot held on `day`, relative to `today`.
pub fn resolve_meeting_date(policy: MeetingDatePolicy, day: &str, today: NaiveDate) -> NaiveDate {
    match policy {
        MeetingDatePolicy::Fixed(date) => date,
        MeetingDatePolicy::NextWeekday => match day.trim().parse::<Weekday>() {
            Ok(weekday) => next_occurrence(weekday, today),
            Err(_) => {
                warn!(
                    "event=meeting_date_resolve module=office_hours status=fallback reason=unparseable_weekday"
                );
                legacy_placeholder_meeting_date()
            }
        },
    }
}

/// Next date falling on `weekday`, strictly after `today`.
pub fn next_occurrence(weekday: Weekday, today: NaiveDate) -> NaiveDate {
    let target = i64::from(weekday.num_days_from_monday());
    let current = i64::from(today.weekday().num_days_from_monday());
    let mut days_ahead = (target - current).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    today + Duration::days(days_ahead)
}

/// Builds the mentorship meeting for an approved slot.
///
/// Returns `None` when nobody requested the slot.
pub fn mentorship_meeting(
    slot: &OfficeHourSlot,
    config: &StoreConfig,
    today: NaiveDate,
) -> Option<Meeting> {
    let student = slot.requester()?;
    let date = resolve_meeting_date(config.meeting_date_policy, &slot.day, today);
    Some(Meeting::new(
        format!("Mentorship: {student}"),
        date.format("%Y-%m-%d").to_string(),
        slot_start_time(&slot.time),
        MeetingKind::Student,
        config.placeholder_meeting_link.as_str(),
    ))
}

#[cfg(test)]
mod tests {
    use super::{mentorship_meeting, next_occurrence, resolve_meeting_date, slot_start_time};
    use crate::config::{legacy_placeholder_meeting_date, MeetingDatePolicy, StoreConfig};
    use crate::model::meeting::{MeetingKind, OfficeHourSlot};
    use chrono::{NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn start_time_is_left_side_of_range() {
        assert_eq!(slot_start_time("10:00 AM - 10:40 AM"), "10:00 AM");
        assert_eq!(slot_start_time("11:20 AM - 12:00 PM"), "11:20 AM");
        assert_eq!(slot_start_time(" 3:15 pm -  4:00 pm "), "3:15 pm");
        assert_eq!(slot_start_time("Morning - Noon"), "Morning");
        assert_eq!(slot_start_time("Noon"), "Noon");
    }

    #[test]
    fn next_occurrence_is_strictly_after_today() {
        // 2026-01-05 is a Monday.
        let monday = date(2026, 1, 5);
        assert_eq!(next_occurrence(Weekday::Sat, monday), date(2026, 1, 10));
        assert_eq!(next_occurrence(Weekday::Mon, monday), date(2026, 1, 12));
        assert_eq!(next_occurrence(Weekday::Sun, date(2026, 1, 10)), date(2026, 1, 11));
    }

    #[test]
    fn fixed_policy_and_bad_weekday_use_placeholder() {
        let monday = date(2026, 1, 5);
        assert_eq!(
            resolve_meeting_date(MeetingDatePolicy::Fixed(date(2026, 2, 1)), "Saturday", monday),
            date(2026, 2, 1)
        );
        assert_eq!(
            resolve_meeting_date(MeetingDatePolicy::NextWeekday, "Someday", monday),
            legacy_placeholder_meeting_date()
        );
    }

    #[test]
    fn meeting_only_for_bound_slots() {
        let config = StoreConfig::default();
        let open = OfficeHourSlot::available("11:20 AM - 12:00 PM", "Saturday");
        assert!(mentorship_meeting(&open, &config, date(2026, 1, 5)).is_none());

        let mut requested = OfficeHourSlot::available("10:00 AM - 10:40 AM", "Saturday");
        requested.request("Rahul Sharma", None);
        let meeting = mentorship_meeting(&requested, &config, date(2026, 1, 5))
            .expect("bound slot yields meeting");
        assert_eq!(meeting.title, "Mentorship: Rahul Sharma");
        assert_eq!(meeting.time, "10:00 AM");
        assert_eq!(meeting.date, "2026-01-10");
        assert_eq!(meeting.kind, MeetingKind::Student);
        assert_eq!(meeting.link, "https://meet.google.com/new");
    }
}
