//! Clock-time parsing for timeslot bounds.
//!
//! Timeslot bounds are stored as 12-hour clock strings (`"2:00 PM"`). The
//! duration helpers here convert those to minutes-since-midnight arithmetic.
//! Malformed bounds do not error: [`slot_duration_minutes`] falls back to a
//! fixed 120 minutes, matching the behavior the rest of the pipeline (and
//! its historical data) was built around.

use crate::models::Timeslot;
use regex::Regex;
use std::sync::LazyLock;

/// Duration assumed for a slot whose bounds cannot be parsed.
pub const FALLBACK_SLOT_MINUTES: i64 = 120;

/// `H[:MM] AM/PM`, case-insensitive, minutes optional.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(AM|PM)\s*$").expect("clock pattern is valid")
});

/// Parse a 12-hour clock string into minutes since midnight.
///
/// `12 AM` maps to 0 and `12 PM` to 720; other PM hours gain 12 hours. Hours
/// outside 1-12 are not rejected, they just keep the same arithmetic.
/// Returns `None` when the string does not match the pattern at all.
pub fn parse_clock_time(s: &str) -> Option<i64> {
    let caps = CLOCK_RE.captures(s)?;

    let mut hour: i64 = caps[1].parse().ok()?;
    let minute: i64 = caps
        .get(2)
        .map(|m| m.as_str().parse().unwrap_or(0))
        .unwrap_or(0);
    let is_pm = caps[3].eq_ignore_ascii_case("pm");

    if is_pm && hour != 12 {
        hour += 12;
    } else if !is_pm && hour == 12 {
        hour = 0;
    }

    Some(hour * 60 + minute)
}

/// Length of a timeslot in minutes, computed as `end - start` in 24-hour
/// arithmetic.
///
/// If either bound fails to parse the result is exactly
/// [`FALLBACK_SLOT_MINUTES`]; garbage input never raises. A slot whose end
/// precedes its start comes out negative.
pub fn slot_duration_minutes(slot: &Timeslot) -> i64 {
    match (
        parse_clock_time(&slot.start_time),
        parse_clock_time(&slot.end_time),
    ) {
        (Some(start), Some(end)) => end - start,
        _ => FALLBACK_SLOT_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn slot(start: &str, end: &str) -> Timeslot {
        Timeslot::new("t1", Weekday::Mon, start, end)
    }

    #[test]
    fn test_parse_clock_time_basics() {
        assert_eq!(parse_clock_time("12:00 AM"), Some(0));
        assert_eq!(parse_clock_time("1:30 AM"), Some(90));
        assert_eq!(parse_clock_time("11:59 AM"), Some(719));
        assert_eq!(parse_clock_time("12:00 PM"), Some(720));
        assert_eq!(parse_clock_time("2:00 PM"), Some(840));
        assert_eq!(parse_clock_time("11:00 PM"), Some(1380));
    }

    #[test]
    fn test_parse_clock_time_minutes_optional() {
        assert_eq!(parse_clock_time("2 PM"), Some(840));
        assert_eq!(parse_clock_time("12 AM"), Some(0));
    }

    #[test]
    fn test_parse_clock_time_case_and_whitespace() {
        assert_eq!(parse_clock_time("2:00 pm"), Some(840));
        assert_eq!(parse_clock_time("  7:15 Pm "), Some(1155));
        assert_eq!(parse_clock_time("9:00AM"), Some(540));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        assert_eq!(parse_clock_time("noon"), None);
        assert_eq!(parse_clock_time(""), None);
        assert_eq!(parse_clock_time("14:00"), None);
        assert_eq!(parse_clock_time("2:00 XM"), None);
    }

    #[test]
    fn test_duration_afternoon() {
        assert_eq!(slot_duration_minutes(&slot("2:00 PM", "4:00 PM")), 120);
    }

    #[test]
    fn test_duration_across_noon() {
        assert_eq!(slot_duration_minutes(&slot("11:00 AM", "1:00 PM")), 120);
    }

    #[test]
    fn test_duration_from_midnight() {
        assert_eq!(slot_duration_minutes(&slot("12:00 AM", "1:00 AM")), 60);
    }

    #[test]
    fn test_duration_falls_back_on_garbage() {
        // The fallback is load-bearing: malformed bounds must produce exactly
        // 120 minutes, not an error.
        assert_eq!(
            slot_duration_minutes(&slot("noon", "4:00 PM")),
            FALLBACK_SLOT_MINUTES
        );
        assert_eq!(
            slot_duration_minutes(&slot("2:00 PM", "late")),
            FALLBACK_SLOT_MINUTES
        );
        assert_eq!(slot_duration_minutes(&slot("", "")), FALLBACK_SLOT_MINUTES);
    }

    #[test]
    fn test_duration_end_before_start_is_negative() {
        assert_eq!(slot_duration_minutes(&slot("4:00 PM", "2:00 PM")), -120);
    }
}
