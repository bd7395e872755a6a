//! # Minutes-of-Day Clock Arithmetic
//!
//! Shared time helpers for the slot calculator and the notification
//! builder. The crate's external time format is a "HH:MM" 24-hour string;
//! internally every computation works on an integer minutes-of-day value
//! (0..=1439) so that a boundary is parsed once and formatted once instead
//! of round-tripping through text on every arithmetic step.
//!
//! ## Day-wrap behavior
//!
//! Offsets are applied modulo 1440. An instant pushed past midnight wraps
//! the hour back to 0 with no indication that it now belongs to the next
//! calendar day: "23:55" plus 10 minutes is "00:05". The tahajjud slot's
//! end (Fajr − 1 minute) and the isha slot's end (the solar-midnight
//! marker) both rely on this. Consumers that need real day-rollover
//! tracking must compare against the canonical times themselves; this
//! module deliberately does not grow a day component.

use thiserror::Error;

/// Failures shared by both core computations.
///
/// Both variants are local and synchronous, and both abort the whole
/// invocation: there is no partial slot list or partial notification
/// schedule. Retrying with identical input fails identically since the
/// functions are pure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A time string was not parseable as 24-hour "HH:MM".
    #[error("invalid time format: {0:?} (expected 24-hour \"HH:MM\")")]
    InvalidTimeFormat(String),

    /// A required canonical instant was absent from the input.
    #[error("missing canonical prayer time: {0}")]
    MissingField(crate::PrayerField),
}

/// Minutes in a day; all offset arithmetic is modulo this.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parse a "HH:MM" string into minutes since midnight.
///
/// Accepts exactly what `chrono` accepts for `%H:%M`: a 24-hour clock
/// with a colon separator. Anything else ("5am", "10.00", trailing
/// garbage) is an [`ScheduleError::InvalidTimeFormat`].
pub fn parse_hhmm(text: &str) -> Result<i32, ScheduleError> {
    let time = chrono::NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|_| ScheduleError::InvalidTimeFormat(text.to_string()))?;
    Ok(chrono::Timelike::num_seconds_from_midnight(&time) as i32 / 60)
}

/// Apply a signed minute offset, wrapping within the 24-hour day.
pub fn apply_offset(minutes_of_day: i32, offset: i32) -> i32 {
    (minutes_of_day + offset).rem_euclid(MINUTES_PER_DAY)
}

/// Render minutes since midnight as a zero-padded "HH:MM" string.
pub fn format_hhmm(minutes_of_day: i32) -> String {
    format!("{:02}:{:02}", minutes_of_day / 60, minutes_of_day % 60)
}

/// Parse, offset and re-render in one step.
///
/// This is the boundary-derivation primitive both static tables are
/// evaluated with: `shift("06:00", 25)` is "06:25", `shift("12:00", -3)`
/// is "11:57".
pub fn shift(text: &str, offset: i32) -> Result<String, ScheduleError> {
    Ok(format_hhmm(apply_offset(parse_hhmm(text)?, offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_and_bare_hours() {
        assert_eq!(parse_hhmm("05:00").unwrap(), 300);
        assert_eq!(parse_hhmm("5:00").unwrap(), 300);
        assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
        assert_eq!(parse_hhmm("00:00").unwrap(), 0);
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["5am", "10.00", "25:00", "12:61", "12", "", "12:00pm"] {
            match parse_hhmm(bad) {
                Err(ScheduleError::InvalidTimeFormat(text)) => assert_eq!(text, bad),
                other => panic!("expected InvalidTimeFormat for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn offsets_wrap_across_midnight_without_day_marker() {
        // Forward wrap: 23:55 + 10 minutes lands on 00:05.
        assert_eq!(shift("23:55", 10).unwrap(), "00:05");
        // Backward wrap: 00:00 - 1 minute lands on 23:59.
        assert_eq!(shift("00:00", -1).unwrap(), "23:59");
    }

    #[test]
    fn shift_applies_signed_offsets() {
        assert_eq!(shift("06:00", 25).unwrap(), "06:25");
        assert_eq!(shift("12:00", -3).unwrap(), "11:57");
        assert_eq!(shift("15:30", 50).unwrap(), "16:20");
        assert_eq!(shift("18:00", 0).unwrap(), "18:00");
    }

    #[test]
    fn formats_are_zero_padded() {
        assert_eq!(format_hhmm(65), "01:05");
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(1439), "23:59");
    }
}
