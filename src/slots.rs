//! # Prayer Slot Calculator
//!
//! Turns one day's canonical prayer times into the ten named intervals the
//! timeline view renders: the five prayer windows, the two restricted
//! windows around sunrise and the zenith, israkh, and the midnight and
//! tahajjud night divisions.
//!
//! The whole mapping is the static [`SLOT_TABLE`]: each slot is a pair of
//! (anchor instant, minute offset) bounds, evaluated left to right. Keeping
//! it declarative means the complete offset scheme is auditable in one
//! screen and testable exhaustively.
//!
//! The table encodes abutting neighbours (israkh ends where the zenith
//! restriction starts, and so on), but nothing here validates ordering:
//! canonical times supplied out of ascending order yield intervals whose
//! end precedes their start.

use crate::clock::{self, ScheduleError};
use crate::PrayerField::{self, Asr, Dhuhr, Fajr, Isha, Lastthird, Maghrib, Midnight, Sunrise};
use crate::{NamedInterval, PrayerTimes};

/// One boundary of a slot: a canonical instant plus a signed minute offset.
pub type SlotBound = (PrayerField, i32);

/// The day's ten slots in liturgical chronological order.
///
/// Layout per row: (slot name, start bound, end bound).
pub const SLOT_TABLE: [(&str, SlotBound, SlotBound); 10] = [
    ("fajr", (Fajr, 0), (Sunrise, 0)),
    ("morning_restricted", (Sunrise, 0), (Sunrise, 15)),
    ("israkh", (Sunrise, 25), (Dhuhr, -3)),
    ("dhuhr_restricted", (Dhuhr, -3), (Dhuhr, 0)),
    ("dhuhr", (Dhuhr, 0), (Asr, -1)),
    ("asr", (Asr, 0), (Maghrib, -1)),
    ("maghrib", (Maghrib, 0), (Isha, -1)),
    ("isha", (Isha, 0), (Midnight, 0)),
    ("midnight", (Midnight, 0), (Lastthird, 0)),
    ("tahajjud", (Lastthird, 0), (Fajr, -1)),
];

/// Compute the day's ten named intervals from the canonical times.
///
/// Output order matches [`SLOT_TABLE`] exactly and every boundary is a
/// zero-padded "HH:MM" string in `[00:00, 23:59]` (offsets wrap modulo the
/// day, see [`clock`]). Fails on the first malformed or missing canonical
/// time; no partial list is produced.
///
/// # Example
/// ```
/// use prayer_clock_lib::{fallback, slots};
///
/// let slots = slots::compute_slots(&fallback::typical()).unwrap();
/// assert_eq!(slots.len(), 10);
/// assert_eq!(slots[0].name, "fajr");
/// ```
pub fn compute_slots(times: &PrayerTimes) -> Result<Vec<NamedInterval>, ScheduleError> {
    let mut intervals = Vec::with_capacity(SLOT_TABLE.len());
    for &(name, (start_field, start_offset), (end_field, end_offset)) in &SLOT_TABLE {
        intervals.push(NamedInterval {
            name: name.to_string(),
            start: clock::shift(times.get(start_field)?, start_offset)?,
            end: clock::shift(times.get(end_field)?, end_offset)?,
        });
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_times() -> PrayerTimes {
        PrayerTimes {
            fajr: Some("05:00".into()),
            sunrise: Some("06:00".into()),
            dhuhr: Some("12:00".into()),
            asr: Some("15:30".into()),
            maghrib: Some("18:00".into()),
            isha: Some("19:30".into()),
            midnight: Some("00:00".into()),
            lastthird: Some("04:00".into()),
            next_day_fajr: None,
        }
    }

    #[test]
    fn produces_ten_slots_in_declared_order() {
        let slots = compute_slots(&sample_times()).unwrap();
        assert_eq!(slots.len(), 10);
        let names: Vec<&str> = slots.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "fajr",
                "morning_restricted",
                "israkh",
                "dhuhr_restricted",
                "dhuhr",
                "asr",
                "maghrib",
                "isha",
                "midnight",
                "tahajjud",
            ]
        );
    }

    #[test]
    fn applies_documented_offsets() {
        let slots = compute_slots(&sample_times()).unwrap();
        let by_name =
            |name: &str| slots.iter().find(|s| s.name == name).expect("slot present");

        let morning = by_name("morning_restricted");
        assert_eq!((morning.start.as_str(), morning.end.as_str()), ("06:00", "06:15"));

        let israkh = by_name("israkh");
        assert_eq!((israkh.start.as_str(), israkh.end.as_str()), ("06:25", "11:57"));

        let zenith = by_name("dhuhr_restricted");
        assert_eq!((zenith.start.as_str(), zenith.end.as_str()), ("11:57", "12:00"));

        let tahajjud = by_name("tahajjud");
        assert_eq!(tahajjud.end, "04:59");
    }

    #[test]
    fn boundaries_stay_within_a_clock_day() {
        let slots = compute_slots(&sample_times()).unwrap();
        for slot in &slots {
            for boundary in [&slot.start, &slot.end] {
                let minutes = crate::clock::parse_hhmm(boundary).unwrap();
                assert!((0..1440).contains(&minutes), "{} out of range", boundary);
            }
        }
    }

    #[test]
    fn adjacent_day_slots_abut() {
        let slots = compute_slots(&sample_times()).unwrap();
        // fajr ends where the sunrise restriction starts, and the zenith
        // restriction is sandwiched between israkh and dhuhr.
        assert_eq!(slots[0].end, slots[1].start);
        assert_eq!(slots[2].end, slots[3].start);
        assert_eq!(slots[3].end, slots[4].start);
        assert_eq!(slots[7].end, slots[8].start);
        assert_eq!(slots[8].end, slots[9].start);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let times = sample_times();
        assert_eq!(compute_slots(&times).unwrap(), compute_slots(&times).unwrap());
    }

    #[test]
    fn malformed_time_fails_whole_computation() {
        let mut times = sample_times();
        times.fajr = Some("5am".into());
        match compute_slots(&times) {
            Err(ScheduleError::InvalidTimeFormat(text)) => assert_eq!(text, "5am"),
            other => panic!("expected InvalidTimeFormat, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_fails_whole_computation() {
        let mut times = sample_times();
        times.lastthird = None;
        match compute_slots(&times) {
            Err(ScheduleError::MissingField(field)) => {
                assert_eq!(field, crate::PrayerField::Lastthird)
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
