//! # End-to-End Test Suite for Prayer Clock
//!
//! These tests exercise the whole pipeline the binary runs: a schedule
//! file on disk, through loading, slot computation and notification
//! building. Unit-level behavior lives in each module's own test block;
//! this file checks that the pieces agree with each other.

use std::fs;
use tempfile::NamedTempFile;

use prayer_clock_lib::{notifications, prayer_data, renderer, slots, PrayerTimes};

/// The worked schedule from the application's reference day.
fn reference_times() -> PrayerTimes {
    PrayerTimes {
        fajr: Some("05:00".into()),
        sunrise: Some("06:00".into()),
        dhuhr: Some("12:00".into()),
        asr: Some("15:30".into()),
        maghrib: Some("18:00".into()),
        isha: Some("19:30".into()),
        midnight: Some("00:00".into()),
        lastthird: Some("04:00".into()),
        next_day_fajr: Some("05:01".into()),
    }
}

#[test]
fn file_to_timeline_pipeline() {
    let temp_file = NamedTempFile::new().unwrap();
    prayer_data::save_to_path(temp_file.path(), &reference_times()).unwrap();

    let times = prayer_data::load_from_path(temp_file.path()).unwrap();
    let slots = slots::compute_slots(&times).unwrap();
    let events = notifications::build_notifications(&times, times.next_day_fajr.as_deref()).unwrap();

    assert_eq!(slots.len(), 10);
    assert_eq!(events.len(), 11);

    // Spot-check the derived boundaries against the reference day.
    assert_eq!(slots[1].name, "morning_restricted");
    assert_eq!(slots[1].start, "06:00");
    assert_eq!(slots[1].end, "06:15");
    assert_eq!(slots[2].start, "06:25");
    assert_eq!(slots[2].end, "11:57");
    assert_eq!(slots[9].end, "04:59");

    // The appended event carries the file's NextDayFajr untouched.
    assert_eq!(events.last().unwrap().name, "fajr_next_day");
    assert_eq!(events.last().unwrap().time, "05:01");
}

#[test]
fn slots_and_notifications_agree_on_prayer_starts() {
    // The five prayer slots and the five prayer notifications are derived
    // from the same canonical instants with a zero offset, so their clock
    // values must line up.
    let times = reference_times();
    let slots = slots::compute_slots(&times).unwrap();
    let events = notifications::build_notifications(&times, None).unwrap();

    for name in ["fajr", "dhuhr", "asr", "maghrib", "isha"] {
        let slot = slots.iter().find(|s| s.name == name).unwrap();
        let event = events.iter().find(|e| e.name == name).unwrap();
        assert_eq!(slot.start, event.time, "start mismatch for {name}");
    }
}

#[test]
fn malformed_file_value_fails_both_computations() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        temp_file.path(),
        br#"{"Fajr": "5am", "Sunrise": "06:00", "Dhuhr": "12:00", "Asr": "15:30",
            "Maghrib": "18:00", "Isha": "19:30", "Midnight": "00:00", "Lastthird": "04:00"}"#,
    )
    .unwrap();

    // The file itself loads fine; the bad value only surfaces when the
    // core computations parse it.
    let times = prayer_data::load_from_path(temp_file.path()).unwrap();
    assert!(slots::compute_slots(&times).is_err());
    assert!(notifications::build_notifications(&times, None).is_err());
}

#[test]
fn now_marker_tracks_reference_day() {
    let slots = slots::compute_slots(&reference_times()).unwrap();

    // 05:30 is inside fajr, 13:00 inside dhuhr, 04:30 inside tahajjud.
    let cases = [(5 * 60 + 30, "fajr"), (13 * 60, "dhuhr"), (4 * 60 + 30, "tahajjud")];
    for (minutes, expected) in cases {
        let index = renderer::current_slot_index(&slots, minutes).unwrap();
        assert_eq!(slots[index].name, expected, "at {minutes} minutes");
    }
}
