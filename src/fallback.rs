//! # Fallback Schedule
//!
//! A fixed, representative set of canonical prayer times used when the
//! schedule file is missing or unreadable. The values are a plausible
//! mid-latitude day, not an astronomical computation, so the application
//! can keep rendering a timeline instead of crashing; the renderer shows
//! an APPROXIMATE warning whenever this schedule is in use.
//!
//! Accuracy trade-off is deliberate: real canonical times shift by a few
//! minutes every day and by hours across seasons and latitudes. The only
//! guarantees here are that all eight instants are present, well-formed
//! and in ascending liturgical order, so every downstream computation
//! succeeds.

use crate::PrayerTimes;

/// A typical day's canonical times, all fields present.
pub fn typical() -> PrayerTimes {
    PrayerTimes {
        fajr: Some("04:45".to_string()),
        sunrise: Some("06:00".to_string()),
        dhuhr: Some("12:05".to_string()),
        asr: Some("15:25".to_string()),
        maghrib: Some("18:10".to_string()),
        isha: Some("19:25".to_string()),
        midnight: Some("23:55".to_string()),
        lastthird: Some("02:50".to_string()),
        next_day_fajr: None,
    }
}
