//! # Prayer Clock Core Library
//!
//! This library computes a day's liturgical timeline from a set of canonical
//! prayer times. It is the data layer behind a prayer-tracking application:
//! the surrounding app obtains the canonical times from an external
//! astronomical calculator, hands them to this crate, and gets back two
//! ordered sequences ready for display and for the platform notification
//! scheduler.
//!
//! ## Pipeline
//!
//! 1. **Slot Calculator** ([`slots::compute_slots`]): canonical times →
//!    exactly ten named intervals (fajr through tahajjud) derived by fixed
//!    minute offsets.
//! 2. **Notification Builder** ([`notifications::build_notifications`]):
//!    the same canonical times → ten or eleven notification events, each a
//!    static content template paired with a trigger clock-time.
//!
//! Both stages are pure and stateless: no I/O, no shared state, identical
//! input gives byte-identical output. File loading ([`prayer_data`]),
//! configuration ([`config`]) and terminal rendering ([`renderer`]) live in
//! their own modules around the core.
//!
//! ## Time representation
//!
//! Times are "HH:MM" 24-hour strings at the crate boundary and integer
//! minutes-of-day internally. Offset arithmetic is modulo 1440: a boundary
//! pushed past midnight wraps the hour to 0 without marking the instant as
//! belonging to the next calendar day. Callers that need day-rollover
//! tracking must layer it on top; see [`clock`] for details.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod clock;
pub mod config;
pub mod fallback;
pub mod notifications;
pub mod prayer_data;
pub mod renderer;
pub mod slots;

/// The named canonical instants a day's schedule is derived from.
///
/// The five daily prayers plus the sunrise, solar-midnight and last-third
/// markers. Used both as struct field accessors on [`PrayerTimes`] and as
/// the anchor column of the static offset tables in [`slots`] and
/// [`notifications`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrayerField {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Midnight,
    Lastthird,
}

impl PrayerField {
    /// Canonical key name, matching the schedule file's JSON keys.
    pub fn key(self) -> &'static str {
        match self {
            PrayerField::Fajr => "Fajr",
            PrayerField::Sunrise => "Sunrise",
            PrayerField::Dhuhr => "Dhuhr",
            PrayerField::Asr => "Asr",
            PrayerField::Maghrib => "Maghrib",
            PrayerField::Isha => "Isha",
            PrayerField::Midnight => "Midnight",
            PrayerField::Lastthird => "Lastthird",
        }
    }
}

impl fmt::Display for PrayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Canonical prayer times for one day, as "HH:MM" 24-hour strings.
///
/// Every field is optional because the schedule file is produced by an
/// external calculator and may omit keys; the core functions report a
/// [`clock::ScheduleError::MissingField`] for any instant they actually
/// need. `next_day_fajr` is only consumed by the notification builder and
/// is passed through to the output verbatim.
///
/// Callers are expected to supply instants in ascending chronological
/// order within the day. This is NOT validated: out-of-order input
/// produces intervals whose end precedes their start.
///
/// # Example
/// ```
/// use prayer_clock_lib::PrayerTimes;
///
/// let times = PrayerTimes {
///     fajr: Some("05:00".into()),
///     sunrise: Some("06:00".into()),
///     dhuhr: Some("12:00".into()),
///     asr: Some("15:30".into()),
///     maghrib: Some("18:00".into()),
///     isha: Some("19:30".into()),
///     midnight: Some("00:00".into()),
///     lastthird: Some("04:00".into()),
///     next_day_fajr: None,
/// };
/// assert_eq!(times.get(prayer_clock_lib::PrayerField::Fajr).unwrap(), "05:00");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    #[serde(rename = "Fajr")]
    pub fajr: Option<String>,
    #[serde(rename = "Sunrise")]
    pub sunrise: Option<String>,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: Option<String>,
    #[serde(rename = "Asr")]
    pub asr: Option<String>,
    #[serde(rename = "Maghrib")]
    pub maghrib: Option<String>,
    #[serde(rename = "Isha")]
    pub isha: Option<String>,
    #[serde(rename = "Midnight")]
    pub midnight: Option<String>,
    #[serde(rename = "Lastthird")]
    pub lastthird: Option<String>,
    /// Tomorrow's Fajr, when the external calculator supplies it.
    #[serde(rename = "NextDayFajr", skip_serializing_if = "Option::is_none")]
    pub next_day_fajr: Option<String>,
}

impl PrayerTimes {
    /// Look up a canonical instant, failing if the field is absent.
    pub fn get(&self, field: PrayerField) -> Result<&str, clock::ScheduleError> {
        let value = match field {
            PrayerField::Fajr => &self.fajr,
            PrayerField::Sunrise => &self.sunrise,
            PrayerField::Dhuhr => &self.dhuhr,
            PrayerField::Asr => &self.asr,
            PrayerField::Maghrib => &self.maghrib,
            PrayerField::Isha => &self.isha,
            PrayerField::Midnight => &self.midnight,
            PrayerField::Lastthird => &self.lastthird,
        };
        value
            .as_deref()
            .ok_or(clock::ScheduleError::MissingField(field))
    }
}

/// A named span of the day bounded by two "HH:MM" instants.
///
/// Adjacent slots abut by construction of the offset table; no overlap
/// invariant is enforced at runtime. An interval that crosses midnight
/// (e.g. isha ending at the solar-midnight marker) has `end` < `start`
/// when compared as clock strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedInterval {
    /// Slot identifier, e.g. "fajr" or "dhuhr_restricted".
    pub name: String,
    /// Inclusive start, "HH:MM".
    pub start: String,
    /// Exclusive end, "HH:MM".
    pub end: String,
}

/// Title and body text shown on a delivered notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
}

/// One entry of the day's notification schedule.
///
/// `name` is NOT unique: the morning and evening Sayyidul Istighfar
/// reminders intentionally share a name, so consumers must key on
/// position, not name. `time` is "HH:MM" for every entry except the
/// mid-morning istighfar reminder, which carries the historical literal
/// `"10.00"`. `route` identifies the in-app screen to open when the
/// notification is tapped; resolving it is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub name: String,
    pub time: String,
    pub content: NotificationContent,
    pub route: String,
}
