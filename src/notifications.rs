//! # Notification Schedule Builder
//!
//! Produces the day's reminder schedule: one event per row of the static
//! [`NOTIFICATION_TABLE`], each pairing a fixed title/body/route template
//! with a trigger clock-time derived from the canonical prayer times.
//!
//! The builder only returns data. Registering device-level alerts, and
//! resolving a `route` into in-app navigation when a notification is
//! tapped, belong to the platform layer around this crate.
//!
//! Two quirks are kept deliberately, matching the schedule the shipped
//! application has always used:
//!
//! - Output order is declaration order, not chronological order: the
//!   darood reminder (Asr + 50 minutes) precedes the maghrib entry in the
//!   sequence even when maghrib triggers earlier. Nothing re-sorts.
//! - The mid-morning istighfar reminder fires at the literal `"10.00"`
//!   (dot separator), unlike every other "HH:MM" trigger. The literal is
//!   emitted verbatim.
//!
//! The morning and evening Sayyidul Istighfar entries share a name on
//! purpose; names are not identifiers.

use crate::clock::{self, ScheduleError};
use crate::PrayerField::{self, Asr, Dhuhr, Fajr, Isha, Maghrib, Sunrise};
use crate::{NotificationContent, NotificationEvent, PrayerTimes};

/// How a notification's trigger time is derived.
#[derive(Clone, Copy, Debug)]
pub enum Trigger {
    /// A canonical instant plus a signed minute offset.
    Offset(PrayerField, i32),
    /// A verbatim clock literal, emitted without parsing.
    Fixed(&'static str),
}

/// One row of the static schedule: name, trigger, title, body, route.
pub type NotificationRow = (&'static str, Trigger, &'static str, &'static str, &'static str);

/// The day's reminders in emission order.
pub const NOTIFICATION_TABLE: [NotificationRow; 10] = [
    (
        "fajr",
        Trigger::Offset(Fajr, 0),
        "Fajr",
        "It is time for the Fajr prayer.",
        "prayer_tracker",
    ),
    (
        "sayyidul_istighfar",
        Trigger::Offset(Sunrise, 5),
        "Sayyidul Istighfar",
        "Begin the day with the master supplication for forgiveness.",
        "sayyidul_istighfar",
    ),
    (
        "istigfar_mid_time",
        Trigger::Fixed("10.00"),
        "Istighfar",
        "Pause for a moment of istighfar.",
        "istigfar",
    ),
    (
        "dhuhr",
        Trigger::Offset(Dhuhr, 0),
        "Dhuhr",
        "It is time for the Dhuhr prayer.",
        "prayer_tracker",
    ),
    (
        "asr",
        Trigger::Offset(Asr, 0),
        "Asr",
        "It is time for the Asr prayer.",
        "prayer_tracker",
    ),
    (
        "darood",
        Trigger::Offset(Asr, 50),
        "Darood",
        "Send blessings upon the Prophet.",
        "darood",
    ),
    (
        "maghrib",
        Trigger::Offset(Maghrib, 0),
        "Maghrib",
        "It is time for the Maghrib prayer.",
        "prayer_tracker",
    ),
    (
        "sayyidul_istighfar",
        Trigger::Offset(Maghrib, 20),
        "Sayyidul Istighfar",
        "Close the day with the master supplication for forgiveness.",
        "sayyidul_istighfar",
    ),
    (
        "isha",
        Trigger::Offset(Isha, 0),
        "Isha",
        "It is time for the Isha prayer.",
        "prayer_tracker",
    ),
    (
        "sleep_adhkar",
        Trigger::Offset(Isha, 90),
        "Before Sleep",
        "Recite the adhkar of sleep before turning in.",
        "sleep_adhkar",
    ),
];

/// Template for the conditional eleventh entry announcing tomorrow's Fajr.
const NEXT_DAY_FAJR: (&str, &str, &str, &str) = (
    "fajr_next_day",
    "Fajr",
    "It is time for the Fajr prayer.",
    "prayer_tracker",
);

/// Build the day's notification schedule.
///
/// Returns the ten events of [`NOTIFICATION_TABLE`] in declaration order.
/// When `next_day_fajr` is supplied an eleventh `"fajr_next_day"` event is
/// appended whose `time` is the supplied string unmodified: it is not
/// parsed, offset or reformatted, so whatever text the external calculator
/// produced passes straight through.
///
/// Fails on the first malformed or missing canonical time; no partial
/// schedule is produced.
pub fn build_notifications(
    times: &PrayerTimes,
    next_day_fajr: Option<&str>,
) -> Result<Vec<NotificationEvent>, ScheduleError> {
    let mut events = Vec::with_capacity(NOTIFICATION_TABLE.len() + 1);
    for &(name, trigger, title, body, route) in &NOTIFICATION_TABLE {
        let time = match trigger {
            Trigger::Offset(field, offset) => clock::shift(times.get(field)?, offset)?,
            Trigger::Fixed(literal) => literal.to_string(),
        };
        events.push(NotificationEvent {
            name: name.to_string(),
            time,
            content: NotificationContent {
                title: title.to_string(),
                body: body.to_string(),
            },
            route: route.to_string(),
        });
    }

    if let Some(fajr_time) = next_day_fajr {
        let (name, title, body, route) = NEXT_DAY_FAJR;
        events.push(NotificationEvent {
            name: name.to_string(),
            time: fajr_time.to_string(),
            content: NotificationContent {
                title: title.to_string(),
                body: body.to_string(),
            },
            route: route.to_string(),
        });
    }

    Ok(events)
}
