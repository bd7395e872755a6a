//! # Schedule File Loading
//!
//! Reads the day's canonical prayer times from a local JSON file. The file
//! is written by the surrounding application whenever its prayer-time
//! calculator runs; this crate only consumes it. Shape:
//!
//! ```json
//! {
//!   "Fajr": "05:00",
//!   "Sunrise": "06:00",
//!   "Dhuhr": "12:00",
//!   "Asr": "15:30",
//!   "Maghrib": "18:00",
//!   "Isha": "19:30",
//!   "Midnight": "00:00",
//!   "Lastthird": "04:00",
//!   "NextDayFajr": "05:01"
//! }
//! ```
//!
//! Keys may be omitted; missing instants only fail later, in whichever
//! core computation actually needs them. On any load failure the caller
//! should fall back to [`crate::fallback::typical`] so the application
//! keeps rendering something rather than crashing.

use crate::PrayerTimes;
use std::{fs, io, path::Path};
use thiserror::Error;

/// Errors that can occur while loading or saving the schedule file.
#[derive(Error, Debug)]
pub enum PrayerDataError {
    /// File read or write failed (missing file, permissions).
    #[error("schedule file IO: {0}")]
    Io(#[from] io::Error),

    /// File contents were not valid schedule JSON.
    #[error("schedule file parse: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load canonical prayer times from a JSON file.
///
/// # Example
/// ```no_run
/// use prayer_clock_lib::{fallback, prayer_data};
///
/// let times = prayer_data::load_from_path("prayer-times.json").unwrap_or_else(|err| {
///     eprintln!("Failed to load prayer times: {}", err);
///     fallback::typical()
/// });
/// ```
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PrayerTimes, PrayerDataError> {
    let data = fs::read(path)?;
    let times = serde_json::from_slice(&data)?;
    Ok(times)
}

/// Write canonical prayer times back to a JSON file.
///
/// Pretty-printed so the file stays hand-editable during development.
pub fn save_to_path<P: AsRef<Path>>(path: P, times: &PrayerTimes) -> Result<(), PrayerDataError> {
    let data = serde_json::to_vec_pretty(times)?;
    fs::write(path, data)?;
    Ok(())
}
