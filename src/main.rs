//! # Prayer Clock Application Entry Point
//!
//! This binary crate wires the library together: load configuration, load
//! the day's canonical times (falling back to the built-in approximate
//! schedule on any failure), run both core computations, and render the
//! result either as an ASCII timeline or as JSON for the consuming
//! application.

// Test modules
#[cfg(test)]
mod tests;

use anyhow::Context;
use chrono::{Local, Timelike};
use serde::Serialize;
use std::env;

use prayer_clock_lib::{
    config::Config, fallback, notifications, prayer_data, renderer, slots, NamedInterval,
    NotificationEvent,
};

/// JSON payload emitted in `--json` mode.
///
/// This is the contract with the consuming application: it renders the
/// slots as the day's timeline and hands the notification events to the
/// platform scheduler.
#[derive(Serialize)]
struct DayOutput {
    date: String,
    location: String,
    approximate: bool,
    slots: Vec<NamedInterval>,
    notifications: Vec<NotificationEvent>,
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let json_mode = args.iter().any(|arg| arg == "--json");
    // An optional positional argument overrides the configured schedule path.
    let path_override = args.iter().find(|arg| !arg.starts_with("--"));

    let config = Config::load();
    let times_path = path_override.unwrap_or(&config.schedule.times_path);

    // Load the day's canonical times with automatic fallback on failure.
    // A missing or corrupt schedule file is expected on first run and
    // handled gracefully.
    let (times, approximate) = match prayer_data::load_from_path(times_path) {
        Ok(times) => (times, false),
        Err(error) => {
            eprintln!("Failed to load prayer times from {}: {}", times_path, error);
            eprintln!("Falling back to the built-in approximate schedule");
            (fallback::typical(), true)
        }
    };

    let slots = slots::compute_slots(&times).context("computing prayer slots")?;

    let next_day_fajr = if config.schedule.next_day_fajr {
        times.next_day_fajr.as_deref()
    } else {
        None
    };
    let events = notifications::build_notifications(&times, next_day_fajr)
        .context("building notification schedule")?;

    let now = Local::now();

    if json_mode {
        let output = DayOutput {
            date: now.format("%Y-%m-%d").to_string(),
            location: config.schedule.location.clone(),
            approximate,
            slots,
            notifications: events,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let now_minutes = (now.hour() * 60 + now.minute()) as i32;
    renderer::draw_ascii(&slots, &events, now_minutes, approximate, &config);

    Ok(())
}
