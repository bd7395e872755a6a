//! # Timeline Rendering
//!
//! Renders the computed day to an ASCII terminal: the ten slots as a
//! labelled timeline with a marker on the slot containing "now", followed
//! by the notification schedule. This is the development/CLI view of the
//! same data the mobile application renders as screens.
//!
//! Rendered output goes to stdout; operational warnings go to stderr so
//! the output stays pipeable.

use crate::{clock, config::Config, NamedInterval, NotificationEvent};

/// Find the slot containing the given minutes-of-day instant.
///
/// A slot whose end precedes its start (as clock values) is taken to wrap
/// past midnight, so isha running from 19:30 to a 00:00 solar-midnight
/// marker still claims 23:00. Membership is start-inclusive,
/// end-exclusive. Returns the first matching slot in table order, or
/// `None` when no slot claims the instant (possible around abutment gaps
/// such as the minute before maghrib).
pub fn current_slot_index(slots: &[NamedInterval], now_minutes: i32) -> Option<usize> {
    slots.iter().position(|slot| {
        let (Ok(start), Ok(end)) = (clock::parse_hhmm(&slot.start), clock::parse_hhmm(&slot.end))
        else {
            return false;
        };
        if start <= end {
            (start..end).contains(&now_minutes)
        } else {
            now_minutes >= start || now_minutes < end
        }
    })
}

/// Render the day's slots and notifications to ASCII terminal.
pub fn draw_ascii(
    slots: &[NamedInterval],
    events: &[NotificationEvent],
    now_minutes: i32,
    approximate: bool,
    config: &Config,
) {
    println!("Prayer timeline — {}", config.schedule.location);
    if approximate {
        println!("⚠ APPROXIMATE TIMES\n");
    }

    let name_width = slots.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let marker = &config.display.now_marker;
    let now_index = current_slot_index(slots, now_minutes);

    for (index, slot) in slots.iter().enumerate() {
        let prefix = if now_index == Some(index) {
            marker.as_str()
        } else {
            " "
        };
        println!(
            "{} {:<width$}  {} – {}",
            prefix,
            slot.name,
            slot.start,
            slot.end,
            width = name_width
        );
    }

    if config.display.show_notifications && !events.is_empty() {
        println!("\nNotifications ({})", events.len());
        let name_width = events.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for event in events {
            println!(
                "  {:<5} {:<width$}  {}",
                event.time,
                event.name,
                event.content.title,
                width = name_width
            );
        }
    }
}
