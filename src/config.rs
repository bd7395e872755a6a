//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! prayer-config.toml file. It provides a centralized way to configure the
//! location label, schedule file path, and display options.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration loaded from prayer-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Location and schedule-source configuration
    pub schedule: ScheduleConfig,
    /// Terminal display configuration
    pub display: DisplayConfig,
}

/// Where the day's canonical times come from
#[derive(Debug, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// Human-readable location label shown in the timeline header
    pub location: String,
    /// Path to the JSON file written by the external prayer-time calculator
    pub times_path: String,
    /// Whether to schedule the conditional next-day Fajr notification
    /// when the schedule file carries a NextDayFajr value
    pub next_day_fajr: bool,
}

/// Terminal display configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Whether the notification schedule is printed below the timeline
    pub show_notifications: bool,
    /// Marker drawn next to the slot containing the current time
    pub now_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schedule: ScheduleConfig {
                location: "Dhaka, Bangladesh".to_string(),
                times_path: "prayer-times.json".to_string(),
                next_day_fajr: true,
            },
            display: DisplayConfig {
                show_notifications: true,
                now_marker: "▶".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from prayer-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path("prayer-config.toml")
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Invalid config file format: {}", e);
                    eprintln!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save current configuration to prayer-config.toml
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        fs::write("prayer-config.toml", contents)?;
        Ok(())
    }
}
