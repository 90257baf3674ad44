//! Timestamp rendering for the leading clock segment
//!
//! The segment is a wall-clock time of day in the local timezone. No date
//! is rendered: the console is meant for reading a live session.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How the leading clock segment is rendered
///
/// # Examples
///
/// ```
/// use rust_console_filter::TimestampStyle;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 9, 5, 7).single().unwrap();
/// assert_eq!(TimestampStyle::Clock.render(&at), "9:5:7:0");
/// assert_eq!(TimestampStyle::PaddedClock.render(&at), "09:05:07:000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampStyle {
    /// `hour:minute:second:millis` without zero padding: `9:5:7:42`
    #[default]
    Clock,

    /// Zero-padded fields: `09:05:07:042`
    PaddedClock,

    /// Custom strftime format. A format chrono cannot parse renders as
    /// [`TimestampStyle::Clock`].
    Custom(String),
}

impl TimestampStyle {
    #[must_use]
    pub fn render(&self, at: &DateTime<Local>) -> String {
        match self {
            TimestampStyle::Clock => format!(
                "{}:{}:{}:{}",
                at.hour(),
                at.minute(),
                at.second(),
                millis(at)
            ),
            TimestampStyle::PaddedClock => format!(
                "{:02}:{:02}:{:02}:{:03}",
                at.hour(),
                at.minute(),
                at.second(),
                millis(at)
            ),
            TimestampStyle::Custom(format_str) => {
                let mut rendered = String::new();
                if write!(rendered, "{}", at.format(format_str)).is_err() {
                    return TimestampStyle::Clock.render(at);
                }
                rendered
            }
        }
    }

    /// Whether every specifier of a custom format is one chrono understands
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        match self {
            TimestampStyle::Custom(format_str) => {
                !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }

    #[must_use]
    pub fn render_now(&self) -> String {
        self.render(&Local::now())
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            TimestampStyle::Clock => "Unpadded clock time (9:5:7:42)",
            TimestampStyle::PaddedClock => "Zero-padded clock time (09:05:07:042)",
            TimestampStyle::Custom(_) => "Custom strftime format",
        }
    }
}

// Leap seconds surface as nanos >= 1_000_000_000; keep the field in 0..=999.
fn millis(at: &DateTime<Local>) -> u32 {
    (at.nanosecond() / 1_000_000).min(999)
}
