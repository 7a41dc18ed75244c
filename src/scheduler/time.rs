//! Clock-time formatting for break boundaries.
//!
//! Break arithmetic is done in decimal hours (`13.25` = 13:15). Hours are
//! floored and the remaining fraction is rounded to whole minutes. There
//! is no wrap past midnight: `25.0` renders as `"25:00"`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when the rounded minutes reach 60 (e.g. `7.9999`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinuteRollover {
    /// Carry into the hour: `7.9999` → `"08:00"`.
    #[default]
    Carry,
    /// Keep the legacy output: `7.9999` → `"07:60"`.
    Preserve,
}

/// An hour/minute pair ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Whole hours (not wrapped at 24).
    pub hours: i64,
    /// Minutes; only reaches 60 under [`MinuteRollover::Preserve`].
    pub minutes: i64,
}

impl ClockTime {
    /// Converts decimal hours into a clock time.
    pub fn from_hours(hour_decimal: f64, rollover: MinuteRollover) -> Self {
        let floored = hour_decimal.floor();
        let mut hours = floored as i64;
        let mut minutes = ((hour_decimal - floored) * 60.0).round() as i64;
        if minutes == 60 && rollover == MinuteRollover::Carry {
            hours += 1;
            minutes = 0;
        }
        Self { hours, minutes }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Formats decimal hours as zero-padded `"HH:MM"`, carrying 60 minutes
/// into the hour.
///
/// # Example
///
/// ```
/// use shift_roster::scheduler::format_time;
///
/// assert_eq!(format_time(7.0), "07:00");
/// assert_eq!(format_time(7.1), "07:06");
/// assert_eq!(format_time(13.5), "13:30");
/// ```
pub fn format_time(hour_decimal: f64) -> String {
    format_time_with(hour_decimal, MinuteRollover::default())
}

/// Formats decimal hours under an explicit rollover policy.
pub fn format_time_with(hour_decimal: f64, rollover: MinuteRollover) -> String {
    ClockTime::from_hours(hour_decimal, rollover).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_hours() {
        assert_eq!(format_time(7.0), "07:00");
        assert_eq!(format_time(7.1), "07:06");
        assert_eq!(format_time(13.5), "13:30");
        assert_eq!(format_time(9.25), "09:15");
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn test_hours_always_zero_padded() {
        assert_eq!(format_time(8.75), "08:45");
        assert_eq!(format_time(1.0 / 60.0), "00:01");
    }

    #[test]
    fn test_no_midnight_wrap() {
        assert_eq!(format_time(25.0), "25:00");
    }

    #[test]
    fn test_rollover_carry() {
        assert_eq!(format_time(7.9999), "08:00");
        assert_eq!(
            ClockTime::from_hours(7.9999, MinuteRollover::Carry),
            ClockTime { hours: 8, minutes: 0 }
        );
    }

    #[test]
    fn test_rollover_preserve() {
        assert_eq!(format_time_with(7.9999, MinuteRollover::Preserve), "07:60");
        assert_eq!(format_time_with(7.5, MinuteRollover::Preserve), "07:30");
    }

    #[test]
    fn test_accumulated_thirds() {
        // 7 + 20/60 + 20/60 + 20/60 lands a hair under or over 8.0
        let t = 7.0 + 20.0 / 60.0 + 20.0 / 60.0 + 20.0 / 60.0;
        assert_eq!(format_time(t), "08:00");
    }
}
