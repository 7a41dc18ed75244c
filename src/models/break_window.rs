//! Break window model.
//!
//! A break window starts `offset_hours` after the shift start and lasts
//! `duration_minutes`. A window exists only when both fields were
//! supplied as numbers; `0` is a valid value for either field.

use serde::{Deserialize, Serialize};

/// Offset and length of the staggered break.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakWindow {
    /// Hours after shift start at which the first break begins.
    pub offset_hours: f64,
    /// Length of each break, in minutes.
    pub duration_minutes: f64,
}

impl BreakWindow {
    /// Creates a break window from numeric values.
    pub fn new(offset_hours: f64, duration_minutes: f64) -> Self {
        Self {
            offset_hours,
            duration_minutes,
        }
    }

    /// Builds a window from raw text fields.
    ///
    /// Returns `None` (no break) unless both fields trim to a finite
    /// number. `"0"` is accepted; `""`, `"abc"`, `"inf"` and `"NaN"` are not.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_roster::models::BreakWindow;
    ///
    /// assert_eq!(BreakWindow::from_fields("0", "30"), Some(BreakWindow::new(0.0, 30.0)));
    /// assert_eq!(BreakWindow::from_fields("", "30"), None);
    /// ```
    pub fn from_fields(offset_hours: &str, duration_minutes: &str) -> Option<Self> {
        let offset = parse_number(offset_hours)?;
        let duration = parse_number(duration_minutes)?;
        Some(Self::new(offset, duration))
    }

    /// Break length in hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration_minutes / 60.0
    }
}

fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
