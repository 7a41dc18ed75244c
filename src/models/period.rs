//! Shift periods.
//!
//! The set of periods is closed. Each has a canonical start hour, which
//! feeds the break arithmetic, and a display range, which does not.

use serde::{Deserialize, Serialize};

/// A named block of the working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShiftPeriod {
    /// 07:00 - 12:00.
    Morning,
    /// 13:00 - 18:00.
    Afternoon,
    /// 08:00 - 18:00.
    FullDay,
}

impl ShiftPeriod {
    /// All periods in display order.
    pub const ALL: [ShiftPeriod; 3] = [Self::Morning, Self::Afternoon, Self::FullDay];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::FullDay => "Full Day",
        }
    }

    /// Start hour used as the base of break times.
    pub fn start_hour(&self) -> f64 {
        match self {
            Self::Morning => 7.0,
            Self::Afternoon => 13.0,
            Self::FullDay => 8.0,
        }
    }

    /// Display time range.
    pub fn time_range(&self) -> &'static str {
        match self {
            Self::Morning => "07:00 - 12:00",
            Self::Afternoon => "13:00 - 18:00",
            Self::FullDay => "08:00 - 18:00",
        }
    }
}

impl std::str::FromStr for ShiftPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "full-day" | "fullday" | "full day" | "full_day" => Ok(Self::FullDay),
            other => Err(format!("unknown shift period '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_hours() {
        assert_eq!(ShiftPeriod::Morning.start_hour(), 7.0);
        assert_eq!(ShiftPeriod::Afternoon.start_hour(), 13.0);
        assert_eq!(ShiftPeriod::FullDay.start_hour(), 8.0);
    }

    #[test]
    fn test_labels_and_ranges() {
        assert_eq!(ShiftPeriod::FullDay.label(), "Full Day");
        assert_eq!(ShiftPeriod::Morning.time_range(), "07:00 - 12:00");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Morning".parse::<ShiftPeriod>(), Ok(ShiftPeriod::Morning));
        assert_eq!("full-day".parse::<ShiftPeriod>(), Ok(ShiftPeriod::FullDay));
        assert!("evening".parse::<ShiftPeriod>().is_err());
    }
}
