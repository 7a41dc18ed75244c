//! Schedule-entry assembly.
//!
//! Dispatches the break planner once per active shift period and keeps
//! the raw text beside the computed groups.

use tracing::info;

use super::breaks::BreakPlanner;
use crate::models::{
    parse_names, BreakWindow, EntryInputs, EntryShifts, ScheduleEntry, ShiftPeriod,
};

/// Everything needed to build one schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRequest {
    /// Selected role.
    pub role: String,
    /// Selected zone.
    pub zone: String,
    /// Selected location.
    pub location: String,
    /// Selected zone captain.
    pub captain: String,
    /// Schedule a single full-day shift instead of morning + afternoon.
    pub full_day: bool,
    /// Raw text fields.
    pub inputs: EntryInputs,
}

impl EntryRequest {
    /// Creates a request for a role with empty inputs.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..Self::default()
        }
    }

    /// Sets location, zone and captain.
    pub fn at(
        mut self,
        location: impl Into<String>,
        zone: impl Into<String>,
        captain: impl Into<String>,
    ) -> Self {
        self.location = location.into();
        self.zone = zone.into();
        self.captain = captain.into();
        self
    }

    /// Sets morning and afternoon names (split day).
    pub fn with_split_names(
        mut self,
        morning: impl Into<String>,
        afternoon: impl Into<String>,
    ) -> Self {
        self.full_day = false;
        self.inputs.morning_names = morning.into();
        self.inputs.afternoon_names = afternoon.into();
        self
    }

    /// Sets full-day names.
    pub fn with_full_day_names(mut self, names: impl Into<String>) -> Self {
        self.full_day = true;
        self.inputs.full_day_names = names.into();
        self
    }

    /// Sets the raw break fields.
    pub fn with_break(
        mut self,
        offset_hours: impl Into<String>,
        duration_minutes: impl Into<String>,
    ) -> Self {
        self.inputs.break_time = offset_hours.into();
        self.inputs.break_duration = duration_minutes.into();
        self
    }
}

/// Builds a schedule entry from a request.
///
/// # Example
///
/// ```
/// use shift_roster::scheduler::{assemble_entry, BreakPlanner, EntryRequest};
///
/// let request = EntryRequest::new("Registers")
///     .with_split_names("A, B", "C")
///     .with_break("2", "30");
/// let entry = assemble_entry(&BreakPlanner::new(), &request);
/// assert_eq!(entry.headcount(), 3);
/// assert_eq!(entry.inputs.morning_names, "A, B");
/// ```
pub fn assemble_entry(planner: &BreakPlanner, request: &EntryRequest) -> ScheduleEntry {
    let inputs = &request.inputs;
    let window = BreakWindow::from_fields(&inputs.break_time, &inputs.break_duration);

    let plan = |raw: &str, period: ShiftPeriod| {
        planner.assign(parse_names(raw).as_slice(), period.start_hour(), window)
    };

    let shifts = if request.full_day {
        EntryShifts::FullDay {
            full_day: plan(&inputs.full_day_names, ShiftPeriod::FullDay),
        }
    } else {
        EntryShifts::Split {
            morning: plan(&inputs.morning_names, ShiftPeriod::Morning),
            afternoon: plan(&inputs.afternoon_names, ShiftPeriod::Afternoon),
        }
    };

    let entry = ScheduleEntry {
        role: request.role.clone(),
        zone: request.zone.clone(),
        location: request.location.clone(),
        captain: request.captain.clone(),
        inputs: inputs.clone(),
        shifts,
    };
    info!(
        role = %entry.role,
        full_day = entry.is_full_day(),
        breaks = window.is_some(),
        headcount = entry.headcount(),
        "assembled schedule entry"
    );
    entry
}
