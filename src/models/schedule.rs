//! Schedule output models.
//!
//! A `ScheduleResult` is the planner's answer for one shift period: one
//! or two break groups whose names, concatenated in order, equal the
//! input name list. A `ScheduleEntry` bundles the results for a role
//! together with the raw form text it was computed from, so an edit can
//! repopulate the form verbatim.

use serde::{Deserialize, Serialize};

use super::period::ShiftPeriod;

/// Workers sharing one break slot.
///
/// `break_start`/`break_end` are `"HH:MM"`, or both empty when no break
/// window was active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakGroup {
    /// Names in input order.
    pub names: Vec<String>,
    /// Break start (`"HH:MM"` or empty).
    pub break_start: String,
    /// Break end (`"HH:MM"` or empty).
    pub break_end: String,
}

impl BreakGroup {
    /// A group with no break.
    pub fn without_break(names: Vec<String>) -> Self {
        Self {
            names,
            break_start: String::new(),
            break_end: String::new(),
        }
    }

    /// A group with a formatted break slot.
    pub fn with_break(
        names: Vec<String>,
        break_start: impl Into<String>,
        break_end: impl Into<String>,
    ) -> Self {
        Self {
            names,
            break_start: break_start.into(),
            break_end: break_end.into(),
        }
    }

    /// Whether both break boundaries are set.
    pub fn has_break(&self) -> bool {
        !self.break_start.is_empty() && !self.break_end.is_empty()
    }

    /// `"HH:MM - HH:MM"`, or `"-"` without a break.
    pub fn break_label(&self) -> String {
        if self.has_break() {
            format!("{} - {}", self.break_start, self.break_end)
        } else {
            "-".to_string()
        }
    }
}

/// Break groups for one shift period, in partition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleResult(Vec<BreakGroup>);

impl ScheduleResult {
    /// Wraps groups produced by the planner.
    pub fn new(groups: Vec<BreakGroup>) -> Self {
        Self(groups)
    }

    /// Groups in order.
    #[inline]
    pub fn groups(&self) -> &[BreakGroup] {
        &self.0
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All names, concatenated in group order.
    pub fn names(&self) -> Vec<&str> {
        self.0
            .iter()
            .flat_map(|g| g.names.iter().map(String::as_str))
            .collect()
    }
}

/// Raw form text an entry was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryInputs {
    /// Morning names as typed.
    pub morning_names: String,
    /// Afternoon names as typed.
    pub afternoon_names: String,
    /// Full-day names as typed.
    pub full_day_names: String,
    /// Break offset (hours after shift start) as typed.
    pub break_time: String,
    /// Break duration (minutes) as typed.
    pub break_duration: String,
}

/// Computed results: either a split day or a single full-day shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryShifts {
    /// One full-day shift.
    FullDay {
        #[serde(rename = "fullDay")]
        full_day: ScheduleResult,
    },
    /// Separate morning and afternoon shifts.
    Split {
        morning: ScheduleResult,
        afternoon: ScheduleResult,
    },
}

impl EntryShifts {
    /// Results paired with their period, in display order.
    pub fn periods(&self) -> Vec<(ShiftPeriod, &ScheduleResult)> {
        match self {
            Self::FullDay { full_day } => vec![(ShiftPeriod::FullDay, full_day)],
            Self::Split { morning, afternoon } => vec![
                (ShiftPeriod::Morning, morning),
                (ShiftPeriod::Afternoon, afternoon),
            ],
        }
    }
}

/// One row of the schedule list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    /// Selected role.
    pub role: String,
    /// Selected zone (empty for a flat role list).
    #[serde(default)]
    pub zone: String,
    /// Selected location (empty for a flat role list).
    #[serde(default)]
    pub location: String,
    /// Selected zone captain (empty for a flat role list).
    #[serde(default)]
    pub captain: String,
    /// Raw text inputs.
    #[serde(flatten)]
    pub inputs: EntryInputs,
    /// Computed break groups.
    #[serde(flatten)]
    pub shifts: EntryShifts,
}

impl ScheduleEntry {
    /// Whether this entry is a single full-day shift.
    pub fn is_full_day(&self) -> bool {
        matches!(self.shifts, EntryShifts::FullDay { .. })
    }

    /// Total number of scheduled names across all periods.
    pub fn headcount(&self) -> usize {
        self.shifts
            .periods()
            .iter()
            .map(|(_, result)| result.names().len())
            .sum()
    }
}
