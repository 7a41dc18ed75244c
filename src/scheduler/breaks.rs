//! Staggered break planner.
//!
//! # Algorithm
//!
//! 1. Without an active break window, every name goes into one group with
//!    no break (this also covers an empty name list).
//! 2. Otherwise split the names into two contiguous halves, the first
//!    taking `ceil(n / 2)` names.
//! 3. The first half breaks at `start + offset` for `duration` minutes;
//!    the second half starts its break exactly when the first half ends.
//! 4. Empty halves are not emitted. Groups stay in partition order.
//!
//! Only half of the staff is ever on break, so the role stays covered.
//!
//! # Invariant
//! Concatenating the group name lists in order reproduces the input.

use tracing::debug;

use super::time::{format_time_with, MinuteRollover};
use crate::models::{BreakGroup, BreakWindow, ScheduleResult};

/// Splits workers into break groups.
///
/// # Example
///
/// ```
/// use shift_roster::models::{parse_names, BreakWindow};
/// use shift_roster::scheduler::BreakPlanner;
///
/// let names = parse_names("A,B,C,D");
/// let result = BreakPlanner::new().assign(names.as_slice(), 7.0, Some(BreakWindow::new(2.0, 30.0)));
/// assert_eq!(result.groups()[0].break_start, "09:00");
/// assert_eq!(result.groups()[1].break_end, "10:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreakPlanner {
    rollover: MinuteRollover,
}

impl BreakPlanner {
    /// Creates a planner that carries rounded minutes into the hour.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minute rollover policy used when formatting boundaries.
    pub fn with_rollover(mut self, rollover: MinuteRollover) -> Self {
        self.rollover = rollover;
        self
    }

    /// The rollover policy in use.
    pub fn rollover(&self) -> MinuteRollover {
        self.rollover
    }

    /// Assigns breaks for a shift starting at `shift_start_hour`.
    ///
    /// Returns one group when `window` is `None` or `names` is empty,
    /// otherwise one or two groups.
    pub fn assign(
        &self,
        names: &[String],
        shift_start_hour: f64,
        window: Option<BreakWindow>,
    ) -> ScheduleResult {
        let window = match window {
            Some(w) if !names.is_empty() => w,
            _ => return ScheduleResult::new(vec![BreakGroup::without_break(names.to_vec())]),
        };

        let half = names.len().div_ceil(2);
        let (first, second) = names.split_at(half);

        let start1 = shift_start_hour + window.offset_hours;
        let end1 = start1 + window.duration_hours();
        let start2 = end1;
        let end2 = start2 + window.duration_hours();

        let mut groups = Vec::with_capacity(2);
        if !first.is_empty() {
            groups.push(BreakGroup::with_break(
                first.to_vec(),
                format_time_with(start1, self.rollover),
                format_time_with(end1, self.rollover),
            ));
        }
        if !second.is_empty() {
            groups.push(BreakGroup::with_break(
                second.to_vec(),
                format_time_with(start2, self.rollover),
                format_time_with(end2, self.rollover),
            ));
        }

        debug!(
            names = names.len(),
            first = first.len(),
            second = second.len(),
            "assigned staggered breaks"
        );
        ScheduleResult::new(groups)
    }
}

/// Assigns breaks with the default planner.
pub fn assign_breaks(
    names: &[String],
    shift_start_hour: f64,
    window: Option<BreakWindow>,
) -> ScheduleResult {
    BreakPlanner::new().assign(names, shift_start_hour, window)
}
