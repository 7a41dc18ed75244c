//! Break planning and entry assembly.
//!
//! Everything here is pure: no I/O and no shared state. Calls may run
//! concurrently without coordination.
//!
//! # Algorithm
//!
//! `BreakPlanner` splits a name list into two contiguous halves (the
//! first takes the odd name) and gives them back-to-back break slots.
//! `assemble_entry` runs the planner once per shift period of an entry.

mod assembler;
mod breaks;
mod time;

pub use assembler::{assemble_entry, EntryRequest};
pub use breaks::{assign_breaks, BreakPlanner};
pub use time::{format_time, format_time_with, ClockTime, MinuteRollover};
