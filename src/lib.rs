//! Staff shift rosters with staggered break rotations.
//!
//! Splits each shift's staff into two halves whose breaks run back to
//! back, and keeps a list of roster entries organised by a
//! location → zone → role taxonomy with zone captains.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `NameList`, `BreakWindow`, `ShiftPeriod`,
//!   `ScheduleEntry`, `Taxonomy`, `RoleCatalog`
//! - **`scheduler`**: Break planner, time formatting and entry assembly
//! - **`validation`**: Stale-selection checks and taxonomy draft checks
//! - **`state`**: Application state and its reducer
//! - **`exchange`**: JSON import/export of taxonomies and schedules
//! - **`export`**: Printable schedule tables
//! - **`config`**: JSON configuration
//!
//! # Example
//!
//! ```
//! use shift_roster::models::{parse_names, BreakWindow};
//! use shift_roster::scheduler::assign_breaks;
//!
//! let names = parse_names("A, B, C, D");
//! let result = assign_breaks(names.as_slice(), 7.0, BreakWindow::from_fields("2", "30"));
//!
//! assert_eq!(result.groups()[0].break_label(), "09:00 - 09:30");
//! assert_eq!(result.groups()[1].break_label(), "09:30 - 10:00");
//! ```

pub mod config;
pub mod exchange;
pub mod export;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod validation;
