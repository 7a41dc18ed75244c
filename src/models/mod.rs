//! Roster domain models.
//!
//! Provides the data types shared by the break planner, the application
//! state and the JSON exchange layer.
//!
//! # Domain Mappings
//!
//! | shift-roster | Event staffing | Retail | Clinic |
//! |--------------|----------------|--------|--------|
//! | NameList | Volunteers | Cashiers | Nurses |
//! | ShiftPeriod | Morning/Afternoon | Opening/Closing | AM/PM round |
//! | BreakGroup | Break rotation | Lunch cover | Relief slot |
//! | Taxonomy | Venue → Zone → Role | Store → Floor → Till | Ward → Bay → Duty |

mod break_window;
mod catalog;
mod names;
mod period;
mod schedule;
mod taxonomy;

pub use break_window::BreakWindow;
pub use catalog::{RoleCatalog, DEFAULT_ROLES};
pub use names::{parse_names, NameList};
pub use period::ShiftPeriod;
pub use schedule::{BreakGroup, EntryInputs, EntryShifts, ScheduleEntry, ScheduleResult};
pub use taxonomy::{LocationZones, Taxonomy};
