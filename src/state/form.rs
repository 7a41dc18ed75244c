//! Schedule form state.

use crate::models::{EntryInputs, RoleCatalog, ScheduleEntry};
use crate::scheduler::EntryRequest;
use crate::validation::{check_references, Selection};

/// Edits to the schedule form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Choose a location; zone, role and captain are reset.
    SelectLocation(String),
    /// Choose a zone; role and captain are reset.
    SelectZone(String),
    SelectRole(String),
    SelectCaptain(String),
    /// Switch between a full-day shift and morning + afternoon.
    SetFullDay(bool),
    SetMorningNames(String),
    SetAfternoonNames(String),
    SetFullDayNames(String),
    /// Break offset, hours after shift start.
    SetBreakTime(String),
    /// Break length, minutes.
    SetBreakDuration(String),
}

/// Current selections and text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    /// Location, zone, role and captain.
    pub selection: Selection,
    /// Full-day mode.
    pub full_day: bool,
    /// Raw text fields.
    pub inputs: EntryInputs,
}

impl ScheduleForm {
    /// An empty form with the catalog's default role preselected.
    pub fn for_catalog(catalog: &RoleCatalog) -> Self {
        let mut form = Self::default();
        form.reconcile(catalog);
        form
    }

    /// Repopulates the form verbatim from an entry.
    pub fn from_entry(entry: &ScheduleEntry) -> Self {
        Self {
            selection: Selection::from(entry),
            full_day: entry.is_full_day(),
            inputs: entry.inputs.clone(),
        }
    }

    /// Applies one edit.
    pub fn apply(&mut self, action: FormAction) {
        let s = &mut self.selection;
        match action {
            FormAction::SelectLocation(location) => {
                s.location = location;
                s.zone.clear();
                s.role.clear();
                s.captain.clear();
            }
            FormAction::SelectZone(zone) => {
                s.zone = zone;
                s.role.clear();
                s.captain.clear();
            }
            FormAction::SelectRole(role) => s.role = role,
            FormAction::SelectCaptain(captain) => s.captain = captain,
            FormAction::SetFullDay(full_day) => self.full_day = full_day,
            FormAction::SetMorningNames(text) => self.inputs.morning_names = text,
            FormAction::SetAfternoonNames(text) => self.inputs.afternoon_names = text,
            FormAction::SetFullDayNames(text) => self.inputs.full_day_names = text,
            FormAction::SetBreakTime(text) => self.inputs.break_time = text,
            FormAction::SetBreakDuration(text) => self.inputs.break_duration = text,
        }
    }

    /// Clears names and break fields; selections stay.
    pub fn clear_inputs(&mut self) {
        self.inputs = EntryInputs::default();
    }

    /// Drops selections the catalog no longer offers. A flat catalog
    /// falls back to its first role.
    pub fn reconcile(&mut self, catalog: &RoleCatalog) {
        if let Err(errors) = check_references(&self.selection, catalog) {
            self.selection = std::mem::take(&mut self.selection).without_missing(&errors);
        }
        if let RoleCatalog::Flat(roles) = catalog {
            if self.selection.role.is_empty() {
                if let Some(first) = roles.first() {
                    self.selection.role = first.clone();
                }
            }
        }
    }

    /// Builds the planner request for the current form.
    pub fn to_request(&self) -> EntryRequest {
        EntryRequest {
            role: self.selection.role.clone(),
            zone: self.selection.zone.clone(),
            location: self.selection.location.clone(),
            captain: self.selection.captain.clone(),
            full_day: self.full_day,
            inputs: self.inputs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationZones, Taxonomy};

    #[test]
    fn test_cascading_resets() {
        let mut form = ScheduleForm::default();
        form.apply(FormAction::SelectLocation("Expo".into()));
        form.apply(FormAction::SelectZone("Hall A".into()));
        form.apply(FormAction::SelectRole("Visa".into()));
        form.apply(FormAction::SelectCaptain("Dana".into()));

        form.apply(FormAction::SelectZone("Hall B".into()));
        assert_eq!(form.selection.location, "Expo");
        assert_eq!(form.selection.zone, "Hall B");
        assert!(form.selection.role.is_empty());
        assert!(form.selection.captain.is_empty());

        form.apply(FormAction::SelectRole("Visa".into()));
        form.apply(FormAction::SelectLocation("Hotel".into()));
        assert!(form.selection.zone.is_empty());
        assert!(form.selection.role.is_empty());
    }

    #[test]
    fn test_text_fields_and_clear() {
        let mut form = ScheduleForm::default();
        form.apply(FormAction::SetMorningNames("A, B".into()));
        form.apply(FormAction::SetBreakTime("2".into()));
        form.apply(FormAction::SetBreakDuration("30".into()));
        form.apply(FormAction::SelectRole("Visa".into()));
        assert_eq!(form.to_request().inputs.break_duration, "30");

        form.clear_inputs();
        assert_eq!(form.inputs, EntryInputs::default());
        assert_eq!(form.selection.role, "Visa");
    }

    #[test]
    fn test_flat_catalog_preselects_first_role() {
        let form = ScheduleForm::for_catalog(&RoleCatalog::default());
        assert_eq!(form.selection.role, "Registers");
    }

    #[test]
    fn test_reconcile_drops_stale_selection() {
        let catalog = RoleCatalog::Tiered(Taxonomy::new().with_location(
            "Expo",
            LocationZones::new().with_zone("Hall A", vec!["Visa".into()]),
        ));
        let mut form = ScheduleForm::default();
        form.selection = Selection {
            location: "Expo".into(),
            zone: "Hall A".into(),
            role: "Registers".into(),
            captain: String::new(),
        };
        form.reconcile(&catalog);
        assert_eq!(form.selection.zone, "Hall A");
        assert!(form.selection.role.is_empty());
    }
}
