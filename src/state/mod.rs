//! Application state and its reducer.
//!
//! All state lives in [`AppState`]; [`reduce`] is the only way to change
//! it. The break planner is called from inside the reducer as a pure
//! function and never holds state itself.
//!
//! # Entries
//! Entries are kept newest first. Each carries a stable [`EntryId`], so
//! the editing target survives deletions of other entries.
//!
//! # Confirmations
//! Destructive actions are requested first and only run on
//! [`Action::Confirm`]. While a request is pending, every other action
//! except [`Action::Decline`] is ignored.

mod editor;
mod form;

pub use editor::{CommitReport, EditorAction, TaxonomyEditor, ZoneField};
pub use form::{FormAction, ScheduleForm};

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::exchange::{self, ExchangeError};
use crate::models::{RoleCatalog, ScheduleEntry, Taxonomy};
use crate::scheduler::{assemble_entry, BreakPlanner};
use crate::validation::{check_references, combined_notice};

/// Stable identifier of a schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// A schedule entry with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub id: EntryId,
    pub entry: ScheduleEntry,
}

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A message for the user about the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    /// Remove every schedule entry.
    ClearEntries,
    /// Remove one schedule entry.
    DeleteEntry(EntryId),
    /// Remove every location, zone, role and captain.
    ClearTaxonomy,
    /// Remove one location and its zone captains.
    DeleteLocation(String),
    /// Restore the configured default catalog.
    RevertTaxonomy,
}

impl PendingConfirmation {
    /// Question shown to the user.
    pub fn prompt(&self) -> String {
        match self {
            Self::ClearEntries => "Are you sure you want to clear all schedules?".to_string(),
            Self::DeleteEntry(_) => "Are you sure you want to delete this schedule?".to_string(),
            Self::ClearTaxonomy => {
                "Are you sure you want to clear all data? This action cannot be undone.".to_string()
            }
            Self::DeleteLocation(name) => format!("Are you sure you want to delete {name}?"),
            Self::RevertTaxonomy => {
                "Are you sure you want to revert to the default roles?".to_string()
            }
        }
    }
}

/// Everything the user can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Edit the schedule form.
    Form(FormAction),
    /// Add a new entry, or update the one being edited.
    Submit,
    /// Load an entry into the form for editing.
    EditEntry(EntryId),
    /// Stop editing without saving.
    CancelEdit,
    /// Ask to run a destructive action.
    Request(PendingConfirmation),
    /// Run the pending destructive action.
    Confirm,
    /// Drop the pending destructive action.
    Decline,
    /// Replace the taxonomy with a JSON document.
    ImportTaxonomy(String),
    /// Replace the schedule list with a JSON document.
    ImportSchedule(String),
    /// Edit the taxonomy.
    Editor(EditorAction),
    /// Hide the current notice.
    DismissNotice,
}

/// Whole application state.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: RoleCatalog,
    default_catalog: RoleCatalog,
    planner: BreakPlanner,
    form: ScheduleForm,
    entries: Vec<StoredEntry>,
    editing: Option<EntryId>,
    pending: Option<PendingConfirmation>,
    notice: Option<Notice>,
    editor: TaxonomyEditor,
    next_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl AppState {
    /// Creates the initial state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let catalog = config.catalog();
        Self {
            form: ScheduleForm::for_catalog(&catalog),
            default_catalog: catalog.clone(),
            catalog,
            planner: config.planner(),
            entries: Vec::new(),
            editing: None,
            pending: None,
            notice: None,
            editor: TaxonomyEditor::default(),
            next_id: 1,
        }
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn form(&self) -> &ScheduleForm {
        &self.form
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[StoredEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.entry)
    }

    /// Entry currently loaded for editing.
    pub fn editing(&self) -> Option<EntryId> {
        self.editing
    }

    pub fn pending(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn editor(&self) -> &TaxonomyEditor {
        &self.editor
    }

    pub fn location_options(&self) -> Vec<&str> {
        self.catalog.locations()
    }

    pub fn zone_options(&self) -> &[String] {
        self.catalog.zones(&self.form.selection.location)
    }

    pub fn role_options(&self) -> &[String] {
        let s = &self.form.selection;
        self.catalog.roles(&s.location, &s.zone)
    }

    pub fn captain_options(&self) -> &[String] {
        self.catalog.captains(&self.form.selection.zone)
    }

    /// Entries in list order, without ids.
    pub fn schedule(&self) -> Vec<ScheduleEntry> {
        self.entries.iter().map(|e| e.entry.clone()).collect()
    }

    /// Serializes the schedule list.
    pub fn export_schedule(&self) -> Result<String, ExchangeError> {
        exchange::export_schedule(&self.schedule())
    }

    /// Serializes the taxonomy (empty for a flat catalog).
    pub fn export_taxonomy(&self) -> Result<String, ExchangeError> {
        exchange::export_taxonomy(&self.catalog.editable_taxonomy())
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn display_number(&self, index: usize) -> usize {
        self.entries.len() - index
    }

    fn apply(&mut self, action: Action) {
        if self.pending.is_some() && !matches!(action, Action::Confirm | Action::Decline) {
            warn!(?action, "ignored while a confirmation is pending");
            return;
        }
        self.notice = None;

        match action {
            Action::Form(form_action) => self.form.apply(form_action),
            Action::Submit => self.submit(),
            Action::EditEntry(id) => self.edit_entry(id),
            Action::CancelEdit => {
                self.editing = None;
                self.form.clear_inputs();
            }
            Action::Request(request) => {
                debug!(?request, "confirmation requested");
                self.pending = Some(request);
            }
            Action::Confirm => {
                if let Some(request) = self.pending.take() {
                    self.confirm(request);
                }
            }
            Action::Decline => {
                if let Some(request) = self.pending.take() {
                    debug!(?request, "confirmation declined");
                }
            }
            Action::ImportTaxonomy(json) => match exchange::import_taxonomy(&json) {
                Ok(taxonomy) => {
                    info!(locations = taxonomy.location_zone_role_map.len(), "taxonomy imported");
                    self.replace_catalog(RoleCatalog::Tiered(taxonomy));
                    self.notice = Some(Notice::info("Workflow imported"));
                }
                Err(e) => {
                    warn!(error = %e, "taxonomy import rejected");
                    self.notice = Some(Notice::error(format!("Import failed: {e}")));
                }
            },
            Action::ImportSchedule(json) => match exchange::import_schedule(&json) {
                Ok(entries) => {
                    info!(entries = entries.len(), "schedule imported");
                    let mut stored = Vec::with_capacity(entries.len());
                    for entry in entries {
                        stored.push(StoredEntry {
                            id: self.allocate_id(),
                            entry,
                        });
                    }
                    self.entries = stored;
                    self.editing = None;
                    self.form.clear_inputs();
                    self.notice = Some(Notice::info("Schedule imported"));
                }
                Err(e) => {
                    warn!(error = %e, "schedule import rejected");
                    self.notice = Some(Notice::error(format!("Import failed: {e}")));
                }
            },
            Action::Editor(editor_action) => self.apply_editor(editor_action),
            Action::DismissNotice => {}
        }
    }

    fn submit(&mut self) {
        if self.form.selection.role.is_empty() {
            self.notice = Some(Notice::error("Select a role before adding a schedule"));
            return;
        }

        let entry = assemble_entry(&self.planner, &self.form.to_request());
        match self.editing.take() {
            Some(id) => match self.position(id) {
                Some(index) => {
                    self.entries[index].entry = entry;
                    info!(%id, "schedule entry updated");
                    self.notice = Some(Notice::info(format!(
                        "Schedule #{} updated",
                        self.display_number(index)
                    )));
                }
                None => {
                    warn!(%id, "edited entry no longer exists; adding as new");
                    let id = self.allocate_id();
                    self.entries.insert(0, StoredEntry { id, entry });
                    self.notice = Some(Notice::warning(
                        "The schedule being edited was deleted; saved as a new schedule",
                    ));
                }
            },
            None => {
                let id = self.allocate_id();
                info!(%id, "schedule entry added");
                self.entries.insert(0, StoredEntry { id, entry });
            }
        }
        self.form.clear_inputs();
    }

    fn edit_entry(&mut self, id: EntryId) {
        let Some(entry) = self.entry(id) else {
            self.notice = Some(Notice::error("That schedule no longer exists"));
            return;
        };

        let mut form = ScheduleForm::from_entry(entry);
        if let Err(errors) = check_references(&form.selection, &self.catalog) {
            warn!(%id, missing = errors.len(), "entry references missing taxonomy items");
            self.notice = Some(Notice::warning(combined_notice(&errors)));
            form.selection = form.selection.without_missing(&errors);
        }
        self.form = form;
        self.editing = Some(id);
    }

    fn confirm(&mut self, request: PendingConfirmation) {
        info!(?request, "confirmed");
        match request {
            PendingConfirmation::ClearEntries => {
                self.entries.clear();
                self.editing = None;
                self.form.clear_inputs();
            }
            PendingConfirmation::DeleteEntry(id) => match self.position(id) {
                Some(index) => {
                    self.entries.remove(index);
                    if self.editing == Some(id) {
                        self.editing = None;
                        self.form.clear_inputs();
                    }
                }
                None => {
                    self.notice = Some(Notice::warning("That schedule was already removed"));
                }
            },
            PendingConfirmation::ClearTaxonomy => {
                self.replace_catalog(RoleCatalog::Tiered(Taxonomy::new()));
            }
            PendingConfirmation::DeleteLocation(name) => {
                let removed = match &mut self.catalog {
                    RoleCatalog::Tiered(t) => t.remove_location(&name).is_some(),
                    RoleCatalog::Flat(_) => false,
                };
                if removed {
                    if self.editor.editing.as_deref() == Some(name.as_str()) {
                        self.editor.reset();
                    }
                    self.form.reconcile(&self.catalog);
                } else {
                    self.notice = Some(Notice::warning(format!("Location '{name}' not found")));
                }
            }
            PendingConfirmation::RevertTaxonomy => {
                self.replace_catalog(self.default_catalog.clone());
            }
        }
    }

    fn apply_editor(&mut self, action: EditorAction) {
        match action {
            EditorAction::SetLocationName(name) => self.editor.location_name = name,
            EditorAction::BeginLocation => {
                if let Err(errors) = self.editor.begin() {
                    self.notice = Some(Notice::error(messages(&errors)));
                }
            }
            EditorAction::AddZone => self.editor.add_zone(),
            EditorAction::UpdateZone {
                index,
                field,
                value,
            } => {
                self.editor.update_zone(index, field, value);
            }
            EditorAction::RemoveZone(index) => {
                self.editor.remove_zone(index);
            }
            EditorAction::EditLocation(name) => {
                let loaded = match &self.catalog {
                    RoleCatalog::Tiered(t) => self.editor.load(t, &name),
                    RoleCatalog::Flat(_) => false,
                };
                if !loaded {
                    self.notice = Some(Notice::error(format!("Location '{name}' not found")));
                }
            }
            EditorAction::CommitLocation => {
                let mut taxonomy = self.catalog.editable_taxonomy();
                match self.editor.commit(&mut taxonomy) {
                    Ok(report) => {
                        info!(location = %report.location, zones = report.zones_saved, "location saved");
                        self.notice = Some(if report.skipped.is_empty() {
                            Notice::info(format!("Location '{}' saved", report.location))
                        } else {
                            Notice::warning(format!(
                                "Location '{}' saved; skipped:\n{}",
                                report.location,
                                messages(&report.skipped)
                            ))
                        });
                        self.catalog = RoleCatalog::Tiered(taxonomy);
                        self.form.reconcile(&self.catalog);
                    }
                    Err(errors) => {
                        self.notice = Some(Notice::error(messages(&errors)));
                    }
                }
            }
            EditorAction::CancelLocation => self.editor.reset(),
        }
    }

    fn replace_catalog(&mut self, catalog: RoleCatalog) {
        self.catalog = catalog;
        self.editor.reset();
        self.form.reconcile(&self.catalog);
    }
}

fn messages(errors: &[crate::validation::ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Applies one action and returns the next state.
///
/// # Example
///
/// ```
/// use shift_roster::state::{reduce, Action, AppState, FormAction};
///
/// let state = AppState::default();
/// let state = reduce(state, Action::Form(FormAction::SetMorningNames("A, B".into())));
/// let state = reduce(state, Action::Submit);
/// assert_eq!(state.entries().len(), 1);
/// assert_eq!(state.entries()[0].entry.role, "Registers");
/// ```
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    state.apply(action);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryInputs, EntryShifts, LocationZones};

    fn run(state: AppState, actions: Vec<Action>) -> AppState {
        actions.into_iter().fold(state, reduce)
    }

    fn form(action: FormAction) -> Action {
        Action::Form(action)
    }

    fn sample_taxonomy() -> Taxonomy {
        Taxonomy::new()
            .with_location(
                "Expo",
                LocationZones::new()
                    .with_zone("Hall A", vec!["Registers".into(), "Plenary".into()])
                    .with_zone("Hall B", vec!["Visa".into()]),
            )
            .with_captains("Hall A", vec!["Dana".into()])
            .with_captains("Hall B", vec!["Eli".into()])
    }

    fn tiered_state() -> AppState {
        let config = AppConfig {
            default_taxonomy: Some(sample_taxonomy()),
            ..AppConfig::default()
        };
        AppState::new(&config)
    }

    fn add_entry(state: AppState, role: &str, morning: &str) -> AppState {
        run(
            state,
            vec![
                form(FormAction::SelectRole(role.into())),
                form(FormAction::SetMorningNames(morning.into())),
                Action::Submit,
            ],
        )
    }

    #[test]
    fn test_submit_prepends_and_clears_inputs() {
        let state = run(
            AppState::default(),
            vec![
                form(FormAction::SetMorningNames("A,B,C,D".into())),
                form(FormAction::SetBreakTime("2".into())),
                form(FormAction::SetBreakDuration("30".into())),
                Action::Submit,
            ],
        );
        let state = add_entry(state, "Visa", "E");

        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.entries()[0].entry.role, "Visa");
        assert_eq!(state.entries()[1].entry.role, "Registers");
        let EntryShifts::Split { morning, .. } = &state.entries()[1].entry.shifts else {
            panic!("expected split shifts");
        };
        assert_eq!(morning.groups()[0].break_label(), "09:00 - 09:30");
        assert_eq!(morning.groups()[1].break_label(), "09:30 - 10:00");

        assert_eq!(state.form().inputs, EntryInputs::default());
        assert_eq!(state.form().selection.role, "Visa");
    }

    #[test]
    fn test_submit_requires_role() {
        let state = run(
            tiered_state(),
            vec![form(FormAction::SetMorningNames("A".into())), Action::Submit],
        );
        assert!(state.entries().is_empty());
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
        assert_eq!(state.form().inputs.morning_names, "A");
    }

    #[test]
    fn test_full_day_entry() {
        let state = run(
            AppState::default(),
            vec![
                form(FormAction::SetFullDay(true)),
                form(FormAction::SetFullDayNames("X\nY".into())),
                Action::Submit,
            ],
        );
        assert!(state.entries()[0].entry.is_full_day());
    }

    #[test]
    fn test_edit_and_update_in_place() {
        let state = add_entry(AppState::default(), "Visa", "A, B");
        let state = add_entry(state, "Plenary", "C");
        let target = state.entries()[1].id;

        let state = reduce(state, Action::EditEntry(target));
        assert_eq!(state.editing(), Some(target));
        assert_eq!(state.form().inputs.morning_names, "A, B");
        assert_eq!(state.form().selection.role, "Visa");
        assert!(state.notice().is_none());

        let state = run(
            state,
            vec![
                form(FormAction::SetMorningNames("A, B, Z".into())),
                Action::Submit,
            ],
        );
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.entries()[1].id, target);
        assert_eq!(state.entries()[1].entry.headcount(), 3);
        assert_eq!(state.editing(), None);
        assert_eq!(state.notice().unwrap().message, "Schedule #1 updated");
    }

    #[test]
    fn test_edit_survives_other_deletions() {
        let state = add_entry(AppState::default(), "Visa", "A");
        let state = add_entry(state, "Plenary", "B");
        let state = add_entry(state, "Registers", "C");
        let target = state.entries()[2].id;
        let other = state.entries()[0].id;

        let state = run(
            state,
            vec![
                Action::EditEntry(target),
                Action::Request(PendingConfirmation::DeleteEntry(other)),
                Action::Confirm,
                form(FormAction::SetMorningNames("A, Q".into())),
                Action::Submit,
            ],
        );
        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.entry(target).unwrap().headcount(), 2);
    }

    #[test]
    fn test_deleting_edited_entry_clears_target() {
        let state = add_entry(AppState::default(), "Visa", "A");
        let id = state.entries()[0].id;
        let state = run(
            state,
            vec![
                Action::EditEntry(id),
                Action::Request(PendingConfirmation::DeleteEntry(id)),
                Action::Confirm,
            ],
        );
        assert!(state.entries().is_empty());
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn test_decline_leaves_state() {
        let state = add_entry(AppState::default(), "Visa", "A");
        let state = run(
            state,
            vec![
                Action::Request(PendingConfirmation::ClearEntries),
                Action::Decline,
            ],
        );
        assert_eq!(state.entries().len(), 1);
        assert!(state.pending().is_none());
    }

    #[test]
    fn test_pending_blocks_other_actions() {
        let state = run(
            AppState::default(),
            vec![
                Action::Request(PendingConfirmation::ClearEntries),
                form(FormAction::SetMorningNames("A".into())),
                Action::Submit,
            ],
        );
        assert!(state.entries().is_empty());
        assert_eq!(state.form().inputs.morning_names, "");
        assert_eq!(
            state.pending().unwrap().prompt(),
            "Are you sure you want to clear all schedules?"
        );
    }

    #[test]
    fn test_clear_entries_confirmed() {
        let state = add_entry(AppState::default(), "Visa", "A");
        let state = add_entry(state, "Visa", "B");
        let state = run(
            state,
            vec![
                Action::Request(PendingConfirmation::ClearEntries),
                Action::Confirm,
            ],
        );
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_edit_falls_back_on_missing_references() {
        let state = run(
            tiered_state(),
            vec![
                form(FormAction::SelectLocation("Expo".into())),
                form(FormAction::SelectZone("Hall A".into())),
                form(FormAction::SelectRole("Plenary".into())),
                form(FormAction::SelectCaptain("Dana".into())),
                form(FormAction::SetMorningNames("A".into())),
                Action::Submit,
            ],
        );
        let id = state.entries()[0].id;

        // new workflow: Hall A keeps its roles but has a different captain
        let new_taxonomy = Taxonomy::new()
            .with_location(
                "Expo",
                LocationZones::new().with_zone("Hall A", vec!["Registers".into()]),
            )
            .with_captains("Hall A", vec!["Gus".into()]);
        let json = exchange::export_taxonomy(&new_taxonomy).unwrap();

        let state = run(
            state,
            vec![Action::ImportTaxonomy(json), Action::EditEntry(id)],
        );
        let selection = &state.form().selection;
        assert_eq!(selection.location, "Expo");
        assert_eq!(selection.zone, "Hall A");
        assert_eq!(selection.role, "");
        assert_eq!(selection.captain, "");
        assert_eq!(state.form().inputs.morning_names, "A");

        let notice = state.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("Plenary"));
        assert!(notice.message.contains("Dana"));
        assert_eq!(state.editing(), Some(id));
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let state = tiered_state();
        let before_catalog = state.catalog().clone();

        let state = reduce(state, Action::ImportTaxonomy("{broken".into()));
        assert_eq!(state.catalog(), &before_catalog);
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);

        let state = add_entry(AppState::default(), "Visa", "A");
        let state = reduce(state, Action::ImportSchedule("{\"not\": \"a list\"}".into()));
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn test_taxonomy_import_without_expected_keys_keeps_catalog() {
        let state = tiered_state();
        let state = reduce(state, Action::ImportTaxonomy(r#"{"schedules": []}"#.into()));
        assert_eq!(state.location_options(), ["Expo"]);
        assert_eq!(state.catalog(), &RoleCatalog::Tiered(sample_taxonomy()));
        let notice = state.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("locationZoneRoleMap"));
    }

    #[test]
    fn test_clearing_entries_while_editing_clears_inputs() {
        let state = add_entry(AppState::default(), "Visa", "A, B");
        let id = state.entries()[0].id;
        let state = run(
            state,
            vec![
                Action::EditEntry(id),
                Action::Request(PendingConfirmation::ClearEntries),
                Action::Confirm,
            ],
        );
        assert_eq!(state.editing(), None);
        assert_eq!(state.form().inputs, EntryInputs::default());
        assert_eq!(state.form().selection.role, "Visa");
    }

    #[test]
    fn test_schedule_import_while_editing_clears_inputs() {
        let state = add_entry(AppState::default(), "Visa", "A, B");
        let json = state.export_schedule().unwrap();
        let id = state.entries()[0].id;
        let state = run(
            state,
            vec![Action::EditEntry(id), Action::ImportSchedule(json)],
        );
        assert_eq!(state.editing(), None);
        assert_eq!(state.form().inputs, EntryInputs::default());
        assert_eq!(state.entries().len(), 1);
        assert_ne!(state.entries()[0].id, id);
    }

    #[test]
    fn test_schedule_export_import_round_trip() {
        let state = add_entry(AppState::default(), "Visa", "A, B");
        let state = add_entry(state, "Plenary", "C");
        let json = state.export_schedule().unwrap();

        let restored = reduce(AppState::default(), Action::ImportSchedule(json));
        assert_eq!(restored.schedule(), state.schedule());
        assert_eq!(restored.entries()[0].entry.role, "Plenary");
    }

    #[test]
    fn test_taxonomy_editor_flow() {
        let state = run(
            AppState::default(),
            vec![
                Action::Editor(EditorAction::SetLocationName("Expo".into())),
                Action::Editor(EditorAction::BeginLocation),
                Action::Editor(EditorAction::AddZone),
                Action::Editor(EditorAction::UpdateZone {
                    index: 0,
                    field: ZoneField::Name,
                    value: "Hall A".into(),
                }),
                Action::Editor(EditorAction::UpdateZone {
                    index: 0,
                    field: ZoneField::Captains,
                    value: "Dana, Eli".into(),
                }),
                Action::Editor(EditorAction::UpdateZone {
                    index: 0,
                    field: ZoneField::Roles,
                    value: "Registers".into(),
                }),
                Action::Editor(EditorAction::CommitLocation),
            ],
        );
        assert!(state.catalog().is_tiered());
        assert_eq!(state.location_options(), ["Expo"]);
        assert_eq!(state.notice().unwrap().message, "Location 'Expo' saved");
        // the flat default role no longer exists
        assert_eq!(state.form().selection.role, "");

        let state = run(
            state,
            vec![
                form(FormAction::SelectLocation("Expo".into())),
                form(FormAction::SelectZone("Hall A".into())),
            ],
        );
        assert_eq!(state.role_options(), ["Registers".to_string()]);
        assert_eq!(
            state.captain_options(),
            ["Dana".to_string(), "Eli".to_string()]
        );
    }

    #[test]
    fn test_failed_commit_keeps_catalog() {
        let state = run(
            AppState::default(),
            vec![
                Action::Editor(EditorAction::SetLocationName("Expo".into())),
                Action::Editor(EditorAction::BeginLocation),
                Action::Editor(EditorAction::AddZone),
                Action::Editor(EditorAction::CommitLocation),
            ],
        );
        assert!(!state.catalog().is_tiered());
        assert_eq!(state.notice().unwrap().level, NoticeLevel::Error);
        assert!(state.editor().open);
    }

    #[test]
    fn test_delete_location_confirmed() {
        let state = run(
            tiered_state(),
            vec![
                form(FormAction::SelectLocation("Expo".into())),
                Action::Editor(EditorAction::EditLocation("Expo".into())),
                Action::Request(PendingConfirmation::DeleteLocation("Expo".into())),
                Action::Confirm,
            ],
        );
        assert!(state.location_options().is_empty());
        assert!(state.captain_options().is_empty());
        assert_eq!(state.form().selection.location, "");
        assert!(!state.editor().open);
    }

    #[test]
    fn test_clear_and_revert_taxonomy() {
        let state = run(
            tiered_state(),
            vec![
                Action::Request(PendingConfirmation::ClearTaxonomy),
                Action::Confirm,
            ],
        );
        assert!(state.location_options().is_empty());
        assert_eq!(
            state.export_taxonomy().unwrap(),
            exchange::export_taxonomy(&Taxonomy::new()).unwrap()
        );

        let state = run(
            state,
            vec![
                Action::Request(PendingConfirmation::RevertTaxonomy),
                Action::Confirm,
            ],
        );
        assert_eq!(state.catalog(), &RoleCatalog::Tiered(sample_taxonomy()));
    }

    #[test]
    fn test_flat_catalog_options() {
        let state = AppState::default();
        assert_eq!(state.role_options().len(), 5);
        assert!(state.zone_options().is_empty());
        assert_eq!(state.form().selection.role, "Registers");
    }
}
