//! Taxonomy editor: drafts a location with its zones, then commits it.
//!
//! A commit keeps only complete zone drafts (name, captains and roles).
//! Replacing a location first removes it, including the captain lists of
//! its old zones, so renamed or dropped zones leave nothing behind.

use tracing::{debug, warn};

use crate::models::{parse_names, LocationZones, Taxonomy};
use crate::validation::{
    validate_location_name, validate_zone_drafts, ValidationError, ValidationErrorKind, ZoneDraft,
};

/// A field of a zone draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneField {
    Name,
    Captains,
    Roles,
}

/// Edits to the taxonomy editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// Type the location name.
    SetLocationName(String),
    /// Open the zone panel for a new location.
    BeginLocation,
    /// Append an empty zone draft.
    AddZone,
    /// Change one field of a zone draft.
    UpdateZone {
        index: usize,
        field: ZoneField,
        value: String,
    },
    /// Drop a zone draft.
    RemoveZone(usize),
    /// Load an existing location into the editor.
    EditLocation(String),
    /// Save the drafted location into the taxonomy.
    CommitLocation,
    /// Abandon the draft.
    CancelLocation,
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitReport {
    /// Name the location was saved under.
    pub location: String,
    /// Zones saved.
    pub zones_saved: usize,
    /// Incomplete drafts that were skipped.
    pub skipped: Vec<ValidationError>,
}

/// Taxonomy editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyEditor {
    /// Location name being drafted.
    pub location_name: String,
    /// Zone drafts.
    pub zones: Vec<ZoneDraft>,
    /// Whether the zone panel is open.
    pub open: bool,
    /// Existing location being edited, if any.
    pub editing: Option<String>,
}

impl TaxonomyEditor {
    /// Opens the zone panel for the typed name.
    pub fn begin(&mut self) -> Result<(), Vec<ValidationError>> {
        validate_location_name(&self.location_name)?;
        self.open = true;
        Ok(())
    }

    /// Appends an empty zone draft.
    pub fn add_zone(&mut self) {
        self.zones.push(ZoneDraft::default());
    }

    /// Updates a zone draft field. Returns `false` for an unknown index.
    pub fn update_zone(&mut self, index: usize, field: ZoneField, value: String) -> bool {
        let Some(zone) = self.zones.get_mut(index) else {
            warn!(index, "zone draft index out of range");
            return false;
        };
        match field {
            ZoneField::Name => zone.zone_name = value,
            ZoneField::Captains => zone.captains = value,
            ZoneField::Roles => zone.roles = value,
        }
        true
    }

    /// Removes a zone draft. Returns `false` for an unknown index.
    pub fn remove_zone(&mut self, index: usize) -> bool {
        if index < self.zones.len() {
            self.zones.remove(index);
            true
        } else {
            false
        }
    }

    /// Loads a location for editing. Returns `false` if it does not exist.
    pub fn load(&mut self, taxonomy: &Taxonomy, location: &str) -> bool {
        let Some(data) = taxonomy.location_zone_role_map.get(location) else {
            return false;
        };
        self.zones = data
            .zones
            .iter()
            .map(|zone| {
                ZoneDraft::new(
                    zone.clone(),
                    taxonomy.captains(zone).join(", "),
                    data.roles.get(zone).map(|r| r.join(", ")).unwrap_or_default(),
                )
            })
            .collect();
        self.location_name = location.to_string();
        self.open = true;
        self.editing = Some(location.to_string());
        true
    }

    /// Writes the draft into `taxonomy` and resets the editor.
    ///
    /// Rejects a blank name, an empty zone list, duplicate zone names or a
    /// draft with no complete zone; the taxonomy is untouched on error.
    pub fn commit(&mut self, taxonomy: &mut Taxonomy) -> Result<CommitReport, Vec<ValidationError>> {
        validate_location_name(&self.location_name)?;

        let skipped = match validate_zone_drafts(&self.zones) {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let (incomplete, fatal): (Vec<_>, Vec<_>) = errors
                    .into_iter()
                    .partition(|e| e.kind == ValidationErrorKind::IncompleteZone);
                if !fatal.is_empty() {
                    return Err(fatal);
                }
                incomplete
            }
        };

        let complete: Vec<&ZoneDraft> = self.zones.iter().filter(|z| z.is_complete()).collect();
        if complete.is_empty() {
            let mut errors = skipped;
            errors.push(ValidationError {
                kind: ValidationErrorKind::IncompleteZone,
                message: "Add at least one zone with a name, captains and roles".to_string(),
            });
            return Err(errors);
        }

        let name = self.location_name.trim().to_string();
        if let Some(old) = &self.editing {
            taxonomy.remove_location(old);
        }
        taxonomy.remove_location(&name);

        let mut location = LocationZones::new();
        for draft in &complete {
            let zone = draft.zone_name.trim().to_string();
            taxonomy
                .zone_captain_map
                .insert(zone.clone(), parse_names(&draft.captains).into_inner());
            location = location.with_zone(zone, parse_names(&draft.roles).into_inner());
        }
        taxonomy.upsert_location(name.clone(), location);

        let report = CommitReport {
            location: name,
            zones_saved: complete.len(),
            skipped,
        };
        debug!(
            location = %report.location,
            zones = report.zones_saved,
            skipped = report.skipped.len(),
            "committed location"
        );
        self.reset();
        Ok(report)
    }

    /// Clears the draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
