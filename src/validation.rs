//! Input validation for schedule selections and taxonomy edits.
//!
//! Detects:
//! - Selections (location, zone, role, captain) that no longer exist in
//!   the current catalog, e.g. after a taxonomy import
//! - Zone drafts missing a name, captains or roles
//! - Duplicate zone names within one location
//!
//! Every problem is reported; checks never stop at the first failure.

use std::collections::HashSet;

use crate::models::{parse_names, RoleCatalog, ScheduleEntry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Selected location is not in the catalog.
    MissingLocation,
    /// Selected zone is not in the selected location.
    MissingZone,
    /// Selected role is not offered for the selected zone.
    MissingRole,
    /// Selected captain is not listed for the selected zone.
    MissingCaptain,
    /// A zone draft lacks a name, captains or roles.
    IncompleteZone,
    /// Two zone drafts share a name.
    DuplicateZone,
    /// A location was committed without a name.
    EmptyLocationName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The four catalog references held by a schedule entry or form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Location name.
    pub location: String,
    /// Zone name.
    pub zone: String,
    /// Role name.
    pub role: String,
    /// Captain name.
    pub captain: String,
}

impl From<&ScheduleEntry> for Selection {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            location: entry.location.clone(),
            zone: entry.zone.clone(),
            role: entry.role.clone(),
            captain: entry.captain.clone(),
        }
    }
}

impl Selection {
    /// Clears every field named by a reference error.
    pub fn without_missing(mut self, errors: &[ValidationError]) -> Self {
        for e in errors {
            match e.kind {
                ValidationErrorKind::MissingLocation => self.location.clear(),
                ValidationErrorKind::MissingZone => self.zone.clear(),
                ValidationErrorKind::MissingRole => self.role.clear(),
                ValidationErrorKind::MissingCaptain => self.captain.clear(),
                _ => {}
            }
        }
        self
    }
}

/// Checks that each non-empty selection exists in the catalog.
///
/// The four fields are checked independently, so one stale location can
/// produce up to four errors. Empty fields are never errors.
pub fn check_references(selection: &Selection, catalog: &RoleCatalog) -> ValidationResult {
    let mut errors = Vec::new();
    let Selection {
        location,
        zone,
        role,
        captain,
    } = selection;

    if !location.is_empty() && !catalog.locations().contains(&location.as_str()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingLocation,
            format!("Location '{location}' no longer exists"),
        ));
    }

    if !zone.is_empty() && !catalog.zones(location).contains(zone) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingZone,
            format!("Zone '{zone}' no longer exists in '{location}'"),
        ));
    }

    if !role.is_empty() && !catalog.roles(location, zone).contains(role) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingRole,
            format!("Role '{role}' is no longer offered"),
        ));
    }

    if !captain.is_empty() && !catalog.captains(zone).contains(captain) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingCaptain,
            format!("Captain '{captain}' is no longer listed for zone '{zone}'"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Joins errors into one notice, one problem per line.
pub fn combined_notice(errors: &[ValidationError]) -> String {
    let mut notice = String::from("Some selections were reset:");
    for e in errors {
        notice.push_str("\n- ");
        notice.push_str(&e.message);
    }
    notice
}

/// A zone being entered in the taxonomy editor.
///
/// Captains and roles are free text, parsed like name lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneDraft {
    /// Zone name.
    pub zone_name: String,
    /// Captains, comma or line separated.
    pub captains: String,
    /// Roles, comma or line separated.
    pub roles: String,
}

impl ZoneDraft {
    /// Creates a draft from raw text.
    pub fn new(
        zone_name: impl Into<String>,
        captains: impl Into<String>,
        roles: impl Into<String>,
    ) -> Self {
        Self {
            zone_name: zone_name.into(),
            captains: captains.into(),
            roles: roles.into(),
        }
    }

    /// Whether name, captains and roles are all present.
    pub fn is_complete(&self) -> bool {
        !self.zone_name.trim().is_empty()
            && !parse_names(&self.captains).is_empty()
            && !parse_names(&self.roles).is_empty()
    }
}

/// Checks zone drafts before they are committed to a location.
///
/// Incomplete drafts are reported with their 1-based position; duplicate
/// zone names among complete drafts are reported once per name.
pub fn validate_zone_drafts(drafts: &[ZoneDraft]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (i, draft) in drafts.iter().enumerate() {
        if !draft.is_complete() {
            errors.push(ValidationError::new(
                ValidationErrorKind::IncompleteZone,
                format!("Zone {} needs a name, captains and roles", i + 1),
            ));
            continue;
        }
        let name = draft.zone_name.trim();
        if !seen.insert(name) && reported.insert(name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateZone,
                format!("Zone '{name}' is listed more than once"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a location name before commit.
pub fn validate_location_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyLocationName,
            "Location name is required",
        )])
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationZones, Taxonomy};

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_catalog() -> RoleCatalog {
        RoleCatalog::Tiered(
            Taxonomy::new()
                .with_location(
                    "Expo",
                    LocationZones::new()
                        .with_zone("Hall A", list(&["Registers", "Plenary"]))
                        .with_zone("Hall B", list(&["Visa"])),
                )
                .with_captains("Hall A", list(&["Dana"]))
                .with_captains("Hall B", list(&["Eli"])),
        )
    }

    fn selection(location: &str, zone: &str, role: &str, captain: &str) -> Selection {
        Selection {
            location: location.into(),
            zone: zone.into(),
            role: role.into(),
            captain: captain.into(),
        }
    }

    #[test]
    fn test_valid_selection() {
        let c = sample_catalog();
        assert!(check_references(&selection("Expo", "Hall A", "Plenary", "Dana"), &c).is_ok());
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let c = sample_catalog();
        assert!(check_references(&Selection::default(), &c).is_ok());
    }

    #[test]
    fn test_missing_captain_only() {
        let c = sample_catalog();
        let errors =
            check_references(&selection("Expo", "Hall A", "Registers", "Zed"), &c).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingCaptain);
    }

    #[test]
    fn test_role_checked_against_zone() {
        let c = sample_catalog();
        let errors =
            check_references(&selection("Expo", "Hall B", "Registers", "Eli"), &c).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingRole);
    }

    #[test]
    fn test_stale_location_reports_everything() {
        let c = sample_catalog();
        let errors =
            check_references(&selection("Old Venue", "Annex", "Usher", "Kim"), &c).unwrap_err();
        let kinds: Vec<ValidationErrorKind> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                ValidationErrorKind::MissingLocation,
                ValidationErrorKind::MissingZone,
                ValidationErrorKind::MissingRole,
                ValidationErrorKind::MissingCaptain,
            ]
        );
    }

    #[test]
    fn test_flat_catalog_checks_role() {
        let c = RoleCatalog::default();
        assert!(check_references(&selection("", "", "Visa", ""), &c).is_ok());
        let errors = check_references(&selection("", "", "Security", ""), &c).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingRole);
    }

    #[test]
    fn test_without_missing_clears_fields() {
        let c = sample_catalog();
        let s = selection("Expo", "Hall A", "Usher", "Zed");
        let errors = check_references(&s, &c).unwrap_err();
        let cleaned = s.without_missing(&errors);
        assert_eq!(cleaned, selection("Expo", "Hall A", "", ""));
    }

    #[test]
    fn test_combined_notice_lists_all() {
        let c = sample_catalog();
        let errors =
            check_references(&selection("Expo", "Hall A", "Usher", "Zed"), &c).unwrap_err();
        let notice = combined_notice(&errors);
        assert!(notice.contains("Usher"));
        assert!(notice.contains("Zed"));
        assert_eq!(notice.lines().count(), 3);
    }

    #[test]
    fn test_zone_drafts() {
        let ok = [
            ZoneDraft::new("Hall A", "Dana", "Registers"),
            ZoneDraft::new("Hall B", "Eli, Fay", "Visa\nPlenary"),
        ];
        assert!(validate_zone_drafts(&ok).is_ok());

        let bad = [
            ZoneDraft::new("Hall A", "Dana", "Registers"),
            ZoneDraft::new("", "Eli", "Visa"),
            ZoneDraft::new("Hall C", " , ", "Visa"),
            ZoneDraft::new("Hall A", "Gus", "Support"),
            ZoneDraft::new("Hall A", "Hal", "Support"),
        ];
        let errors = validate_zone_drafts(&bad).unwrap_err();
        let incomplete = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::IncompleteZone)
            .count();
        let duplicate = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateZone)
            .count();
        assert_eq!(incomplete, 2);
        assert_eq!(duplicate, 1);
    }

    #[test]
    fn test_location_name() {
        assert!(validate_location_name("Expo").is_ok());
        let errors = validate_location_name("  ").unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyLocationName);
    }
}
