//! Role catalog: the choices offered by the schedule form.
//!
//! A flat catalog is a single list of roles with no location, zone or
//! captain; a tiered catalog is a full [`Taxonomy`]. Both answer the
//! same queries so the form and validation code handle them uniformly.

use serde::{Deserialize, Serialize};

use super::taxonomy::Taxonomy;

/// Roles offered when no taxonomy has been defined.
pub const DEFAULT_ROLES: [&str; 5] = [
    "Registers",
    "Networking Room Assistants",
    "Plenary",
    "DSA Room",
    "Visa",
];

/// Source of location/zone/role/captain choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleCatalog {
    /// A single-level role list.
    Flat(Vec<String>),
    /// Location → zone → role taxonomy with zone captains.
    Tiered(Taxonomy),
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::Flat(DEFAULT_ROLES.iter().map(|r| r.to_string()).collect())
    }
}

impl RoleCatalog {
    /// Whether locations, zones and captains apply.
    pub fn is_tiered(&self) -> bool {
        matches!(self, Self::Tiered(_))
    }

    /// The taxonomy, if tiered.
    pub fn taxonomy(&self) -> Option<&Taxonomy> {
        match self {
            Self::Flat(_) => None,
            Self::Tiered(t) => Some(t),
        }
    }

    /// Location choices (none for a flat catalog).
    pub fn locations(&self) -> Vec<&str> {
        self.taxonomy().map(Taxonomy::locations).unwrap_or_default()
    }

    /// Zone choices for a location.
    pub fn zones(&self, location: &str) -> &[String] {
        self.taxonomy().map(|t| t.zones(location)).unwrap_or(&[])
    }

    /// Role choices. A flat catalog ignores `location` and `zone`.
    pub fn roles(&self, location: &str, zone: &str) -> &[String] {
        match self {
            Self::Flat(roles) => roles,
            Self::Tiered(t) => t.roles(location, zone),
        }
    }

    /// Captain choices for a zone.
    pub fn captains(&self, zone: &str) -> &[String] {
        self.taxonomy().map(|t| t.captains(zone)).unwrap_or(&[])
    }

    /// A copy of the taxonomy to edit; empty for a flat catalog. Wrap
    /// the edited copy in [`RoleCatalog::Tiered`] to apply it.
    pub fn editable_taxonomy(&self) -> Taxonomy {
        self.taxonomy().cloned().unwrap_or_default()
    }
}
