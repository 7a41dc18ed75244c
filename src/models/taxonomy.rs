//! Location → zone → role taxonomy and zone captain roster.
//!
//! The taxonomy only parameterizes the choices offered when building a
//! schedule entry. Keys are kept in a `BTreeMap` so exported documents
//! are stable; zone, role and captain sequences keep their order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Zones of one location and the roles available in each zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationZones {
    /// Zone names in display order.
    pub zones: Vec<String>,
    /// Roles per zone.
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
}

impl LocationZones {
    /// Creates an empty location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a zone with its roles.
    pub fn with_zone(mut self, zone: impl Into<String>, roles: Vec<String>) -> Self {
        let zone = zone.into();
        self.zones.push(zone.clone());
        self.roles.insert(zone, roles);
        self
    }
}

/// Full taxonomy: locations with their zones and roles, plus captains per zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    /// Location → zones/roles.
    #[serde(default)]
    pub location_zone_role_map: BTreeMap<String, LocationZones>,
    /// Zone → captain names.
    #[serde(default)]
    pub zone_captain_map: BTreeMap<String, Vec<String>>,
}

impl Taxonomy {
    /// Creates an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location (builder form of [`Taxonomy::upsert_location`]).
    pub fn with_location(mut self, name: impl Into<String>, zones: LocationZones) -> Self {
        self.location_zone_role_map.insert(name.into(), zones);
        self
    }

    /// Sets the captains of a zone.
    pub fn with_captains(mut self, zone: impl Into<String>, captains: Vec<String>) -> Self {
        self.zone_captain_map.insert(zone.into(), captains);
        self
    }

    /// Whether no location and no captain is defined.
    pub fn is_empty(&self) -> bool {
        self.location_zone_role_map.is_empty() && self.zone_captain_map.is_empty()
    }

    /// Location names.
    pub fn locations(&self) -> Vec<&str> {
        self.location_zone_role_map.keys().map(String::as_str).collect()
    }

    /// Zones of a location (empty if unknown).
    pub fn zones(&self, location: &str) -> &[String] {
        self.location_zone_role_map
            .get(location)
            .map(|l| l.zones.as_slice())
            .unwrap_or(&[])
    }

    /// Roles of a zone within a location (empty if unknown).
    pub fn roles(&self, location: &str, zone: &str) -> &[String] {
        self.location_zone_role_map
            .get(location)
            .and_then(|l| l.roles.get(zone))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Captains of a zone (empty if unknown).
    pub fn captains(&self, zone: &str) -> &[String] {
        self.zone_captain_map
            .get(zone)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a location exists.
    pub fn has_location(&self, location: &str) -> bool {
        self.location_zone_role_map.contains_key(location)
    }

    /// Whether a zone exists in a location.
    pub fn has_zone(&self, location: &str, zone: &str) -> bool {
        self.zones(location).iter().any(|z| z == zone)
    }

    /// Whether a role exists in a zone of a location.
    pub fn has_role(&self, location: &str, zone: &str, role: &str) -> bool {
        self.roles(location, zone).iter().any(|r| r == role)
    }

    /// Whether a captain is listed for a zone.
    pub fn has_captain(&self, zone: &str, captain: &str) -> bool {
        self.captains(zone).iter().any(|c| c == captain)
    }

    /// Inserts or replaces a location.
    pub fn upsert_location(&mut self, name: impl Into<String>, zones: LocationZones) {
        self.location_zone_role_map.insert(name.into(), zones);
    }

    /// Removes a location and the captain lists of its zones.
    ///
    /// Returns the removed location data, if any.
    pub fn remove_location(&mut self, name: &str) -> Option<LocationZones> {
        let removed = self.location_zone_role_map.remove(name)?;
        for zone in &removed.zones {
            self.zone_captain_map.remove(zone);
        }
        Some(removed)
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.location_zone_role_map.clear();
        self.zone_captain_map.clear();
    }
}
