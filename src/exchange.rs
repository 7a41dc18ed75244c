//! JSON import/export of taxonomy and schedule documents.
//!
//! Two document shapes:
//! - Taxonomy: `{ "locationZoneRoleMap": {...}, "zoneCaptainMap": {...} }`.
//!   Both keys are required on import; either may map to an empty object.
//! - Schedule: a JSON array of schedule entries, raw text and computed
//!   groups included.
//!
//! Exports are pretty-printed with two-space indentation. Importing an
//! export yields an equal value.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{ScheduleEntry, Taxonomy};

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Failed to read or write document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected document shape: {0}")]
    Shape(String),
}

const TAXONOMY_KEYS: [&str; 2] = ["locationZoneRoleMap", "zoneCaptainMap"];

/// Parses a taxonomy document. Both top-level keys must be present.
pub fn import_taxonomy(json: &str) -> Result<Taxonomy, ExchangeError> {
    let value: serde_json::Value = serde_json::from_str(json).inspect_err(|e| {
        warn!(error = %e, "taxonomy document is not valid JSON");
    })?;
    let Some(object) = value.as_object() else {
        return Err(ExchangeError::Shape(
            "taxonomy document must be a JSON object".to_string(),
        ));
    };
    for key in TAXONOMY_KEYS {
        if !object.contains_key(key) {
            warn!(key, "taxonomy document is missing a key");
            return Err(ExchangeError::Shape(format!(
                "taxonomy document is missing \"{key}\""
            )));
        }
    }
    let taxonomy: Taxonomy = serde_json::from_value(value)?;
    debug!(
        locations = taxonomy.location_zone_role_map.len(),
        zones_with_captains = taxonomy.zone_captain_map.len(),
        "imported taxonomy"
    );
    Ok(taxonomy)
}

/// Serializes a taxonomy document.
pub fn export_taxonomy(taxonomy: &Taxonomy) -> Result<String, ExchangeError> {
    Ok(serde_json::to_string_pretty(taxonomy)?)
}

/// Parses a schedule document.
pub fn import_schedule(json: &str) -> Result<Vec<ScheduleEntry>, ExchangeError> {
    let value: serde_json::Value = serde_json::from_str(json).inspect_err(|e| {
        warn!(error = %e, "schedule document is not valid JSON");
    })?;
    if !value.is_array() {
        return Err(ExchangeError::Shape(
            "schedule document must be a JSON array".to_string(),
        ));
    }
    let entries: Vec<ScheduleEntry> = serde_json::from_value(value)?;
    debug!(entries = entries.len(), "imported schedule");
    Ok(entries)
}

/// Serializes a schedule document.
pub fn export_schedule(entries: &[ScheduleEntry]) -> Result<String, ExchangeError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Reads a taxonomy document from disk.
pub fn read_taxonomy<P: AsRef<Path>>(path: P) -> Result<Taxonomy, ExchangeError> {
    import_taxonomy(&std::fs::read_to_string(path)?)
}

/// Writes a taxonomy document to disk.
pub fn write_taxonomy<P: AsRef<Path>>(path: P, taxonomy: &Taxonomy) -> Result<(), ExchangeError> {
    std::fs::write(path, export_taxonomy(taxonomy)?)?;
    Ok(())
}

/// Reads a schedule document from disk.
pub fn read_schedule<P: AsRef<Path>>(path: P) -> Result<Vec<ScheduleEntry>, ExchangeError> {
    import_schedule(&std::fs::read_to_string(path)?)
}

/// Writes a schedule document to disk.
pub fn write_schedule<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduleEntry],
) -> Result<(), ExchangeError> {
    std::fs::write(path, export_schedule(entries)?)?;
    Ok(())
}
