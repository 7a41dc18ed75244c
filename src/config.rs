//! Application configuration.
//!
//! Stored as JSON. Every field has a default, so an empty object is a
//! valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{RoleCatalog, Taxonomy, DEFAULT_ROLES};
use crate::scheduler::{BreakPlanner, MinuteRollover};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Roster configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// What to do when rounded break minutes reach 60.
    pub minute_rollover: MinuteRollover,
    /// Role list used when no taxonomy is configured.
    pub default_roles: Vec<String>,
    /// Taxonomy to start from (and revert to); takes precedence over
    /// `default_roles`.
    pub default_taxonomy: Option<Taxonomy>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            minute_rollover: MinuteRollover::default(),
            default_roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            default_taxonomy: None,
        }
    }
}

impl AppConfig {
    /// Load config from a JSON file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.display().to_string())
            } else {
                ConfigError::Read(e)
            }
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save config to a JSON file, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self)?)?;
        Ok(())
    }

    /// Break planner honoring the rollover policy.
    pub fn planner(&self) -> BreakPlanner {
        BreakPlanner::new().with_rollover(self.minute_rollover)
    }

    /// Catalog to start from: the taxonomy if configured, else the role list.
    pub fn catalog(&self) -> RoleCatalog {
        match &self.default_taxonomy {
            Some(t) => RoleCatalog::Tiered(t.clone()),
            None => RoleCatalog::Flat(self.default_roles.clone()),
        }
    }
}
