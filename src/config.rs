//! Sync configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

fn default_window_months() -> u32 {
    6
}

fn default_max_results() -> u32 {
    2500
}

/// Tuning knobs for a sync run, loaded from the backend's TOML config.
///
/// `window_months` bounds both the remote fetch and local pruning: records
/// ending in the past or starting beyond `now + window_months` are removed.
/// `max_results` caps the remote page size; the default matches the
/// provider's ceiling so one fetch covers the whole window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_window_months")]
    pub window_months: u32,

    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            window_months: default_window_months(),
            max_results: default_max_results(),
        }
    }
}

impl SyncConfig {
    /// Load config from a TOML file, falling back to defaults when the file
    /// does not exist.
    pub fn from_path(path: &Path) -> SyncResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SyncError::Config(format!("Could not read {}: {e}", path.display())))?;

        toml::from_str(&content).map_err(|e| SyncError::Config(e.to_string()))
    }
}
