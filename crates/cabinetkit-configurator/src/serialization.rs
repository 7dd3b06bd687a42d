//! Serialization and deserialization of saved configurations.
//!
//! A [`ConfigSnapshot`] is the payload handed to the persistence layer on
//! save: the configuration aggregate plus a format version and metadata.
//! History and wizard position are session state and are not saved.

use anyhow::{bail, Context, Result};
use cabinetkit_core::ModuleCatalog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::CabinetConfig;

/// Snapshot format version
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Saved cabinet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub format_version: u32,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub config: CabinetConfig,
}

impl ConfigSnapshot {
    /// Capture a configuration for saving
    pub fn new(name: impl Into<String>, config: &CabinetConfig) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            name: name.into(),
            saved_at: Utc::now(),
            config: config.clone(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Parse a snapshot, rejecting unknown format versions, broken
    /// invariants and module options the standard catalog does not allow
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ConfigSnapshot =
            serde_json::from_str(json).context("Failed to parse configuration snapshot")?;

        if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
            bail!(
                "Unsupported snapshot format version {} (expected {})",
                snapshot.format_version,
                SNAPSHOT_FORMAT_VERSION
            );
        }
        snapshot
            .config
            .check_invariants()
            .and_then(|()| snapshot.config.check_options(&ModuleCatalog::standard()))
            .context("Configuration snapshot is inconsistent")?;

        Ok(snapshot)
    }

    /// Save snapshot to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write configuration file")?;
        tracing::info!(path = %path.as_ref().display(), name = %self.name, "Saved configuration");
        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read configuration file")?;
        Self::from_json(&content)
    }
}
