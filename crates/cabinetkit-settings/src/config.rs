//! Configuration and settings management for CabinetKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Dimension bounds the catalog allows per axis
//! - Undo history depth
//! - Pricing variance band
//! - Display units

pub use cabinetkit_core::units::MeasurementSystem;
use cabinetkit_configurator::history::DEFAULT_HISTORY_DEPTH;
use cabinetkit_configurator::model::{AxisBounds, DimensionBounds};
use cabinetkit_configurator::pricing::DEFAULT_VARIANCE_PERCENT;
use cabinetkit_configurator::session::SessionOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Largest variance band accepted, in percent
pub const MAX_VARIANCE_PERCENT: u32 = 100;

/// Inclusive millimetre range for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: u32,
    pub max: u32,
}

impl AxisRange {
    fn validate(&self, key: &str) -> ConfigResult<()> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                key: key.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<AxisBounds> for AxisRange {
    fn from(bounds: AxisBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

impl From<AxisRange> for AxisBounds {
    fn from(range: AxisRange) -> Self {
        AxisBounds::new(range.min, range.max)
    }
}

/// Dimension bounds settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSettings {
    /// Run width in mm
    pub width: AxisRange,
    /// Run height in mm
    pub height: AxisRange,
    /// Run depth in mm
    pub depth: AxisRange,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        let bounds = DimensionBounds::default();
        Self {
            width: bounds.width.into(),
            height: bounds.height.into(),
            depth: bounds.depth.into(),
        }
    }
}

impl DimensionSettings {
    pub fn bounds(&self) -> DimensionBounds {
        DimensionBounds {
            width: self.width.into(),
            height: self.height.into(),
            depth: self.depth.into(),
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Undo steps kept per session
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_HISTORY_DEPTH,
        }
    }
}

/// Pricing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    /// ± band around the quoted total, in percent
    pub variance_percent: u32,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            variance_percent: DEFAULT_VARIANCE_PERCENT,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Units used when showing lengths
    pub measurement_system: MeasurementSystem,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
/// Missing sections fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dimensions: DimensionSettings,
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/cabinetkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("cabinetkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No config directory on this platform".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.dimensions.width.validate("dimensions.width")?;
        self.dimensions.height.validate("dimensions.height")?;
        self.dimensions.depth.validate("dimensions.depth")?;

        if self.pricing.variance_percent > MAX_VARIANCE_PERCENT {
            return Err(ConfigError::ValueOutOfRange {
                key: "pricing.variance_percent".to_string(),
                value: self.pricing.variance_percent.to_string(),
            });
        }

        Ok(())
    }

    /// Session policy derived from these settings
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            bounds: self.dimensions.bounds(),
            history_depth: self.history.max_depth,
            variance_percent: self.pricing.variance_percent,
        }
    }
}
