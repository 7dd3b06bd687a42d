//! CabinetKit Settings Crate
//!
//! Application configuration for the configurator: catalog dimension bounds,
//! undo depth, price variance and display units, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    AxisRange, Config, DimensionSettings, DisplaySettings, HistorySettings, PricingSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
