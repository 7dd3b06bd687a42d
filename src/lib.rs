//! # CabinetKit
//!
//! A configuration engine for parametric cabinet runs:
//! - Dimensions validated against catalog bounds
//! - Ordered base and overhead slots, each holding a catalog module or marked empty
//! - Material, door profile and hardware finishes
//! - A four-step wizard with per-step gating
//! - Bounded undo/redo over immutable snapshots
//! - Itemised pricing in whole cents with a ± variance band
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Module catalog, price tables, units, error types
//! 2. **cabinetkit-configurator** - Store, history, wizard, pricing, session, snapshots
//! 3. **cabinetkit-settings** - Bounds, history depth and variance settings (JSON/TOML)
//! 4. **cabinetkit** - This crate: re-exports, logging setup and the `cabinetkit` binary

pub mod report;

pub use cabinetkit_core::data;
pub use cabinetkit_core::{
    format_cents, format_length, AssignmentError, Axis, CatalogError, Category, Cents, Error,
    MeasurementSystem, ModuleCatalog, ModuleDefinition, ModuleType, PriceTables, Result,
    ValidationError,
};

pub use cabinetkit_configurator::{
    quote, CabinetConfig, CabinetDimensions, ChangeKind, ConfigListener, ConfigSnapshot,
    ConfiguratorSession, DimensionBounds, FinishField, HistoryLog, LookupGap, PriceBreakdown,
    SessionOptions, Slot, SlotContent, SlotId, StepIssue, WizardState, WizardStep,
};

pub use cabinetkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Pretty output on stderr, filtered by `RUST_LOG` on top of `info`.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging in the given format
///
/// Logs go to stderr so that command output on stdout stays clean.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
