//! # CabinetKit Core
//!
//! Core types and catalog data for CabinetKit.
//! Provides the error taxonomy, unit and money helpers, the module catalog
//! and the catalog price tables consumed by the configurator.

pub mod data;
pub mod error;
pub mod units;

pub use data::{
    Category, DoorProfileRecord, HardwarePrice, HardwareRecord, MaterialRecord, ModuleCatalog,
    ModuleDefinition, ModulePriceRecord, ModuleType, PriceTableDocument, PriceTables,
};

pub use error::{AssignmentError, CatalogError, Error, Result, ValidationError};

pub use units::{format_cents, format_length, Axis, Cents, MeasurementSystem};
