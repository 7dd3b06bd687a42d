//! Catalog data
//!
//! Static module definitions and the price tables supplied by the catalog
//! owner. Both are read-only from the configurator's point of view.

pub mod modules;
pub mod pricing;

pub use modules::{Category, ModuleCatalog, ModuleDefinition, ModuleType};
pub use pricing::{
    DoorProfileRecord, HardwarePrice, HardwareRecord, MaterialRecord, ModulePriceRecord,
    PriceTableDocument, PriceTables,
};
