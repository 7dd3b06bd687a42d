//! Catalog price tables
//!
//! Read-only price records supplied by the persistence layer, keyed by
//! opaque catalog code. Codes are never parsed; a configuration referencing a
//! code with no record here is a lookup gap, handled by the pricing engine.

use crate::data::modules::{Category, ModuleType};
use crate::error::CatalogError;
use crate::units::Cents;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Priced module record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePriceRecord {
    /// Module catalog code (e.g. `"sink-base"`)
    pub code: String,
    /// Category as recorded by the catalog owner
    #[serde(default)]
    pub category: Option<Category>,
    /// Door count override; the module catalog's count is used when absent
    #[serde(default)]
    pub door_count: Option<u32>,
    /// Price of one module in cents
    pub price_per_unit: Cents,
}

impl ModulePriceRecord {
    /// Create a record for a catalog module type
    pub fn new(module_type: ModuleType, price_per_unit: Cents) -> Self {
        Self {
            code: module_type.code().to_string(),
            category: Some(module_type.category()),
            door_count: None,
            price_per_unit,
        }
    }
}

/// Priced material record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Material code (e.g. `"POL-NOWM"`)
    pub code: String,
    /// Material category (board, veneer, lacquer...)
    #[serde(default)]
    pub category: String,
    /// Colour family used for filtering in the finish picker
    #[serde(default)]
    pub color_family: String,
    /// Price for the run in cents
    pub price_per_unit: Cents,
}

impl MaterialRecord {
    /// Create a material record with no category or colour family
    pub fn new(code: impl Into<String>, price_per_unit: Cents) -> Self {
        Self {
            code: code.into(),
            category: String::new(),
            color_family: String::new(),
            price_per_unit,
        }
    }
}

/// Priced door profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorProfileRecord {
    /// Door profile code (e.g. `"SHAKER-SLIM"`)
    pub code: String,
    /// Price of one door in cents
    pub price_per_door: Cents,
}

impl DoorProfileRecord {
    /// Create a door profile record
    pub fn new(code: impl Into<String>, price_per_door: Cents) -> Self {
        Self {
            code: code.into(),
            price_per_door,
        }
    }
}

/// How a hardware line is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwarePrice {
    /// One price for the whole run
    Flat(Cents),
    /// Price per handle, charged once for every door and drawer front
    PerUnit(Cents),
}

/// Priced hardware record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareRecord {
    /// Hardware code
    pub code: String,
    /// Pricing rule
    pub price: HardwarePrice,
}

impl HardwareRecord {
    /// Create a hardware record
    pub fn new(code: impl Into<String>, price: HardwarePrice) -> Self {
        Self {
            code: code.into(),
            price,
        }
    }
}

/// Serialized form of the price tables, as exported by the catalog owner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceTableDocument {
    #[serde(default)]
    pub modules: Vec<ModulePriceRecord>,
    #[serde(default)]
    pub materials: Vec<MaterialRecord>,
    #[serde(default)]
    pub door_profiles: Vec<DoorProfileRecord>,
    #[serde(default)]
    pub hardware: Vec<HardwareRecord>,
}

/// Price tables - catalog price records keyed by code
#[derive(Debug, Clone, Default)]
pub struct PriceTables {
    modules: HashMap<String, ModulePriceRecord>,
    materials: HashMap<String, MaterialRecord>,
    door_profiles: HashMap<String, DoorProfileRecord>,
    hardware: HashMap<String, HardwareRecord>,
}

impl PriceTables {
    /// Create empty price tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a module price
    pub fn add_module(&mut self, record: ModulePriceRecord) {
        self.modules.insert(record.code.clone(), record);
    }

    /// Add or replace a material price
    pub fn add_material(&mut self, record: MaterialRecord) {
        self.materials.insert(record.code.clone(), record);
    }

    /// Add or replace a door profile price
    pub fn add_door_profile(&mut self, record: DoorProfileRecord) {
        self.door_profiles.insert(record.code.clone(), record);
    }

    /// Add or replace a hardware price
    pub fn add_hardware(&mut self, record: HardwareRecord) {
        self.hardware.insert(record.code.clone(), record);
    }

    /// Get a module price by code
    pub fn module(&self, code: &str) -> Option<&ModulePriceRecord> {
        self.modules.get(code)
    }

    /// Get a material price by code
    pub fn material(&self, code: &str) -> Option<&MaterialRecord> {
        self.materials.get(code)
    }

    /// Get a door profile price by code
    pub fn door_profile(&self, code: &str) -> Option<&DoorProfileRecord> {
        self.door_profiles.get(code)
    }

    /// Get a hardware price by code
    pub fn hardware(&self, code: &str) -> Option<&HardwareRecord> {
        self.hardware.get(code)
    }

    /// Materials in one colour family (case-insensitive)
    pub fn materials_by_color_family(&self, family: &str) -> Vec<&MaterialRecord> {
        let family = family.to_lowercase();
        let mut found: Vec<&MaterialRecord> = self
            .materials
            .values()
            .filter(|m| m.color_family.to_lowercase() == family)
            .collect();
        found.sort_by(|a, b| a.code.cmp(&b.code));
        found
    }

    /// Total number of records across all tables
    pub fn len(&self) -> usize {
        self.modules.len() + self.materials.len() + self.door_profiles.len() + self.hardware.len()
    }

    /// Check if every table is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build tables from a document, rejecting duplicate codes within a table
    pub fn from_document(document: PriceTableDocument) -> Result<Self, CatalogError> {
        let mut tables = Self::new();

        for record in document.modules {
            if tables.modules.contains_key(&record.code) {
                return Err(duplicate("module", record.code));
            }
            tables.add_module(record);
        }
        for record in document.materials {
            if tables.materials.contains_key(&record.code) {
                return Err(duplicate("material", record.code));
            }
            tables.add_material(record);
        }
        for record in document.door_profiles {
            if tables.door_profiles.contains_key(&record.code) {
                return Err(duplicate("door profile", record.code));
            }
            tables.add_door_profile(record);
        }
        for record in document.hardware {
            if tables.hardware.contains_key(&record.code) {
                return Err(duplicate("hardware", record.code));
            }
            tables.add_hardware(record);
        }

        tracing::debug!(records = tables.len(), "Loaded price tables");
        Ok(tables)
    }

    /// Parse tables from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: PriceTableDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load tables from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}

fn duplicate(table: &'static str, code: String) -> CatalogError {
    tracing::warn!(table, code = %code, "Duplicate code in price table");
    CatalogError::DuplicateCode { table, code }
}
