//! Price derivation
//!
//! [`quote`] is a pure function of a configuration and the catalog price
//! tables. It keeps no state and is safe to call after every edit. All money
//! is whole cents; conversion to a display string happens in
//! [`cabinetkit_core::format_cents`].
//!
//! Codes without a price record are priced at zero and listed in
//! [`PriceBreakdown::gaps`] so that catalog data can be reconciled; they never
//! fail the quote.

use cabinetkit_core::data::modules::ModuleCatalog;
use cabinetkit_core::data::pricing::{HardwarePrice, PriceTables};
use cabinetkit_core::units::{format_cents, Cents};
use serde::Serialize;
use std::fmt;

use crate::model::{CabinetConfig, FinishField};

/// Default ± band applied to the total
pub const DEFAULT_VARIANCE_PERCENT: u32 = 5;

/// Which table a missing code was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupGapKind {
    Module,
    Material,
    DoorProfile,
    Hardware,
}

impl fmt::Display for LookupGapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => write!(f, "module"),
            Self::Material => write!(f, "material"),
            Self::DoorProfile => write!(f, "door profile"),
            Self::Hardware => write!(f, "hardware"),
        }
    }
}

/// A referenced code with no price record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LookupGap {
    pub kind: LookupGapKind,
    pub code: String,
}

/// One itemised line of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: Cents,
}

/// Itemised quote for a cabinet run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    pub cabinet_cost: Cents,
    pub material_cost: Cents,
    pub door_cost: Cents,
    pub hardware_cost: Cents,
    pub total: Cents,
    /// Doors across all assigned modules
    pub door_count: u32,
    /// Doors plus drawer fronts
    pub hardware_units: u32,
    pub variance_percent: u32,
    /// `total * variance_percent / 100`, truncated
    pub variance: Cents,
    pub line_items: Vec<LineItem>,
    pub gaps: Vec<LookupGap>,
}

impl PriceBreakdown {
    /// Lower end of the variance band
    pub fn low(&self) -> Cents {
        self.total.saturating_sub(self.variance)
    }

    /// Upper end of the variance band
    pub fn high(&self) -> Cents {
        self.total.saturating_add(self.variance)
    }

    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }

    /// `"$1,475.00 ± $73.75"`
    pub fn display_total(&self) -> String {
        format!(
            "{} ± {}",
            format_cents(self.total),
            format_cents(self.variance)
        )
    }
}

/// Prices a configuration against the catalog price tables.
pub fn quote(
    config: &CabinetConfig,
    catalog: &ModuleCatalog,
    tables: &PriceTables,
    variance_percent: u32,
) -> PriceBreakdown {
    let mut line_items = Vec::new();
    let mut gaps = Vec::new();

    let mut cabinet_cost: Cents = 0;
    let mut door_count: u32 = 0;
    let mut drawer_count: u32 = 0;

    for slot in &config.slots {
        let Some(module) = slot.module() else {
            continue;
        };
        let code = module.module_type.code();
        let definition = catalog.get(module.module_type);
        let record = tables.module(code);

        let doors = record
            .and_then(|r| r.door_count)
            .or_else(|| definition.map(|d| d.door_count))
            .unwrap_or(0);
        door_count = door_count.saturating_add(doors);
        drawer_count = drawer_count.saturating_add(definition.map_or(0, |d| d.drawer_count));

        let name = definition.map_or(code, |d| d.name.as_str());
        match record {
            Some(record) => {
                cabinet_cost = cabinet_cost.saturating_add(record.price_per_unit);
                line_items.push(LineItem {
                    label: format!("{} #{}", name, slot.position + 1),
                    amount: record.price_per_unit,
                });
            }
            None => record_gap(&mut gaps, LookupGapKind::Module, code),
        }
    }

    let material_code = config.finish.get(FinishField::Material);
    let material_cost = match tables.material(material_code) {
        Some(record) => {
            line_items.push(LineItem {
                label: format!("Material {}", record.code),
                amount: record.price_per_unit,
            });
            record.price_per_unit
        }
        None => {
            record_gap(&mut gaps, LookupGapKind::Material, material_code);
            0
        }
    };

    let profile_code = config.finish.get(FinishField::DoorProfile);
    let door_cost = match tables.door_profile(profile_code) {
        Some(record) => {
            let amount = record.price_per_door.saturating_mul(Cents::from(door_count));
            line_items.push(LineItem {
                label: format!("Doors {} x {}", door_count, record.code),
                amount,
            });
            amount
        }
        None => {
            record_gap(&mut gaps, LookupGapKind::DoorProfile, profile_code);
            0
        }
    };

    let hardware_units = door_count.saturating_add(drawer_count);
    let hardware_code = config.finish.get(FinishField::Hardware);
    let hardware_cost = match tables.hardware(hardware_code) {
        Some(record) => {
            let amount = match record.price {
                HardwarePrice::Flat(price) => price,
                HardwarePrice::PerUnit(price) => price.saturating_mul(Cents::from(hardware_units)),
            };
            line_items.push(LineItem {
                label: format!("Hardware {}", record.code),
                amount,
            });
            amount
        }
        None => {
            record_gap(&mut gaps, LookupGapKind::Hardware, hardware_code);
            0
        }
    };

    let total = cabinet_cost
        .saturating_add(material_cost)
        .saturating_add(door_cost)
        .saturating_add(hardware_cost);
    let variance = variance_of(total, variance_percent);

    PriceBreakdown {
        cabinet_cost,
        material_cost,
        door_cost,
        hardware_cost,
        total,
        door_count,
        hardware_units,
        variance_percent,
        variance,
        line_items,
        gaps,
    }
}

/// `total * percent / 100` in integer cents, truncated
pub fn variance_of(total: Cents, percent: u32) -> Cents {
    let wide = u128::from(total) * u128::from(percent) / 100;
    Cents::try_from(wide).unwrap_or(Cents::MAX)
}

// Unset codes are not gaps; only a chosen code with no record is.
fn record_gap(gaps: &mut Vec<LookupGap>, kind: LookupGapKind, code: &str) {
    if code.is_empty() {
        return;
    }
    tracing::debug!(%kind, code, "No price record, pricing as zero");
    let gap = LookupGap {
        kind,
        code: code.to_string(),
    };
    if !gaps.contains(&gap) {
        gaps.push(gap);
    }
}
