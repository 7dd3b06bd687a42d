//! Cabinet configuration data model
//!
//! The aggregate root is [`CabinetConfig`]: run dimensions, the ordered slot
//! list and the global finish selection. Values of this type are immutable
//! once published by the store; every edit produces a fresh value.

use cabinetkit_core::data::modules::{Category, ModuleCatalog, ModuleDefinition, ModuleType};
use cabinetkit_core::units::Axis;
use cabinetkit_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Inclusive millimetre range for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: u32,
    pub max: u32,
}

impl AxisBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a signed value into the range
    pub fn clamp(&self, value: i64) -> u32 {
        let clamped = value.max(i64::from(self.min)).min(i64::from(self.max));
        u32::try_from(clamped).unwrap_or(self.max)
    }
}

/// Catalog-defined dimension limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub width: AxisBounds,
    pub height: AxisBounds,
    pub depth: AxisBounds,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self {
            width: AxisBounds::new(300, 6000),
            height: AxisBounds::new(300, 2400),
            depth: AxisBounds::new(250, 900),
        }
    }
}

impl DimensionBounds {
    /// Bounds for one axis
    pub fn axis(&self, axis: Axis) -> AxisBounds {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Check one axis value
    pub fn check_axis(&self, axis: Axis, value: u32) -> Result<(), ValidationError> {
        let bounds = self.axis(axis);
        if bounds.contains(value) {
            Ok(())
        } else {
            Err(ValidationError::DimensionOutOfRange {
                axis,
                value,
                min: bounds.min,
                max: bounds.max,
            })
        }
    }

    /// Check all three axes, reporting the first failure
    pub fn validate(&self, dims: &CabinetDimensions) -> Result<(), ValidationError> {
        for axis in Axis::ALL {
            self.check_axis(axis, dims.get(axis))?;
        }
        Ok(())
    }

    /// Clamp every axis of `dims` into range
    pub fn clamp(&self, dims: CabinetDimensions) -> CabinetDimensions {
        let mut out = dims;
        for axis in Axis::ALL {
            out = out.with_axis(axis, self.axis(axis).clamp(i64::from(dims.get(axis))));
        }
        out
    }
}

/// Run dimensions in whole millimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CabinetDimensions {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Default for CabinetDimensions {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 900,
            depth: 600,
        }
    }
}

impl CabinetDimensions {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Convert untyped input (form fields, JSON numbers) into dimensions.
    ///
    /// Fractional, negative and non-finite values are rejected. Range is not
    /// checked here; that is the store's job.
    pub fn from_mm(width: f64, height: f64, depth: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            width: whole_mm(Axis::Width, width)?,
            height: whole_mm(Axis::Height, height)?,
            depth: whole_mm(Axis::Depth, depth)?,
        })
    }

    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Copy with one axis replaced
    pub fn with_axis(mut self, axis: Axis, value: u32) -> Self {
        match axis {
            Axis::Width => self.width = value,
            Axis::Height => self.height = value,
            Axis::Depth => self.depth = value,
        }
        self
    }
}

impl fmt::Display for CabinetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {} mm", self.width, self.height, self.depth)
    }
}

fn whole_mm(axis: Axis, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::NonIntegerDimension { axis, value });
    }
    Ok(value as u32)
}

/// Stable slot identity. Treated as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub String);

impl SlotId {
    /// Generate a fresh random identity
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Hinge side for single-door modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    Right,
}

/// Maximum adjustable shelves in one module
pub const MAX_SHELVES: u8 = 6;

/// Module-specific options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Only meaningful for modules with exactly one door
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hinge: Option<HingeSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_count: Option<u8>,
}

impl ModuleOptions {
    /// Check the options against the module they are applied to
    pub fn validate_for(&self, definition: &ModuleDefinition) -> Result<(), ValidationError> {
        if self.hinge.is_some() && definition.door_count != 1 {
            return Err(ValidationError::InvalidOption {
                reason: format!(
                    "hinge side only applies to single-door modules, '{}' has {} doors",
                    definition.code(),
                    definition.door_count
                ),
            });
        }
        if let Some(shelves) = self.shelf_count {
            if shelves > MAX_SHELVES {
                return Err(ValidationError::InvalidOption {
                    reason: format!("shelf count {} exceeds {}", shelves, MAX_SHELVES),
                });
            }
        }
        Ok(())
    }
}

/// A module placed in a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub module_type: ModuleType,
    #[serde(default)]
    pub options: ModuleOptions,
}

impl ModuleConfig {
    /// Module with catalog defaults: single-door modules hinge left
    pub fn new(module_type: ModuleType, catalog: &ModuleCatalog) -> Self {
        let hinge = (catalog.door_count(module_type) == 1).then_some(HingeSide::Left);
        Self {
            module_type,
            options: ModuleOptions {
                hinge,
                shelf_count: None,
            },
        }
    }

    pub fn category(&self) -> Category {
        self.module_type.category()
    }
}

/// What a slot currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SlotContent {
    /// Not yet decided; blocks the layout step
    #[default]
    Undecided,
    /// Explicitly left empty
    Empty,
    /// Holds a module
    Module(ModuleConfig),
}

/// One bay of the run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    /// Index in run order
    pub position: usize,
    pub category: Category,
    /// Bay width in mm
    pub width: u32,
    #[serde(default)]
    pub content: SlotContent,
}

impl Slot {
    pub fn module(&self) -> Option<&ModuleConfig> {
        match &self.content {
            SlotContent::Module(module) => Some(module),
            _ => None,
        }
    }

    /// Module assigned or explicitly empty
    pub fn is_decided(&self) -> bool {
        !matches!(self.content, SlotContent::Undecided)
    }
}

/// Finish field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishField {
    Material,
    DoorProfile,
    Hardware,
}

impl FinishField {
    pub const ALL: [FinishField; 3] = [
        FinishField::Material,
        FinishField::DoorProfile,
        FinishField::Hardware,
    ];
}

impl fmt::Display for FinishField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material => write!(f, "material"),
            Self::DoorProfile => write!(f, "door profile"),
            Self::Hardware => write!(f, "hardware"),
        }
    }
}

/// Global finish selection, by catalog code. Empty string means unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FinishConfig {
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub door_profile: String,
    #[serde(default)]
    pub hardware: String,
}

impl FinishConfig {
    pub fn get(&self, field: FinishField) -> &str {
        match field {
            FinishField::Material => &self.material,
            FinishField::DoorProfile => &self.door_profile,
            FinishField::Hardware => &self.hardware,
        }
    }

    pub fn set(&mut self, field: FinishField, code: impl Into<String>) {
        let code = code.into();
        match field {
            FinishField::Material => self.material = code,
            FinishField::DoorProfile => self.door_profile = code,
            FinishField::Hardware => self.hardware = code,
        }
    }

    /// Fields that are still unset
    pub fn missing(&self) -> Vec<FinishField> {
        FinishField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Cabinet run aggregate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CabinetConfig {
    pub dimensions: CabinetDimensions,
    #[serde(default)]
    pub slots: Vec<Slot>,
    #[serde(default)]
    pub finish: FinishConfig,
    /// Bumped by the store on every successful edit
    #[serde(default)]
    pub revision: u64,
}

impl CabinetConfig {
    pub fn new(dimensions: CabinetDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub fn slot(&self, id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| &s.id == id)
    }

    pub fn slot_index(&self, id: &SlotId) -> Option<usize> {
        self.slots.iter().position(|s| &s.id == id)
    }

    /// Slots of one row, in run order
    pub fn slots_in(&self, category: Category) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| s.category == category)
    }

    /// Total width of one row
    pub fn row_span(&self, category: Category) -> u32 {
        self.slots_in(category)
            .fold(0u32, |acc, s| acc.saturating_add(s.width))
    }

    /// Every slot has a module or is explicitly empty
    pub fn is_layout_decided(&self) -> bool {
        self.slots.iter().all(Slot::is_decided)
    }

    /// Rewrite positions to match list order
    pub(crate) fn renumber(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.position = index;
        }
    }

    /// Check that no row is wider than the run
    pub fn check_spans(&self) -> Result<(), ValidationError> {
        for category in Category::ALL {
            let span = self.row_span(category);
            if span > self.dimensions.width {
                return Err(ValidationError::RowOverflow {
                    category,
                    span,
                    run_width: self.dimensions.width,
                });
            }
        }
        Ok(())
    }

    /// Check every structural invariant of the aggregate.
    ///
    /// Positions must be exactly `0..n` in list order, identities unique,
    /// widths non-zero, rows within the run width and every module in a slot
    /// of its own category.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.slots.len());
        for (index, slot) in self.slots.iter().enumerate() {
            if slot.position != index {
                return Err(invalid(format!(
                    "slot {} has position {} but is at index {}",
                    slot.id, slot.position, index
                )));
            }
            if !seen.insert(&slot.id) {
                return Err(invalid(format!("duplicate slot id {}", slot.id)));
            }
            if slot.width == 0 {
                return Err(invalid(format!("slot {} has zero width", slot.id)));
            }
            if let Some(module) = slot.module() {
                if module.category() != slot.category {
                    return Err(invalid(format!(
                        "{} module '{}' in {} slot {}",
                        module.category(),
                        module.module_type,
                        slot.category,
                        slot.id
                    )));
                }
            }
        }
        self.check_spans()
    }

    /// Check every module's options against its catalog definition.
    ///
    /// Catches state the editing API would refuse, such as a hinge side on a
    /// two-door module, arriving from a saved configuration.
    pub fn check_options(&self, catalog: &ModuleCatalog) -> Result<(), ValidationError> {
        for slot in &self.slots {
            let Some(module) = slot.module() else {
                continue;
            };
            let Some(definition) = catalog.get(module.module_type) else {
                return Err(invalid(format!(
                    "slot {} holds '{}', which is not in the catalog",
                    slot.id, module.module_type
                )));
            };
            module.options.validate_for(definition).map_err(|err| {
                invalid(format!("slot {}: {}", slot.id, err))
            })?;
        }
        Ok(())
    }
}

fn invalid(reason: String) -> ValidationError {
    ValidationError::InvalidSnapshot { reason }
}
