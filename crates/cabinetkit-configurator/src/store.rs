//! Cabinet configuration store
//!
//! Single writer of the cabinet run. Every mutation works on a private copy of
//! the current [`CabinetConfig`] and only publishes it (as a new `Arc`) once
//! the whole edit has succeeded, so a failed call never leaves a partial
//! change behind.

use std::sync::Arc;

use cabinetkit_core::data::modules::{Category, ModuleCatalog, ModuleType};
use cabinetkit_core::units::Axis;
use cabinetkit_core::{AssignmentError, Result, ValidationError};

use crate::model::{
    CabinetConfig, CabinetDimensions, DimensionBounds, FinishField, ModuleConfig, ModuleOptions,
    Slot, SlotContent, SlotId,
};

/// Owner of the current cabinet configuration
#[derive(Debug, Clone)]
pub struct ConfigurationStore {
    current: Arc<CabinetConfig>,
    catalog: Arc<ModuleCatalog>,
    bounds: DimensionBounds,
    next_revision: u64,
}

impl ConfigurationStore {
    /// Creates a store holding the default run, clamped into `bounds`.
    pub fn new(catalog: Arc<ModuleCatalog>, bounds: DimensionBounds) -> Self {
        let dimensions = bounds.clamp(CabinetDimensions::default());
        Self {
            current: Arc::new(CabinetConfig::new(dimensions)),
            catalog,
            bounds,
            next_revision: 1,
        }
    }

    /// Rehydrates a store from a persisted configuration.
    ///
    /// Structural invariants and module options are checked; dimension bounds
    /// are not, since the bounds may have changed since the configuration was
    /// saved. The wizard's dimensions step reports out-of-range values instead.
    pub fn from_config(
        catalog: Arc<ModuleCatalog>,
        bounds: DimensionBounds,
        config: CabinetConfig,
    ) -> Result<Self> {
        config.check_invariants()?;
        config.check_options(&catalog)?;
        let next_revision = config.revision + 1;
        Ok(Self {
            current: Arc::new(config),
            catalog,
            bounds,
            next_revision,
        })
    }

    /// Shared handle to the current configuration
    pub fn current(&self) -> Arc<CabinetConfig> {
        Arc::clone(&self.current)
    }

    /// Borrow the current configuration
    pub fn config(&self) -> &CabinetConfig {
        &self.current
    }

    pub fn bounds(&self) -> &DimensionBounds {
        &self.bounds
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    /// Replace the current configuration wholesale (undo/redo).
    pub fn restore(&mut self, snapshot: Arc<CabinetConfig>) {
        tracing::debug!(revision = snapshot.revision, "Restoring configuration");
        self.current = snapshot;
    }

    /// Replaces the dimensions after validating every axis.
    pub fn set_dimensions(&mut self, dims: CabinetDimensions) -> Result<Arc<CabinetConfig>> {
        if let Err(err) = self.bounds.validate(&dims) {
            tracing::warn!(%dims, "Rejected dimensions: {}", err);
            return Err(err.into());
        }
        self.apply(|config| {
            config.dimensions = dims;
            config.check_spans()?;
            Ok(())
        })
    }

    /// Slider-style adjustment: adds `delta` to one axis and clamps into bounds.
    ///
    /// Fails only when the clamped width would be narrower than a row.
    pub fn nudge_dimension(&mut self, axis: Axis, delta: i32) -> Result<Arc<CabinetConfig>> {
        let bounds = self.bounds.axis(axis);
        let value = bounds.clamp(i64::from(self.current.dimensions.get(axis)) + i64::from(delta));
        self.apply(|config| {
            config.dimensions = config.dimensions.with_axis(axis, value);
            config.check_spans()?;
            Ok(())
        })
    }

    /// Appends an undecided slot to the end of the run.
    pub fn add_slot(&mut self, category: Category, width: u32) -> Result<SlotId> {
        if width == 0 {
            return Err(ValidationError::ZeroWidth.into());
        }
        let id = SlotId::generate();
        let slot_id = id.clone();
        self.apply(|config| {
            config.slots.push(Slot {
                id: slot_id,
                position: config.slots.len(),
                category,
                width,
                content: SlotContent::Undecided,
            });
            config.check_spans()?;
            Ok(())
        })?;
        tracing::debug!(slot = %id, %category, width, "Added slot");
        Ok(id)
    }

    /// Removes a slot and closes the gap in positions.
    pub fn remove_slot(&mut self, slot_id: &SlotId) -> Result<Arc<CabinetConfig>> {
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            config.slots.remove(index);
            config.renumber();
            Ok(())
        })
    }

    /// Changes the width of a slot.
    pub fn resize_slot(&mut self, slot_id: &SlotId, width: u32) -> Result<Arc<CabinetConfig>> {
        if width == 0 {
            return Err(ValidationError::ZeroWidth.into());
        }
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            config.slots[index].width = width;
            config.check_spans()?;
            Ok(())
        })
    }

    /// Moves a slot to `new_position`, shifting the slots in between.
    pub fn move_slot(&mut self, slot_id: &SlotId, new_position: usize) -> Result<Arc<CabinetConfig>> {
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            let len = config.slots.len();
            if new_position >= len {
                return Err(ValidationError::PositionOutOfRange {
                    position: new_position,
                    len,
                }
                .into());
            }
            let slot = config.slots.remove(index);
            config.slots.insert(new_position, slot);
            config.renumber();
            Ok(())
        })
    }

    /// Places a module in a slot of the same category.
    pub fn assign_module(
        &mut self,
        slot_id: &SlotId,
        module_type: ModuleType,
    ) -> Result<Arc<CabinetConfig>> {
        let module = ModuleConfig::new(module_type, &self.catalog);
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            let slot = &mut config.slots[index];
            if slot.category != module_type.category() {
                tracing::warn!(slot = %slot_id, module = %module_type, "Rejected module for slot category");
                return Err(AssignmentError::CategoryMismatch {
                    slot_id: slot_id.to_string(),
                    slot_category: slot.category,
                    module: module_type.code().to_string(),
                    module_category: module_type.category(),
                }
                .into());
            }
            slot.content = SlotContent::Module(module);
            Ok(())
        })
    }

    /// Replaces the options of the module in a slot.
    pub fn set_module_options(
        &mut self,
        slot_id: &SlotId,
        options: ModuleOptions,
    ) -> Result<Arc<CabinetConfig>> {
        let catalog = Arc::clone(&self.catalog);
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            let SlotContent::Module(module) = &mut config.slots[index].content else {
                return Err(ValidationError::InvalidOption {
                    reason: format!("slot {} has no module", slot_id),
                }
                .into());
            };
            if let Some(definition) = catalog.get(module.module_type) {
                options.validate_for(definition)?;
            }
            module.options = options;
            Ok(())
        })
    }

    /// Removes the module from a slot, leaving it explicitly empty.
    pub fn clear_slot(&mut self, slot_id: &SlotId) -> Result<Arc<CabinetConfig>> {
        self.apply(|config| {
            let index = index_of(config, slot_id)?;
            config.slots[index].content = SlotContent::Empty;
            Ok(())
        })
    }

    /// Sets one finish code. Codes are not checked against the catalog;
    /// unknown codes are priced as lookup gaps.
    pub fn set_finish(
        &mut self,
        field: FinishField,
        code: impl Into<String>,
    ) -> Result<Arc<CabinetConfig>> {
        let code = code.into();
        self.apply(|config| {
            config.finish.set(field, code);
            Ok(())
        })
    }

    /// Runs `edit` against a copy of the current value and publishes the
    /// copy only if the edit succeeds.
    fn apply<F>(&mut self, edit: F) -> Result<Arc<CabinetConfig>>
    where
        F: FnOnce(&mut CabinetConfig) -> Result<()>,
    {
        let mut next = CabinetConfig::clone(&self.current);
        edit(&mut next)?;
        next.revision = self.next_revision;
        self.next_revision += 1;

        let next = Arc::new(next);
        self.current = Arc::clone(&next);
        tracing::trace!(revision = next.revision, "Configuration updated");
        Ok(next)
    }
}

fn index_of(config: &CabinetConfig, slot_id: &SlotId) -> Result<usize> {
    config.slot_index(slot_id).ok_or_else(|| {
        AssignmentError::UnknownSlot {
            slot_id: slot_id.to_string(),
        }
        .into()
    })
}
