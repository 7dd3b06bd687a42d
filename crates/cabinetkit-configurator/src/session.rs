//! Configurator session
//!
//! One [`ConfiguratorSession`] per open configurator. It owns the store, the
//! history log and the wizard, and runs every edit as one synchronous chain:
//! mutate, commit the prior state to history, notify listeners. Nothing is
//! global, so independent sessions never share state.

use std::sync::Arc;

use cabinetkit_core::data::modules::{Category, ModuleCatalog, ModuleType};
use cabinetkit_core::data::pricing::PriceTables;
use cabinetkit_core::units::Axis;
use cabinetkit_core::Result;

use crate::history::{HistoryLog, DEFAULT_HISTORY_DEPTH};
use crate::model::{
    CabinetConfig, CabinetDimensions, DimensionBounds, FinishField, ModuleOptions, SlotId,
};
use crate::pricing::{self, PriceBreakdown, DEFAULT_VARIANCE_PERCENT};
use crate::serialization::ConfigSnapshot;
use crate::store::ConfigurationStore;
use crate::wizard::{self, StepIssue, WizardState, WizardStep};

/// Per-session policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub bounds: DimensionBounds,
    pub history_depth: usize,
    pub variance_percent: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            bounds: DimensionBounds::default(),
            history_depth: DEFAULT_HISTORY_DEPTH,
            variance_percent: DEFAULT_VARIANCE_PERCENT,
        }
    }
}

/// Why the configuration changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// A store mutation, with its history label
    Edit(String),
    Undo,
    Redo,
}

/// Handle for a registered listener, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Listener trait for configuration changes
///
/// Called after the change is complete, including the history commit.
pub trait ConfigListener {
    fn on_config_changed(&self, config: &Arc<CabinetConfig>, change: &ChangeKind);
}

impl<F> ConfigListener for F
where
    F: Fn(&Arc<CabinetConfig>, &ChangeKind),
{
    fn on_config_changed(&self, config: &Arc<CabinetConfig>, change: &ChangeKind) {
        self(config, change)
    }
}

/// Configurator session state
pub struct ConfiguratorSession {
    store: ConfigurationStore,
    history: HistoryLog,
    wizard: WizardState,
    variance_percent: u32,
    listeners: Vec<(ListenerHandle, Box<dyn ConfigListener>)>,
    next_listener: u64,
}

impl ConfiguratorSession {
    /// Starts a session on the default run
    pub fn new(catalog: Arc<ModuleCatalog>, options: SessionOptions) -> Self {
        Self::with_store(ConfigurationStore::new(catalog, options.bounds), options)
    }

    /// Reopens a saved configuration. History and wizard start fresh.
    pub fn from_snapshot(
        catalog: Arc<ModuleCatalog>,
        options: SessionOptions,
        snapshot: ConfigSnapshot,
    ) -> Result<Self> {
        let store = ConfigurationStore::from_config(catalog, options.bounds, snapshot.config)?;
        tracing::info!(name = %snapshot.name, "Reopened configuration");
        Ok(Self::with_store(store, options))
    }

    fn with_store(store: ConfigurationStore, options: SessionOptions) -> Self {
        Self {
            store,
            history: HistoryLog::new(options.history_depth),
            wizard: WizardState::new(),
            variance_percent: options.variance_percent,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Shared handle to the current configuration
    pub fn current(&self) -> Arc<CabinetConfig> {
        self.store.current()
    }

    pub fn config(&self) -> &CabinetConfig {
        self.store.config()
    }

    pub fn store(&self) -> &ConfigurationStore {
        &self.store
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn bounds(&self) -> &DimensionBounds {
        self.store.bounds()
    }

    // Mutations

    pub fn set_dimensions(&mut self, dims: CabinetDimensions) -> Result<()> {
        self.edit("Set dimensions", |store| store.set_dimensions(dims).map(drop))
    }

    pub fn nudge_dimension(&mut self, axis: Axis, delta: i32) -> Result<()> {
        let label = format!("Adjust {}", axis);
        self.edit(&label, |store| store.nudge_dimension(axis, delta).map(drop))
    }

    pub fn add_slot(&mut self, category: Category, width: u32) -> Result<SlotId> {
        self.edit("Add slot", |store| store.add_slot(category, width))
    }

    /// Adds a slot sized to the module's default width and assigns the module.
    /// Recorded as one history step.
    pub fn add_module_slot(&mut self, module_type: ModuleType) -> Result<SlotId> {
        let width = self
            .store
            .catalog()
            .get(module_type)
            .map_or(0, |d| d.default_width);
        self.edit("Add module", |store| {
            let id = store.add_slot(module_type.category(), width)?;
            store.assign_module(&id, module_type)?;
            Ok(id)
        })
    }

    pub fn remove_slot(&mut self, slot_id: &SlotId) -> Result<()> {
        self.edit("Remove slot", |store| store.remove_slot(slot_id).map(drop))
    }

    pub fn resize_slot(&mut self, slot_id: &SlotId, width: u32) -> Result<()> {
        self.edit("Resize slot", |store| store.resize_slot(slot_id, width).map(drop))
    }

    pub fn move_slot(&mut self, slot_id: &SlotId, new_position: usize) -> Result<()> {
        self.edit("Move slot", |store| {
            store.move_slot(slot_id, new_position).map(drop)
        })
    }

    pub fn assign_module(&mut self, slot_id: &SlotId, module_type: ModuleType) -> Result<()> {
        self.edit("Assign module", |store| {
            store.assign_module(slot_id, module_type).map(drop)
        })
    }

    pub fn set_module_options(&mut self, slot_id: &SlotId, options: ModuleOptions) -> Result<()> {
        self.edit("Change module options", |store| {
            store.set_module_options(slot_id, options).map(drop)
        })
    }

    pub fn clear_slot(&mut self, slot_id: &SlotId) -> Result<()> {
        self.edit("Clear slot", |store| store.clear_slot(slot_id).map(drop))
    }

    pub fn set_finish(&mut self, field: FinishField, code: impl Into<String>) -> Result<()> {
        let label = format!("Set {}", field);
        let code = code.into();
        self.edit(&label, |store| store.set_finish(field, code).map(drop))
    }

    // History

    /// Step back one edit. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.current()) {
            Some(snapshot) => {
                self.store.restore(snapshot);
                self.notify(&ChangeKind::Undo);
                true
            }
            None => false,
        }
    }

    /// Reapply one undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.current()) {
            Some(snapshot) => {
                self.store.restore(snapshot);
                self.notify(&ChangeKind::Redo);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // Wizard

    pub fn current_step(&self) -> WizardStep {
        self.wizard.current()
    }

    pub fn next_step(&mut self) -> bool {
        self.wizard.next_step(self.store.config(), self.store.bounds())
    }

    pub fn prev_step(&mut self) -> bool {
        self.wizard.prev_step()
    }

    pub fn go_to_step(&mut self, index: usize) -> bool {
        self.wizard.go_to_step(index)
    }

    /// Whether the current step passes
    pub fn can_proceed(&self) -> bool {
        wizard::can_proceed_from(self.wizard.current(), self.store.config(), self.store.bounds())
    }

    /// What blocks `step` right now
    pub fn step_issues(&self, step: WizardStep) -> Vec<StepIssue> {
        wizard::step_issues(step, self.store.config(), self.store.bounds())
    }

    // Pricing and persistence

    /// Price the current configuration
    pub fn quote(&self, tables: &PriceTables) -> PriceBreakdown {
        pricing::quote(
            self.store.config(),
            self.store.catalog(),
            tables,
            self.variance_percent,
        )
    }

    /// Capture the current configuration for saving
    pub fn snapshot(&self, name: impl Into<String>) -> ConfigSnapshot {
        ConfigSnapshot::new(name, self.store.config())
    }

    // Listeners

    pub fn subscribe(&mut self, listener: impl ConfigListener + 'static) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((handle, Box::new(listener)));
        handle
    }

    /// Remove a listener. Returns false if the handle was not registered.
    pub fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(h, _)| *h != handle);
        self.listeners.len() != before
    }

    fn edit<T, F>(&mut self, label: &str, op: F) -> Result<T>
    where
        F: FnOnce(&mut ConfigurationStore) -> Result<T>,
    {
        let prior = self.store.current();
        // Work on a scratch copy so a multi-step edit that fails halfway
        // leaves the store untouched.
        let mut scratch = self.store.clone();
        let out = op(&mut scratch)?;
        self.store = scratch;

        self.history.commit(prior, label);
        tracing::debug!(label, revision = self.store.config().revision, "Edit committed");
        self.notify(&ChangeKind::Edit(label.to_string()));
        Ok(out)
    }

    fn notify(&self, change: &ChangeKind) {
        let current = self.store.current();
        for (_, listener) in &self.listeners {
            listener.on_config_changed(&current, change);
        }
    }
}

impl Default for ConfiguratorSession {
    fn default() -> Self {
        Self::new(Arc::new(ModuleCatalog::standard()), SessionOptions::default())
    }
}
