//! # CabinetKit Configurator
//!
//! The cabinet configuration state engine: the in-memory model of a cabinet
//! run, its validated wizard progression, undo/redo history and live pricing.
//!
//! ## Core Components
//!
//! - **Model**: dimensions, ordered slots, module assignments, finishes
//! - **Store**: the single writer of the configuration; atomic mutations
//! - **History**: bounded two-stack undo/redo over immutable snapshots
//! - **Wizard**: Dimensions, Layout, Finishes, Review, gated per step
//! - **Pricing**: pure, itemised quote in integer cents with a variance band
//! - **Session**: one explicitly constructed handle wiring the above together
//!
//! ## Architecture
//!
//! ```text
//! UI event
//!   └── ConfiguratorSession
//!         ├── ConfigurationStore (mutate, publish new Arc<CabinetConfig>)
//!         ├── HistoryLog         (commit prior snapshot)
//!         ├── listeners          (notified after commit)
//!         ├── WizardState        (predicates read the config)
//!         └── pricing::quote     (derived on demand)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cabinetkit_configurator::{ConfiguratorSession, SessionOptions};
//! use cabinetkit_core::{ModuleCatalog, ModuleType, PriceTables};
//!
//! let mut session = ConfiguratorSession::new(
//!     Arc::new(ModuleCatalog::standard()),
//!     SessionOptions::default(),
//! );
//! let slot = session.add_module_slot(ModuleType::SinkBase).unwrap();
//! session.clear_slot(&slot).unwrap();
//! assert!(session.undo());
//!
//! let quote = session.quote(&PriceTables::new());
//! assert_eq!(quote.total, 0);
//! ```

pub mod history;
pub mod model;
pub mod pricing;
pub mod serialization;
pub mod session;
pub mod store;
pub mod wizard;

pub use history::{HistoryEntry, HistoryLog, DEFAULT_HISTORY_DEPTH};
pub use model::{
    AxisBounds, CabinetConfig, CabinetDimensions, DimensionBounds, FinishConfig, FinishField,
    HingeSide, ModuleConfig, ModuleOptions, Slot, SlotContent, SlotId, MAX_SHELVES,
};
pub use pricing::{
    quote, LineItem, LookupGap, LookupGapKind, PriceBreakdown, DEFAULT_VARIANCE_PERCENT,
};
pub use serialization::{ConfigSnapshot, SNAPSHOT_FORMAT_VERSION};
pub use session::{ChangeKind, ConfigListener, ConfiguratorSession, ListenerHandle, SessionOptions};
pub use store::ConfigurationStore;
pub use wizard::{can_proceed_from, step_issues, StepIssue, WizardState, WizardStep};
