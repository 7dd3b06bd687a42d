//! Wizard navigation
//!
//! Four steps, walked in order: Dimensions, Layout, Finishes, Review.
//! Moving forward is gated on a pure predicate per step; a step that has been
//! reached once stays reachable through [`WizardState::go_to_step`]. Review is
//! not terminal: the user can always go back and revise.

use std::collections::BTreeSet;
use std::fmt;

use cabinetkit_core::units::Axis;
use serde::{Deserialize, Serialize};

use crate::model::{CabinetConfig, DimensionBounds, FinishField, SlotId};

/// A wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Dimensions = 0,
    Layout = 1,
    Finishes = 2,
    Review = 3,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Dimensions,
        WizardStep::Layout,
        WizardStep::Finishes,
        WizardStep::Review,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following step, `None` from Review
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, `None` from Dimensions
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dimensions => "Dimensions",
            Self::Layout => "Layout",
            Self::Finishes => "Finishes",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Something that keeps a step from passing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepIssue {
    /// An axis is unset or outside the catalog bounds
    DimensionOutOfRange {
        axis: Axis,
        value: u32,
        min: u32,
        max: u32,
    },
    /// A slot has neither a module nor an explicit empty marking
    UndecidedSlot { slot_id: SlotId, position: usize },
    /// A finish code has not been chosen
    MissingFinish(FinishField),
}

impl fmt::Display for StepIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionOutOfRange {
                axis,
                value,
                min,
                max,
            } => write!(f, "{} {}mm must be between {} and {}mm", axis, value, min, max),
            Self::UndecidedSlot { position, .. } => {
                write!(f, "Slot {} needs a module or must be marked empty", position + 1)
            }
            Self::MissingFinish(field) => write!(f, "Choose a {}", field),
        }
    }
}

/// Everything blocking `step` for the given configuration. Empty means the
/// step passes.
pub fn step_issues(
    step: WizardStep,
    config: &CabinetConfig,
    bounds: &DimensionBounds,
) -> Vec<StepIssue> {
    match step {
        WizardStep::Dimensions => Axis::ALL
            .into_iter()
            .filter_map(|axis| {
                let value = config.dimensions.get(axis);
                let range = bounds.axis(axis);
                (value == 0 || !range.contains(value)).then_some(StepIssue::DimensionOutOfRange {
                    axis,
                    value,
                    min: range.min,
                    max: range.max,
                })
            })
            .collect(),
        WizardStep::Layout => config
            .slots
            .iter()
            .filter(|slot| !slot.is_decided())
            .map(|slot| StepIssue::UndecidedSlot {
                slot_id: slot.id.clone(),
                position: slot.position,
            })
            .collect(),
        WizardStep::Finishes => config
            .finish
            .missing()
            .into_iter()
            .map(StepIssue::MissingFinish)
            .collect(),
        WizardStep::Review => Vec::new(),
    }
}

/// Whether the user may leave `step` going forward
pub fn can_proceed_from(step: WizardStep, config: &CabinetConfig, bounds: &DimensionBounds) -> bool {
    step_issues(step, config, bounds).is_empty()
}

/// Current step plus the set of steps reached so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current: WizardStep,
    visited: BTreeSet<WizardStep>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Dimensions,
            visited: BTreeSet::from([WizardStep::Dimensions]),
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    pub fn visited(&self) -> &BTreeSet<WizardStep> {
        &self.visited
    }

    pub fn is_visited(&self, step: WizardStep) -> bool {
        self.visited.contains(&step)
    }

    /// Advance one step if the current step passes. Returns whether the
    /// wizard moved; a blocked move changes nothing.
    pub fn next_step(&mut self, config: &CabinetConfig, bounds: &DimensionBounds) -> bool {
        let Some(next) = self.current.next() else {
            return false;
        };
        if !can_proceed_from(self.current, config, bounds) {
            tracing::debug!(step = %self.current, "Step blocked");
            return false;
        }
        self.current = next;
        self.visited.insert(next);
        true
    }

    /// Step back, stopping at Dimensions. Returns whether the wizard moved.
    pub fn prev_step(&mut self) -> bool {
        match self.current.prev() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Jump to step `index` if it has been visited. Returns whether the
    /// wizard moved.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        match WizardStep::from_index(index) {
            Some(step) if self.visited.contains(&step) => {
                self.current = step;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
