//! Error handling for CabinetKit
//!
//! Provides the error taxonomy shared by every layer of the configurator:
//! - Validation errors (out-of-range or malformed mutation input)
//! - Assignment errors (module/slot category mismatch, unknown slots)
//! - Catalog errors (loading price tables)
//!
//! Missing price records are deliberately absent from this list: a lookup gap
//! is priced as zero and reported on the breakdown, never raised.
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::data::modules::Category;
use crate::units::Axis;
use thiserror::Error;

/// Validation error type
///
/// Raised when a mutation receives out-of-range or malformed input. The
/// mutation is not applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A dimension axis lies outside the catalog bounds
    #[error("{axis} of {value}mm is outside the allowed range {min}-{max}mm")]
    DimensionOutOfRange {
        /// The offending axis.
        axis: Axis,
        /// The rejected value in millimetres.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// A dimension was supplied as a fractional, negative, or non-finite number
    #[error("{axis} must be a whole, non-negative number of millimetres, got {value}")]
    NonIntegerDimension {
        /// The offending axis.
        axis: Axis,
        /// The raw value that was supplied.
        value: f64,
    },

    /// A slot was given a zero width
    #[error("Slot width must be greater than zero")]
    ZeroWidth,

    /// The slots of one row would be wider than the run
    #[error("{category} row spans {span}mm but the run is only {run_width}mm wide")]
    RowOverflow {
        /// The row that overflows.
        category: Category,
        /// Total width of the row after the change.
        span: u32,
        /// Run width from the cabinet dimensions.
        run_width: u32,
    },

    /// A module option is not valid for the module it was applied to
    #[error("Invalid module option: {reason}")]
    InvalidOption {
        /// Why the option was rejected.
        reason: String,
    },

    /// A slot position lies outside the run
    #[error("Position {position} is out of range for a run of {len} slots")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// Number of slots in the run.
        len: usize,
    },

    /// A persisted configuration violates an invariant
    #[error("Invalid configuration snapshot: {reason}")]
    InvalidSnapshot {
        /// The invariant that failed.
        reason: String,
    },
}

/// Assignment error type
///
/// Raised by module assignment and slot lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// Module category differs from the slot category
    #[error("Module '{module}' is a {module_category} module and cannot go in {slot_category} slot {slot_id}")]
    CategoryMismatch {
        /// Target slot.
        slot_id: String,
        /// Category of the target slot.
        slot_category: Category,
        /// Code of the rejected module.
        module: String,
        /// Category of the rejected module.
        module_category: Category,
    },

    /// No slot with the given identity exists
    #[error("Unknown slot: {slot_id}")]
    UnknownSlot {
        /// The identity that was not found.
        slot_id: String,
    },
}

/// Catalog error type
///
/// Represents errors raised while loading catalog price tables.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The price table document is not valid JSON for the expected schema
    #[error("Invalid price table document: {0}")]
    Json(#[from] serde_json::Error),

    /// The price table file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Two records in one table share a code
    #[error("Duplicate {table} code '{code}'")]
    DuplicateCode {
        /// Table holding the duplicate.
        table: &'static str,
        /// The duplicated code.
        code: String,
    },
}

/// Main error type for CabinetKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Assignment error
    #[error(transparent)]
    Assignment(#[from] AssignmentError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl Error {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an assignment error
    pub fn is_assignment_error(&self) -> bool {
        matches!(self, Error::Assignment(_))
    }

    /// Check if this is a catalog error
    pub fn is_catalog_error(&self) -> bool {
        matches!(self, Error::Catalog(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
