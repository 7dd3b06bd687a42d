//! Units and money
//!
//! Dimensions are whole millimetres and money is whole cents throughout the
//! configurator. Conversion to inches or to a currency string only happens at
//! presentation time through the helpers in this module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount of money in minor currency units (cents).
pub type Cents = u64;

/// Cabinet dimension axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Run width (left to right)
    Width,
    /// Cabinet height
    Height,
    /// Cabinet depth (front to back)
    Depth,
}

impl Axis {
    /// All axes in display order
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "Width"),
            Self::Height => write!(f, "Height"),
            Self::Depth => write!(f, "Depth"),
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "width" | "w" => Ok(Self::Width),
            "height" | "h" => Ok(Self::Height),
            "depth" | "d" => Ok(Self::Depth),
            _ => Err(format!("Unknown axis: {}", s)),
        }
    }
}

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a length for display
///
/// * `value_mm` - Value in millimetres
/// * `system` - Target measurement system
pub fn format_length(value_mm: u32, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{} mm", value_mm),
        MeasurementSystem::Imperial => {
            let inches = f64::from(value_mm) / 25.4;
            format!("{:.2} in", inches)
        }
    }
}

/// Format cents as a dollar string with thousands separators.
///
/// `format_cents(147_500)` yields `"$1,475.00"`.
pub fn format_cents(cents: Cents) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}.{:02}", grouped, remainder)
}
