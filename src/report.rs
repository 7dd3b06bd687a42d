//! Plain-text reports for the command line
//!
//! Presentation only: everything here reads a configuration and its derived
//! values and never changes them.

use std::fmt;

use cabinetkit_configurator::model::{CabinetConfig, DimensionBounds, SlotContent};
use cabinetkit_configurator::pricing::PriceBreakdown;
use cabinetkit_configurator::wizard::{step_issues, WizardStep};
use cabinetkit_core::units::{format_cents, format_length, MeasurementSystem};

/// Itemised quote with the run summary and any lookup gaps
pub fn render_quote(
    name: &str,
    config: &CabinetConfig,
    breakdown: &PriceBreakdown,
    system: MeasurementSystem,
) -> String {
    QuoteReport {
        name,
        config,
        breakdown,
        system,
    }
    .to_string()
}

/// Slot listing plus what still blocks each wizard step
pub fn render_check(
    config: &CabinetConfig,
    bounds: &DimensionBounds,
    system: MeasurementSystem,
) -> String {
    CheckReport {
        config,
        bounds,
        system,
    }
    .to_string()
}

/// Quote layout, writable to any formatter
pub struct QuoteReport<'a> {
    pub name: &'a str,
    pub config: &'a CabinetConfig,
    pub breakdown: &'a PriceBreakdown,
    pub system: MeasurementSystem,
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = &self.config.dimensions;
        let breakdown = self.breakdown;
        writeln!(f, "{}", self.name)?;
        writeln!(
            f,
            "  {} x {} x {}",
            format_length(dims.width, self.system),
            format_length(dims.height, self.system),
            format_length(dims.depth, self.system)
        )?;
        writeln!(f)?;

        for item in &breakdown.line_items {
            writeln!(f, "  {:<32} {:>12}", item.label, format_cents(item.amount))?;
        }
        writeln!(f, "  {:<32} {:>12}", "Total", format_cents(breakdown.total))?;
        writeln!(
            f,
            "  {:<32} {:>12}",
            format!("Range (±{}%)", breakdown.variance_percent),
            format!(
                "{} - {}",
                format_cents(breakdown.low()),
                format_cents(breakdown.high())
            )
        )?;

        if breakdown.has_gaps() {
            writeln!(f)?;
            writeln!(f, "  Not priced (no catalog record):")?;
            for gap in &breakdown.gaps {
                writeln!(f, "    {} {}", gap.kind, gap.code)?;
            }
        }
        Ok(())
    }
}

/// Wizard readiness layout, writable to any formatter
pub struct CheckReport<'a> {
    pub config: &'a CabinetConfig,
    pub bounds: &'a DimensionBounds,
    pub system: MeasurementSystem,
}

impl fmt::Display for CheckReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.config.slots {
            let content = match &slot.content {
                SlotContent::Undecided => "undecided".to_string(),
                SlotContent::Empty => "empty".to_string(),
                SlotContent::Module(module) => module.module_type.to_string(),
            };
            writeln!(
                f,
                "  #{:<3} {:<9} {:>10}  {}",
                slot.position + 1,
                slot.category,
                format_length(slot.width, self.system),
                content
            )?;
        }

        for step in WizardStep::ALL {
            let issues = step_issues(step, self.config, self.bounds);
            if issues.is_empty() {
                writeln!(f, "{}: ok", step)?;
            } else {
                writeln!(f, "{}:", step)?;
                for issue in issues {
                    writeln!(f, "  - {}", issue)?;
                }
            }
        }
        Ok(())
    }
}
