//! Evaluator
//!
//! Converts every component to its system's base unit, sums, and expresses
//! the sum in the target unit.

use unitext_core::{Error, Measurement, Result};
use unitext_units::Unit;

/// A resolved, signed component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component<'a> {
    pub value: f64,
    pub unit: &'a Unit,
}

/// Explicit target if any, else the unit of the last component
pub fn infer_target<'a>(components: &[Component<'a>], explicit: Option<&'a Unit>) -> Option<&'a Unit> {
    explicit.or_else(|| components.last().map(|c| c.unit))
}

pub struct Evaluator {
    /// Reject components whose system differs from the target's
    strict_systems: bool,
}

impl Evaluator {
    pub fn new() -> Self {
        Self { strict_systems: true }
    }

    pub fn with_strict_systems(mut self, strict: bool) -> Self {
        self.strict_systems = strict;
        self
    }

    pub fn evaluate(&self, components: &[Component<'_>], target: &Unit) -> Result<Measurement> {
        if self.strict_systems {
            if let Some(c) = components.iter().find(|c| !c.unit.is_compatible(target)) {
                return Err(Error::DimensionMismatch {
                    unit: c.unit.symbol.clone(),
                    unit_system: c.unit.system.clone(),
                    target: target.symbol.clone(),
                    target_system: target.system.clone(),
                });
            }
        }

        // Each unit applies its own rule, so affine units sum correctly
        let total: f64 = components.iter().map(|c| c.unit.to_base(c.value)).sum();

        Ok(Measurement::new(target.from_base(total), &target.symbol, &target.name))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
