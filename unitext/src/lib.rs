//! unitext - Natural-language unit conversion
//!
//! ```text
//! "two pints and a half cup in floz"  ->  36 fl oz (Fluid Ounce)
//! ```
//!
//! Pipeline: normalize -> scan -> resolve -> evaluate.

mod normalize;
mod scanner;
mod eval;

pub use normalize::normalize;
pub use scanner::{scan, Scan, RawComponent, Sign};
pub use eval::{Component, Evaluator, infer_target};

pub use unitext_core::{Error, Measurement, Result};
pub use unitext_units::{UnitIndex, UnitSystem, Unit};

/// Main conversion engine.
///
/// Holds an immutable alias index; share it by reference (or `Arc`) across
/// threads, `process` never mutates it.
#[derive(Debug, Clone)]
pub struct Converter {
    index: UnitIndex,
    strict_systems: bool,
}

impl Converter {
    /// Engine over the full seed catalog
    pub fn new() -> Self {
        Self::with_index(UnitIndex::standard())
    }

    /// Engine over a custom set of systems
    pub fn from_systems(systems: Vec<UnitSystem>) -> Self {
        Self::with_index(UnitIndex::new(systems))
    }

    pub fn with_index(index: UnitIndex) -> Self {
        Self {
            index,
            strict_systems: true,
        }
    }

    /// Allow components and target from different systems (off by default)
    pub fn with_strict_systems(mut self, strict: bool) -> Self {
        self.strict_systems = strict;
        self
    }

    pub fn index(&self) -> &UnitIndex {
        &self.index
    }

    /// Interpret `input` and express it in the requested (or inferred) unit
    pub fn process(&self, input: &str) -> Result<Measurement> {
        let text = normalize(input);
        let scan = scan(&text, input)?;

        let explicit = scan.target.map(|t| self.index.resolve(t)).transpose()?;

        let components = scan.components
            .iter()
            .map(|raw| self.resolve_component(raw))
            .collect::<Result<Vec<_>>>()?;

        let target = infer_target(&components, explicit)
            .ok_or_else(|| Error::empty_input(input))?;

        Evaluator::new()
            .with_strict_systems(self.strict_systems)
            .evaluate(&components, target)
    }

    fn resolve_component(&self, raw: &RawComponent<'_>) -> Result<Component<'_>> {
        let unit = self.index.resolve(raw.unit)?;

        let value = match raw.number {
            Some(text) => text.parse::<f64>().map_err(|_| Error::invalid_number(text))?,
            None => 1.0,
        };

        let value = match raw.sign {
            Sign::Minus => -value,
            Sign::Plus => value,
        };

        Ok(Component { value, unit })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
