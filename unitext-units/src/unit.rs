//! Unit representation with conversion rules

use std::fmt;

/// How a unit relates to the base unit of its system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// base = value * factor
    Linear { factor: f64 },
    /// base = (value - offset) * scale
    Affine { offset: f64, scale: f64 },
}

impl Conversion {
    pub const IDENTITY: Conversion = Conversion::Linear { factor: 1.0 };

    /// Convert a value in this unit to the system's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { offset, scale } => (value - offset) * scale,
        }
    }

    /// Convert a value in the system's base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { offset, scale } => value / scale + offset,
        }
    }
}

/// A named unit belonging to one unit system
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Canonical name (e.g., "Milliliters")
    pub name: String,
    /// Display symbol (e.g., "mL")
    pub symbol: String,
    /// Lowercase aliases (e.g., "ml", "milliliter")
    pub aliases: Vec<String>,
    pub conversion: Conversion,
    /// Name of the owning system, filled in by `UnitSystem::with_unit`
    pub system: String,
}

impl Unit {
    /// Create a unit with proportional conversion
    pub fn linear(name: &str, symbol: &str, factor: f64) -> Self {
        Self::with_conversion(name, symbol, Conversion::Linear { factor })
    }

    /// Create a unit with offset conversion (temperature)
    pub fn affine(name: &str, symbol: &str, offset: f64, scale: f64) -> Self {
        Self::with_conversion(name, symbol, Conversion::Affine { offset, scale })
    }

    fn with_conversion(name: &str, symbol: &str, conversion: Conversion) -> Self {
        Unit {
            name: name.to_string(),
            symbol: symbol.to_string(),
            aliases: Vec::new(),
            conversion,
            system: String::new(),
        }
    }

    /// Builder: attach aliases (stored lowercase)
    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_lowercase()));
        self
    }

    pub fn to_base(&self, value: f64) -> f64 {
        self.conversion.to_base(value)
    }

    pub fn from_base(&self, value: f64) -> f64 {
        self.conversion.from_base(value)
    }

    /// Check if two units live in the same system
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.system == other.system
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_round_trip() {
        let liter = Unit::linear("Liters", "L", 1000.0);
        assert!(close(liter.to_base(2.5), 2500.0));
        assert!(close(liter.from_base(2500.0), 2.5));
    }

    #[test]
    fn test_affine_fahrenheit() {
        let f = Unit::affine("Fahrenheit", "°F", 32.0, 5.0 / 9.0);
        assert!(close(f.to_base(212.0), 100.0));
        assert!(close(f.to_base(32.0), 0.0));
        assert!(close(f.from_base(100.0), 212.0));
    }

    #[test]
    fn test_affine_kelvin() {
        let k = Unit::affine("Kelvin", "K", 273.15, 1.0);
        assert!(close(k.from_base(0.0), 273.15));
        assert!(close(k.to_base(273.15), 0.0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Conversion::IDENTITY.to_base(42.0), 42.0);
        assert_eq!(Conversion::IDENTITY.from_base(42.0), 42.0);
    }

    #[test]
    fn test_aliases_lowercased() {
        let unit = Unit::linear("Liters", "L", 1000.0).aliases(&["L", "Liter"]);
        assert_eq!(unit.aliases, vec!["l", "liter"]);
    }
}
