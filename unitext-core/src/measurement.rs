//! Result of a conversion

use std::fmt;
use serde::{Deserialize, Serialize};

/// A value expressed in a target unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    /// Display symbol of the target unit (e.g. "mL", "°C")
    pub unit_symbol: String,
    /// Canonical name of the target unit (e.g. "Milliliters")
    pub unit_name: String,
}

impl Measurement {
    pub fn new(value: f64, unit_symbol: impl Into<String>, unit_name: impl Into<String>) -> Self {
        Self {
            value,
            unit_symbol: unit_symbol.into(),
            unit_name: unit_name.into(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.value, self.unit_symbol, self.unit_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Measurement::new(2.5, "L", "Liters");
        assert_eq!(m.to_string(), "2.5 L (Liters)");
    }

    #[test]
    fn test_serialize_field_names() {
        let m = Measurement::new(100.0, "°C", "Celsius");
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["value"], 100.0);
        assert_eq!(json["unit_symbol"], "°C");
        assert_eq!(json["unit_name"], "Celsius");
    }
}
