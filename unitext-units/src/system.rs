//! Unit systems - the compiled-in catalog
//!
//! Each system converts through one base unit. Systems are disjoint: a unit
//! belongs to exactly one of them.

use crate::Unit;

/// US fluid ounce in milliliters
const FL_OZ_ML: f64 = 29.5735295625;

/// A named collection of units sharing one base unit
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSystem {
    pub name: String,
    /// Canonical name of the base unit (e.g., "Milliliters")
    pub base: String,
    pub units: Vec<Unit>,
}

impl UnitSystem {
    pub fn new(name: &str, base: &str) -> Self {
        UnitSystem {
            name: name.to_string(),
            base: base.to_string(),
            units: Vec::new(),
        }
    }

    /// Builder: add a unit, tagging it with this system's name
    pub fn with_unit(mut self, mut unit: Unit) -> Self {
        unit.system = self.name.clone();
        self.units.push(unit);
        self
    }

    /// Get a unit by canonical name
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn volume() -> Self {
        UnitSystem::new("Volume", "Milliliters")
            .with_unit(Unit::linear("Milliliters", "mL", 1.0)
                .aliases(&["ml", "milliliter", "milliliters", "millilitre", "millilitres", "milli"]))
            .with_unit(Unit::linear("Liters", "L", 1000.0)
                .aliases(&["l", "liter", "liters", "litre", "litres"]))
            .with_unit(Unit::linear("Cubic meters", "m³", 1_000_000.0)
                .aliases(&["m3", "m^3", "cubicmeter", "cubicmeters"]))
            .with_unit(Unit::linear("Cubic centimeters", "cm³", 1.0)
                .aliases(&["cm3", "cm^3", "cubiccentimeter", "cubiccentimeters", "cc"]))
            .with_unit(Unit::linear("Fluid Ounce", "fl oz", FL_OZ_ML)
                .aliases(&["floz", "fluidounce", "fluidounces", "oz"]))
            .with_unit(Unit::linear("Cup", "c", FL_OZ_ML * 8.0)
                .aliases(&["cup", "cups"]))
            .with_unit(Unit::linear("Pint", "pt", FL_OZ_ML * 16.0)
                .aliases(&["pint", "pints"]))
            .with_unit(Unit::linear("Quart", "qt", FL_OZ_ML * 32.0)
                .aliases(&["quart", "quarts"]))
            .with_unit(Unit::linear("Gallon", "gal", FL_OZ_ML * 128.0)
                .aliases(&["gallon", "gallons"]))
            .with_unit(Unit::linear("Cubic feet", "ft³", 28316.8)
                .aliases(&["ft3", "ft^3", "cubicfoot", "cubicfeet"]))
            .with_unit(Unit::linear("Barrels", "bbl", 158987.3)
                .aliases(&["barrel", "barrels"]))
    }

    pub fn length() -> Self {
        UnitSystem::new("Length", "Meters")
            .with_unit(Unit::linear("Meters", "m", 1.0)
                .aliases(&["m", "meter", "meters", "metre", "metres"]))
            .with_unit(Unit::linear("Kilometers", "km", 1000.0)
                .aliases(&["km", "kilometer", "kilometers", "kilometre", "kilometres"]))
            .with_unit(Unit::linear("Centimeters", "cm", 0.01)
                .aliases(&["cm", "centimeter", "centimeters", "centimetre", "centimetres"]))
            .with_unit(Unit::linear("Millimeters", "mm", 0.001)
                .aliases(&["mm", "millimeter", "millimeters", "millimetre", "millimetres"]))
            .with_unit(Unit::linear("Inches", "in", 0.0254)
                .aliases(&["in", "inch", "inches"]))
            .with_unit(Unit::linear("Feet", "ft", 0.3048)
                .aliases(&["ft", "foot", "feet"]))
            .with_unit(Unit::linear("Yards", "yd", 0.9144)
                .aliases(&["yd", "yard", "yards"]))
            .with_unit(Unit::linear("Miles", "mi", 1609.34)
                .aliases(&["mi", "mile", "miles"]))
    }

    pub fn weight() -> Self {
        UnitSystem::new("Weight", "Grams")
            .with_unit(Unit::linear("Grams", "g", 1.0)
                .aliases(&["g", "gram", "grams"]))
            .with_unit(Unit::linear("Kilograms", "kg", 1000.0)
                .aliases(&["kg", "kilogram", "kilograms"]))
            .with_unit(Unit::linear("Milligrams", "mg", 0.001)
                .aliases(&["mg", "milligram", "milligrams"]))
            .with_unit(Unit::linear("Pounds", "lb", 453.592)
                .aliases(&["lb", "lbs", "pound", "pounds"]))
            .with_unit(Unit::linear("Ounces", "oz", 28.3495)
                .aliases(&["ounce", "ounces"]))
    }

    pub fn temperature() -> Self {
        UnitSystem::new("Temperature", "Celsius")
            .with_unit(Unit::linear("Celsius", "°C", 1.0)
                .aliases(&["c", "celsius"]))
            .with_unit(Unit::affine("Fahrenheit", "°F", 32.0, 5.0 / 9.0)
                .aliases(&["f", "fahrenheit"]))
            .with_unit(Unit::affine("Kelvin", "K", 273.15, 1.0)
                .aliases(&["k", "kelvin"]))
    }

    pub fn area() -> Self {
        UnitSystem::new("Area", "Square Meters")
            .with_unit(Unit::linear("Square Meters", "m²", 1.0)
                .aliases(&["m2", "sqm", "squaremeter", "squaremeters"]))
            .with_unit(Unit::linear("Square Kilometers", "km²", 1_000_000.0)
                .aliases(&["km2", "sqkm", "squarekilometer", "squarekilometers"]))
            .with_unit(Unit::linear("Hectares", "ha", 10000.0)
                .aliases(&["ha", "hectare", "hectares"]))
            .with_unit(Unit::linear("Square Miles", "mi²", 2589988.11)
                .aliases(&["mi2", "sqmi", "squaremile", "squaremiles"]))
            .with_unit(Unit::linear("Acres", "ac", 4046.86)
                .aliases(&["ac", "acre", "acres"]))
            .with_unit(Unit::linear("Square Yards", "yd²", 0.836127)
                .aliases(&["yd2", "sqyd", "squareyard", "squareyards"]))
            .with_unit(Unit::linear("Square Feet", "ft²", 0.092903)
                .aliases(&["ft2", "sqft", "squarefoot", "squarefeet"]))
            .with_unit(Unit::linear("Square Inches", "in²", 0.00064516)
                .aliases(&["in2", "sqin", "squareinch", "squareinches"]))
    }

    pub fn speed() -> Self {
        UnitSystem::new("Speed", "Meters per Second")
            .with_unit(Unit::linear("Meters per Second", "m/s", 1.0)
                .aliases(&["mps", "meterspersecond"]))
            .with_unit(Unit::linear("Kilometers per Hour", "km/h", 0.277778)
                .aliases(&["kph", "kmh", "kilometersperhour"]))
            .with_unit(Unit::linear("Miles per Hour", "mph", 0.44704)
                .aliases(&["mph", "milesperhour"]))
            .with_unit(Unit::linear("Knots", "kt", 0.514444)
                .aliases(&["kt", "knots"]))
            .with_unit(Unit::linear("Feet per Second", "ft/s", 0.3048)
                .aliases(&["fps", "feetpersecond"]))
    }

    pub fn time() -> Self {
        UnitSystem::new("Time", "Seconds")
            .with_unit(Unit::linear("Seconds", "s", 1.0)
                .aliases(&["s", "sec", "second", "seconds"]))
            .with_unit(Unit::linear("Minutes", "min", 60.0)
                .aliases(&["min", "minute", "minutes"]))
            .with_unit(Unit::linear("Hours", "hr", 3600.0)
                .aliases(&["h", "hr", "hour", "hours"]))
            .with_unit(Unit::linear("Days", "d", 86400.0)
                .aliases(&["d", "day", "days"]))
            .with_unit(Unit::linear("Years", "yr", 31_536_000.0)
                .aliases(&["y", "yr", "year", "years"]))
    }
}

/// All seed systems, in index order.
///
/// Order matters: where two systems claim the same alias the later one wins
/// (`oz` resolves to Weight, `c` to Temperature).
pub fn catalog() -> Vec<UnitSystem> {
    vec![
        UnitSystem::volume(),
        UnitSystem::length(),
        UnitSystem::weight(),
        UnitSystem::temperature(),
        UnitSystem::area(),
        UnitSystem::speed(),
        UnitSystem::time(),
    ]
}
