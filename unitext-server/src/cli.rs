//! Command line output

use unitext::{Converter, Measurement};

/// Expressions shown by `--examples`
pub const EXAMPLES: [&str; 27] = [
    // Volume
    "1L & 23 ml",
    "1Liter + 100.87 milli in cm^3",
    ".5 gal in L",
    "1.5e3 ml in L",
    "1/2 gallon + 1/4 pint in cups",
    "two pints and a half cup in floz",
    "500ml - .25L",
    "1 leter in ml",
    "2 gallens in L",
    "one gallon and 2.5 litres in ml",
    "2l to ml",
    // Length
    "1 km in miles",
    "a foot and 5 inches in cm",
    "100 meters + 0.1km in ft",
    // Weight
    "1kg in lbs",
    "two pounds and 8 ounces in grams",
    "100g + .5kg",
    // Temperature
    "100 C in F",
    "212 f in C",
    "0c in k",
    // Area
    "100 sqft in m2",
    "2 acres in ha",
    // Speed
    "60 mph in kph",
    "100 km/h in knots",
    // Mixed systems
    "10 km / 2 hr in m/s",
    // Time
    "1 day in hours",
    "90 minutes to hours",
];

/// Shortest round-trip form; exponent notation for very small or large magnitudes
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && magnitude.is_finite() && !(1e-4..1e21).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// "<value> <symbol> (<name>)"
pub fn render(m: &Measurement) -> String {
    format!("{} {} ({})", format_value(m.value), m.unit_symbol, m.unit_name)
}

pub fn examples_table(converter: &Converter) -> String {
    let rule = format!("|{}|{}|\n", "-".repeat(36), "-".repeat(51));
    let mut out = String::new();

    out.push_str(&format!("| {:<34} | {:<49} |\n", "Expression", "Result"));
    out.push_str(&rule);
    for expression in EXAMPLES {
        let result = match converter.process(expression) {
            Ok(m) => render(&m),
            Err(e) => format!("Error: {}", e),
        };
        out.push_str(&format!("| {:<34} | {:<49} |\n", expression, result));
    }
    out.push_str(&rule);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(36.0), "36");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(-1.5), "-1.5");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(0.00001), "1e-5");
        assert_eq!(format_value(1e21), "1e21");
    }

    #[test]
    fn test_render() {
        let m = Measurement::new(100.0, "°C", "Celsius");
        assert_eq!(render(&m), "100 °C (Celsius)");
    }

    #[test]
    fn test_examples_table() {
        let table = examples_table(&Converter::new());
        assert!(table.contains("| 2l to ml"));
        assert!(table.contains("2000 mL (Milliliters)"));
        assert!(table.contains("Error: unknown unit: 'leter'. Did you mean 'liter'?"));
        // header, two rules, one row per example
        assert_eq!(table.lines().count(), EXAMPLES.len() + 3);
    }
}
