//! Input normalization
//!
//! Rewrites free-form text into the lexical form the scanner expects:
//! lowercase, spelled-out numbers as digits, simple fractions as decimals.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static NUMBER_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:a|an|one|two|three|four|five|six|seven|eight|nine|ten|half)\b")
        .expect("number word pattern is valid")
});

static FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*/\s*([0-9]+)").expect("fraction pattern is valid")
});

/// Digit spelling of a number word
fn number_word(word: &str) -> &'static str {
    match word {
        "a" | "an" | "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        "half" => "0.5",
        _ => "",
    }
}

/// Render `int/int` as a fixed-point decimal; a zero denominator gives "0"
fn fraction(caps: &Captures<'_>) -> String {
    let num: f64 = caps[1].parse().unwrap_or(0.0);
    let den: f64 = caps[2].parse().unwrap_or(0.0);
    if den == 0.0 {
        return "0".to_string();
    }
    format!("{:.6}", num / den)
}

/// Normalize raw input. Pure and deterministic.
pub fn normalize(raw: &str) -> String {
    let clean = raw.to_lowercase();
    let clean = NUMBER_WORDS.replace_all(&clean, |caps: &Captures<'_>| number_word(&caps[0]));
    FRACTION.replace_all(&clean, fraction).into_owned()
}
