//! Component scanner
//!
//! Splits normalized text into an optional target clause ("... in cups") and
//! an ordered list of signed (number, unit) components.
//!
//! Grammar, per component:
//!   [ws] [sign] [ws] [number] [ws] unit
//!
//! Anything that cannot start a component is skipped one character at a time.

use unitext_core::{Error, Result};

/// Words that join components and are never units
const CONJUNCTIONS: [&str; 2] = ["and", "&"];

/// Words that introduce the target clause
const TARGET_KEYWORDS: [&str; 2] = ["in", "to"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// One scanned component, before unit resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComponent<'a> {
    pub sign: Sign,
    /// Numeric literal; `None` means an implicit 1
    pub number: Option<&'a str>,
    pub unit: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    /// Unit phrase of the trailing target clause
    pub target: Option<&'a str>,
    pub components: Vec<RawComponent<'a>>,
}

/// Scan normalized text.
///
/// `original` is the raw input, only used to report an empty scan.
pub fn scan<'a>(text: &'a str, original: &str) -> Result<Scan<'a>> {
    let (body, target) = split_target(text);
    let components = scan_components(body);

    if components.is_empty() {
        return Err(Error::empty_input(original));
    }

    Ok(Scan { target, components })
}

// ============ target clause ============

fn is_target_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '^' | '²' | '³' | '/' | '°')
}

/// Split off the rightmost "<ws>in<ws><phrase>" (or "to") clause.
///
/// The phrase can only contain target characters, so the keyword is searched
/// for inside the trailing run of them.
fn split_target(text: &str) -> (&str, Option<&str>) {
    let trimmed = text.trim_end();
    let run_start = trimmed
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_target_char(c))
        .map_or(0, |(i, c)| i + c.len_utf8());

    for (offset, _) in trimmed[run_start..].char_indices().rev() {
        let pos = run_start + offset;
        let Some(keyword) = TARGET_KEYWORDS.iter().find(|k| trimmed[pos..].starts_with(**k)) else {
            continue;
        };

        let before = trimmed[..pos].chars().next_back();
        let rest = &trimmed[pos + keyword.len()..];
        // `trimmed` ends on a non-space, so a non-empty rest also holds a phrase
        if !before.is_some_and(char::is_whitespace) || !rest.starts_with(char::is_whitespace) {
            continue;
        }

        return (trimmed[..pos].trim_end(), Some(rest.trim_start()));
    }

    (text, None)
}

// ============ components ============

fn scan_components(text: &str) -> Vec<RawComponent<'_>> {
    let mut components = Vec::new();
    let mut pos = 0;
    // Sign of a numeral that had no unit ("- 1 0.5 cup"), carried to the next component
    let mut pending_sign = None;

    while pos < text.len() {
        match match_component(text, pos) {
            Attempt::Matched(mut component, end) => {
                if let Some(sign) = pending_sign.take() {
                    if !has_sign_at(text, pos) {
                        component.sign = sign;
                    }
                }
                if !CONJUNCTIONS.contains(&component.unit) {
                    components.push(component);
                }
                pos = end;
            }
            Attempt::Dangling(sign, end) => {
                pending_sign = Some(sign);
                pos = end;
            }
            Attempt::Failed => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    components
}

enum Attempt<'a> {
    /// A component and the byte offset just past it
    Matched(RawComponent<'a>, usize),
    /// An explicitly signed numeral with no unit after it
    Dangling(Sign, usize),
    Failed,
}

fn match_component(text: &str, start: usize) -> Attempt<'_> {
    let mut pos = skip_ws(text, start);

    let sign = match text[pos..].chars().next() {
        Some('+') => Some(Sign::Plus),
        Some('-') => Some(Sign::Minus),
        _ => None,
    };
    if sign.is_some() {
        pos = skip_ws(text, pos + 1);
    }

    let number_start = pos;
    let num_end = number_end(text, pos, true);

    let found = match num_end {
        Some(end) => unit_at(text, skip_ws(text, end))
            .map(|unit| (Some(&text[number_start..end]), unit))
            .or_else(|| {
                // "2e5 7": give back the exponent and try again
                let short = number_end_without_exponent(text, number_start, end)?;
                unit_at(text, skip_ws(text, short)).map(|unit| (Some(&text[number_start..short]), unit))
            }),
        None => unit_at(text, pos).map(|unit| (None, unit)),
    };

    match (found, sign, num_end) {
        (Some((number, (unit, end))), _, _) => Attempt::Matched(
            RawComponent {
                sign: sign.unwrap_or(Sign::Plus),
                number,
                unit,
            },
            end,
        ),
        (None, Some(sign), Some(end)) => Attempt::Dangling(sign, end),
        _ => Attempt::Failed,
    }
}

fn has_sign_at(text: &str, start: usize) -> bool {
    let pos = skip_ws(text, start);
    text[pos..].starts_with(['+', '-'])
}

fn skip_ws(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| pos + i)
}

fn digits_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// End of a numeric literal: `digits[.digits*] | .digits`, plus an optional
/// exponent when at least one exponent digit follows
fn number_end(text: &str, pos: usize, with_exponent: bool) -> Option<usize> {
    let bytes = text.as_bytes();
    let at = |i: usize| bytes.get(i).copied();

    let mut end = match at(pos) {
        Some(b) if b.is_ascii_digit() => {
            let end = digits_end(bytes, pos);
            if at(end) == Some(b'.') {
                digits_end(bytes, end + 1)
            } else {
                end
            }
        }
        Some(b'.') if at(pos + 1).is_some_and(|b| b.is_ascii_digit()) => digits_end(bytes, pos + 1),
        _ => return None,
    };

    if with_exponent && matches!(at(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(at(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if at(exp).is_some_and(|b| b.is_ascii_digit()) {
            end = digits_end(bytes, exp);
        }
    }

    Some(end)
}

fn number_end_without_exponent(text: &str, pos: usize, full_end: usize) -> Option<usize> {
    number_end(text, pos, false).filter(|&end| end < full_end)
}

fn is_unit_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '^' | '²' | '³')
}

/// Unit token at `pos`: a lowercase letter (optionally after `°`), then letters,
/// digits, `^`, `²`, `³`. A `/` directly between a token and a letter is kept
/// ("km/h", "m/s").
fn unit_at(text: &str, pos: usize) -> Option<(&str, usize)> {
    let mut chars = text[pos..].char_indices().peekable();
    chars.next_if(|&(_, c)| c == '°');
    match chars.next() {
        Some((_, c)) if c.is_ascii_lowercase() => {}
        _ => return None,
    }

    let mut end = text.len();
    while let Some((i, c)) = chars.next() {
        if is_unit_char(c) {
            continue;
        }
        if c == '/' && chars.peek().is_some_and(|(_, next)| next.is_ascii_lowercase()) {
            continue;
        }
        end = pos + i;
        break;
    }

    Some((&text[pos..end], end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component<'a>(sign: Sign, number: Option<&'a str>, unit: &'a str) -> RawComponent<'a> {
        RawComponent { sign, number, unit }
    }

    #[test]
    fn test_target_clause() {
        let scan = scan("1 km in miles", "").unwrap();
        assert_eq!(scan.target, Some("miles"));
        assert_eq!(scan.components, vec![component(Sign::Plus, Some("1"), "km")]);
    }

    #[test]
    fn test_target_clause_with_spaces_and_slash() {
        assert_eq!(split_target("5 oz in fl oz"), ("5 oz", Some("fl oz")));
        assert_eq!(split_target("60 mph in m/s"), ("60 mph", Some("m/s")));
        assert_eq!(split_target("2l to ml"), ("2l", Some("ml")));
    }

    #[test]
    fn test_target_clause_rightmost() {
        assert_eq!(split_target("12 in in ft"), ("12 in", Some("ft")));
        assert_eq!(split_target("12 cm in in"), ("12 cm", Some("in")));
    }

    #[test]
    fn test_no_target_clause() {
        assert_eq!(split_target("5 in"), ("5 in", None));
        assert_eq!(split_target("1 l + 500 ml"), ("1 l + 500 ml", None));
        // "+" is not allowed in a target phrase
        assert_eq!(split_target("5 in + 3 cm"), ("5 in + 3 cm", None));
    }

    #[test]
    fn test_target_clause_degree_sign() {
        assert_eq!(split_target("212 °f in °c"), ("212 °f", Some("°c")));
        assert_eq!(split_target("1 km in miles   "), ("1 km", Some("miles")));
    }

    #[test]
    fn test_long_keyword_run_without_target() {
        let text = format!("{}in +", "in ".repeat(20_000));
        let started = std::time::Instant::now();
        assert_eq!(split_target(&text), (text.as_str(), None));
        let scan = scan(&text, "").unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
        assert_eq!(scan.target, None);
        assert_eq!(scan.components.len(), 20_001);
    }

    #[test]
    fn test_degree_unit_tokens() {
        let scan = scan("212 °f + 1 °", "").unwrap();
        assert_eq!(scan.components, vec![component(Sign::Plus, Some("212"), "°f")]);
    }

    #[test]
    fn test_signs_and_numbers() {
        let scan = scan("500ml - .25l", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("500"), "ml"),
            component(Sign::Minus, Some(".25"), "l"),
        ]);
    }

    #[test]
    fn test_exponent() {
        let scan = scan("1.5e3 ml", "").unwrap();
        assert_eq!(scan.components, vec![component(Sign::Plus, Some("1.5e3"), "ml")]);
    }

    #[test]
    fn test_exponent_given_back() {
        let scan = scan("2e5 7", "").unwrap();
        assert_eq!(scan.components, vec![component(Sign::Plus, Some("2"), "e5")]);
    }

    #[test]
    fn test_implicit_value() {
        let scan = scan("foot", "").unwrap();
        assert_eq!(scan.components, vec![component(Sign::Plus, None, "foot")]);
    }

    #[test]
    fn test_conjunctions_dropped() {
        let scan = scan("2 pints and 1 0.5 cup", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("2"), "pints"),
            component(Sign::Plus, Some("0.5"), "cup"),
        ]);
    }

    #[test]
    fn test_ampersand_skipped() {
        let scan = scan("1l & 23 ml", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("1"), "l"),
            component(Sign::Plus, Some("23"), "ml"),
        ]);
    }

    #[test]
    fn test_dangling_sign_carries_over() {
        let scan = scan("1 cup - 1 0.5 cup", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("1"), "cup"),
            component(Sign::Minus, Some("0.5"), "cup"),
        ]);
    }

    #[test]
    fn test_compound_unit_tokens() {
        let scan = scan("100 km/h", "").unwrap();
        assert_eq!(scan.components, vec![component(Sign::Plus, Some("100"), "km/h")]);

        let scan = super::scan("10 km / 2 hr", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("10"), "km"),
            component(Sign::Plus, Some("2"), "hr"),
        ]);
    }

    #[test]
    fn test_superscripts_and_caret() {
        let scan = scan("5 m² + 2 cm^3", "").unwrap();
        assert_eq!(scan.components, vec![
            component(Sign::Plus, Some("5"), "m²"),
            component(Sign::Plus, Some("2"), "cm^3"),
        ]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan("", "").unwrap_err(), Error::empty_input(""));
        assert_eq!(scan("and &", "And &").unwrap_err(), Error::empty_input("And &"));
        assert_eq!(scan("42", "42").unwrap_err(), Error::empty_input("42"));
    }
}
