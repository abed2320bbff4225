//! "Did you mean" suggestions for unknown unit tokens

/// Largest edit distance still offered as a suggestion
pub const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Aliases shorter than this (in chars) are never suggested
pub const MIN_SUGGESTION_LEN: usize = 3;

/// Levenshtein edit distance over Unicode scalar values, single-row DP
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }

    row[b_chars.len()]
}

/// Closest candidate within `MAX_SUGGESTION_DISTANCE`.
///
/// Ties keep the first candidate seen.
pub(crate) fn closest<'a>(token: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut best = None;
    let mut min_dist = MAX_SUGGESTION_DISTANCE + 1;

    for candidate in candidates {
        if candidate.chars().count() < MIN_SUGGESTION_LEN {
            continue;
        }
        let dist = levenshtein(token, candidate);
        if dist < min_dist {
            min_dist = dist;
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("liter", "liter"), 0);
        assert_eq!(levenshtein("leter", "liter"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("gallens", "gallons"), 1);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        // "²" is two bytes in UTF-8
        assert_eq!(levenshtein("m²", "m2"), 1);
        assert_eq!(levenshtein("°c", "c"), 1);
    }

    #[test]
    fn test_closest_picks_minimum() {
        let candidates = ["litre", "liter", "gallon"];
        assert_eq!(closest("leter", candidates), Some("liter"));
    }

    #[test]
    fn test_closest_skips_short_aliases() {
        // "ml" is distance 1 from "mx" but too short to suggest
        assert_eq!(closest("mx", ["ml", "m"]), None);
    }

    #[test]
    fn test_closest_respects_max_distance() {
        assert_eq!(closest("xyzzy", ["liter", "meter", "gallon"]), None);
        assert_eq!(closest("galxxn", ["gallon"]), Some("gallon"));
        assert_eq!(closest("gxxxxn", ["gallon"]), None);
    }

    #[test]
    fn test_closest_tie_keeps_first() {
        assert_eq!(closest("cat", ["bat", "hat"]), Some("bat"));
    }
}
