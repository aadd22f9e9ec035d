//! Item Name Resolution
//!
//! Resolves free-text player input to item names, so searching does not
//! require typing an item name letter-perfect.
//!
//! ## Matching tiers
//! - **Exact**: normalized input equals a normalized item name
//! - **Substring**: input appears inside an item name ("safe" finds the
//!   "Locked safe")
//! - **Similarity**: highest normalized edit similarity at or above the
//!   cutoff ("locked saf" still finds the "Locked safe")
//!
//! Normalization is case-insensitive with whitespace collapsed. Ties on the
//! similarity tier go to the earliest candidate.

/// Default similarity cutoff below which a candidate is not considered a match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Substring matches shorter than this are ignored; one or two characters
/// land inside almost every item name.
const MIN_SUBSTRING_LEN: usize = 3;

/// Normalize a name for comparison
///
/// - Convert to lowercase
/// - Trim whitespace
/// - Collapse multiple spaces to single space
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve player input to the closest matching candidate name.
///
/// Returns `None` when the input is blank or no candidate clears the cutoff.
pub fn resolve<'a>(input: &str, candidates: &[&'a str], cutoff: f64) -> Option<&'a str> {
    let query = normalize_name(input);
    if query.is_empty() {
        return None;
    }

    // Exact match wins outright.
    for candidate in candidates {
        if normalize_name(candidate) == query {
            return Some(candidate);
        }
    }

    // Substring match: "safe" should find "Locked safe".
    if query.len() >= MIN_SUBSTRING_LEN {
        for candidate in candidates {
            if normalize_name(candidate).contains(&query) {
                return Some(candidate);
            }
        }
    }

    // Similarity scan, first-best wins on ties.
    let mut best: Option<(&'a str, f64)> = None;
    for candidate in candidates {
        let score = strsim::normalized_levenshtein(&query, &normalize_name(candidate));
        if score >= cutoff && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 4] = [
        "Key under the doormat",
        "Locked safe",
        "Mysterious painting",
        "Old map",
    ];

    #[test]
    fn exact_match_ignores_case_and_spacing() {
        assert_eq!(
            resolve("  locked   SAFE ", &ITEMS, DEFAULT_CUTOFF),
            Some("Locked safe")
        );
    }

    #[test]
    fn substring_match_finds_longer_names() {
        assert_eq!(
            resolve("doormat", &ITEMS, DEFAULT_CUTOFF),
            Some("Key under the doormat")
        );
    }

    #[test]
    fn typo_resolves_by_similarity() {
        assert_eq!(
            resolve("locked saf", &ITEMS, DEFAULT_CUTOFF),
            Some("Locked safe")
        );
        assert_eq!(resolve("olde map", &ITEMS, DEFAULT_CUTOFF), Some("Old map"));
    }

    #[test]
    fn below_cutoff_is_rejected() {
        assert_eq!(resolve("zzzzzz", &ITEMS, DEFAULT_CUTOFF), None);
    }

    #[test]
    fn blank_input_never_matches() {
        assert_eq!(resolve("", &ITEMS, DEFAULT_CUTOFF), None);
        assert_eq!(resolve("   ", &ITEMS, DEFAULT_CUTOFF), None);
    }

    #[test]
    fn similarity_tie_goes_to_first_candidate() {
        let candidates = ["red door", "rad door"];
        // Equidistant from both; the earlier candidate wins.
        assert_eq!(resolve("rod door", &candidates, 0.5), Some("red door"));
    }
}
