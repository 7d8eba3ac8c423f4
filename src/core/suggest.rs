//! Fuzzy station-name suggestions
//!
//! Turns a mistyped station name into the closest registered one, so the CLI
//! can answer "did you mean ...?" instead of a bare not-found.

use strsim::{jaro_winkler, normalized_levenshtein};

/// Minimum combined score for a candidate to be suggested.
///
/// Low enough to catch single transpositions and dropped letters
/// ("conaught place", "hauz kas"), high enough to reject unrelated words.
const MIN_SCORE: f64 = 0.65;

/// Suggest the registered station name closest to `input`.
///
/// Returns `None` for an exact case-insensitive match (no correction needed)
/// and when no candidate scores above the threshold.
///
/// Scoring:
/// - 70% Jaro-Winkler (transpositions, shared prefixes)
/// - 30% normalized Levenshtein (insertions and deletions)
/// - prefix bonus up to 20% when the first 7 characters nearly agree
/// - word bonus up to 12% when the input matches one word of a multi-word name
pub fn suggest_station(input: &str, candidates: &[String]) -> Option<String> {
    let input_lower = input.trim().to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    if candidates
        .iter()
        .any(|candidate| candidate.to_lowercase() == input_lower)
    {
        return None;
    }

    let mut best_match = None;
    let mut best_score = 0.0f64;

    for candidate in candidates {
        let score = score(&input_lower, &candidate.to_lowercase());
        if score >= MIN_SCORE && score > best_score {
            best_score = score;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}

fn score(input: &str, candidate: &str) -> f64 {
    let jw_score = jaro_winkler(input, candidate);
    let lev_score = normalized_levenshtein(input, candidate);
    let mut score = (jw_score * 0.7) + (lev_score * 0.3);

    let prefix_len = input.chars().count().min(7);
    if prefix_len >= 4 {
        let input_prefix: String = input.chars().take(prefix_len).collect();
        let candidate_prefix: String = candidate.chars().take(prefix_len).collect();
        let prefix_similarity = normalized_levenshtein(&input_prefix, &candidate_prefix);
        if prefix_similarity > 0.7 {
            score += 0.2 * prefix_similarity;
        }
    }

    // "Saket" should still find "Saket" inside "Saket Metro"-style names
    if candidate.contains(' ') && !input.contains(' ') {
        let best_word = candidate
            .split_whitespace()
            .filter(|word| word.len() >= 4)
            .map(|word| jaro_winkler(input, word))
            .fold(0.0f64, f64::max);
        if best_word > 0.85 {
            score += 0.12 * best_word;
        }
    }

    score
}
