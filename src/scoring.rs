//! Ranking for deduplicated candidate sets.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! Every weight below is a fixed constant, not a tunable. Downstream tests
//! assert exact scores, and relative ranking guarantees depend on the
//! numbers as given:
//!
//! ```text
//! score = 100 − 5 × edit_distance
//!       + 50  if word == query        (ignoring case)
//!       + 30  if word starts with query (ignoring case)
//!       + 2   × |matched_indexes|
//!       + 3   × longest consecutive run of matched indexes
//!       + 10  / word length (in characters)
//!       + 2   × min(frequency, 10)
//!       + 10  × query tokens that prefix some word token
//!       + 20  if the phonetic codes of query and word are equal
//! ```
//!
//! In particular: lower edit distance strictly increases score when all
//! other signals are equal, and the frequency bonus saturates at 10
//! selections so a heavily-clicked word cannot drown out match quality.

use crate::frequency::FrequencyTable;
use crate::phonetic::encode;
use crate::tokenize::tokenize;
use crate::types::{ScoredSuggestion, Suggestion};

const BASE: f64 = 100.0;
const EDIT_PENALTY: f64 = 5.0;
const EXACT_BONUS: f64 = 50.0;
const PREFIX_BONUS: f64 = 30.0;
const MATCHED_CHAR_BONUS: f64 = 2.0;
const CONSECUTIVE_BONUS: f64 = 3.0;
const SHORT_WORD_BONUS: f64 = 10.0;
const FREQUENCY_BONUS: f64 = 2.0;
const FREQUENCY_CAP: u32 = 10;
const TOKEN_OVERLAP_BONUS: f64 = 10.0;
const PHONETIC_BONUS: f64 = 20.0;

/// Score one candidate against the query.
///
/// `query_tokens` is `tokenize(query)`, passed in so the caller tokenizes
/// once per search rather than once per candidate. The phonetic bonus is
/// only awarded when the engine has phonetics enabled.
pub fn score(
    query: &str,
    query_tokens: &[String],
    suggestion: &Suggestion,
    frequency: &FrequencyTable,
    use_phonetic: bool,
) -> f64 {
    let word = &suggestion.word;
    let word_lower = word.to_lowercase();
    let query_lower = query.to_lowercase();

    let mut score = BASE - EDIT_PENALTY * suggestion.edit_distance as f64;

    if word_lower == query_lower {
        score += EXACT_BONUS;
    }

    if word_lower.starts_with(&query_lower) {
        score += PREFIX_BONUS;
    }

    score += MATCHED_CHAR_BONUS * suggestion.matched_indexes.len() as f64;
    score += CONSECUTIVE_BONUS * longest_consecutive_run(&suggestion.matched_indexes) as f64;
    score += SHORT_WORD_BONUS / word.chars().count() as f64;
    score += FREQUENCY_BONUS * f64::from(frequency.count(word).min(FREQUENCY_CAP));

    let word_tokens = tokenize(word);
    let overlap = query_tokens
        .iter()
        .filter(|qt| word_tokens.iter().any(|wt| wt.starts_with(qt.as_str())))
        .count();
    score += TOKEN_OVERLAP_BONUS * overlap as f64;

    if use_phonetic && encode(query) == encode(word) {
        score += PHONETIC_BONUS;
    }

    score
}

/// Score, sort (stable, descending), and truncate a candidate set.
///
/// Stability matters: candidates tied on score keep the order in which the
/// search strategies discovered them.
pub fn rank(
    query: &str,
    candidates: Vec<Suggestion>,
    frequency: &FrequencyTable,
    use_phonetic: bool,
    max_results: usize,
) -> Vec<ScoredSuggestion> {
    let query_tokens = tokenize(query);

    let mut scored: Vec<ScoredSuggestion> = candidates
        .into_iter()
        .map(|suggestion| {
            let score = score(query, &query_tokens, &suggestion, frequency, use_phonetic);
            ScoredSuggestion { suggestion, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(max_results);
    scored
}

/// Length of the longest run of values each one greater than the last.
///
/// An empty slice counts as a run of 1, so the consecutive bonus is a
/// uniform floor rather than a discriminator for phonetic-only matches.
fn longest_consecutive_run(matched_indexes: &[usize]) -> usize {
    let mut longest = 1;
    let mut current = 1;

    for i in 1..matched_indexes.len() {
        if matched_indexes[i] == matched_indexes[i - 1] + 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    longest
}
