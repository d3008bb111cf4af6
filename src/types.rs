//! The building blocks of an autocomplete engine.
//!
//! These types define how candidate words, their match evidence, and
//! configuration fit together. The central distinction:
//!
//! - A **word** is an original, untouched corpus string (`"Damage Numbers Pro"`),
//!   the thing callers get back.
//! - A **token** is a lowercase fragment of a word produced by
//!   [`crate::tokenize::tokenize`], the thing actually indexed.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Suggestion**: `matched_indexes` is strictly increasing and every index
//!   is a character position in the query that produced it. `edit_distance`
//!   is 0 for exact, prefix, and phonetic matches.
//! - **ScoredSuggestion**: ephemeral, produced only during ranking. Never
//!   stored in any index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate word surfaced by one of the search strategies, together with
/// the evidence for how it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The original corpus string, exactly as it was indexed.
    pub word: String,
    /// Character positions of the query that matched along the trie path.
    /// Empty for phonetic matches, which carry no positional evidence.
    pub matched_indexes: Vec<usize>,
    /// Edits consumed to reach the word. 0 for exact/prefix/phonetic matches.
    pub edit_distance: usize,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, matched_indexes: Vec<usize>, edit_distance: usize) -> Self {
        Suggestion {
            word: word.into(),
            matched_indexes,
            edit_distance,
        }
    }
}

/// A [`Suggestion`] with its computed rank score attached.
///
/// Only produced by [`crate::Autocomplete::search_with_score`]; exists for
/// diagnostics and test assertions, not for storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSuggestion {
    pub suggestion: Suggestion,
    pub score: f64,
}

impl fmt::Display for ScoredSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.suggestion.word, self.score)
    }
}

/// Construction-time configuration for [`crate::Autocomplete`].
///
/// Both knobs are fixed once the engine is built; per-call behavior is
/// controlled only by the `max_results` argument to the search methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteOptions {
    /// Maximum Levenshtein distance the fuzzy traversal will spend.
    pub max_edit_distance: usize,
    /// Enables the phonetic candidate source and the phonetic score bonus.
    pub use_phonetic: bool,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        AutocompleteOptions {
            max_edit_distance: 2,
            use_phonetic: true,
        }
    }
}

/// Error building an engine from a corpus.
///
/// Validation happens once at the boundary; the recursive search paths
/// assume a well-formed corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The corpus contains an empty string, which cannot be tokenized.
    EmptyWord { index: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyWord { index } => {
                write!(f, "corpus entry {} is empty", index)
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Error raised during a search.
///
/// "No match" is never an error; the only failure mode is the fuzzy
/// traversal exhausting its state budget on pathological input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The fuzzy BFS visited more states than the hard budget allows.
    /// Results for inputs within the budget are unaffected by its existence.
    BudgetExhausted { visited: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::BudgetExhausted { visited } => {
                write!(
                    f,
                    "fuzzy search exhausted its budget after {} states",
                    visited
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AutocompleteOptions::default();
        assert_eq!(options.max_edit_distance, 2);
        assert!(options.use_phonetic);
    }

    #[test]
    fn test_scored_suggestion_display() {
        let scored = ScoredSuggestion {
            suggestion: Suggestion::new("Quantum Console", vec![0, 1], 0),
            score: 182.0,
        };
        assert_eq!(scored.to_string(), "Quantum Console (182)");
    }

    #[test]
    fn test_error_display() {
        let err = BuildError::EmptyWord { index: 3 };
        assert_eq!(err.to_string(), "corpus entry 3 is empty");

        let err = SearchError::BudgetExhausted { visited: 500_000 };
        assert!(err.to_string().contains("500000"));
    }
}
