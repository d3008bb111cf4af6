//! Fuzzy, phonetic, frequency-learning autocomplete for short name catalogs.
//!
//! This crate answers one question: given a catalog of names like
//! `"Damage Numbers Pro Ekincan Tas"` and a partial, misspelled, or
//! differently-cased query, which catalog entries did the user mean?
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ tokenize.rs  │────▶│   trie.rs    │     │  phonetic.rs  │
//! │ (boundary    │     │ (exact /     │     │ (sounds-like  │
//! │  splitting)  │     │  prefix /    │     │  codes+index) │
//! └──────────────┘     │  fuzzy)      │     └───────────────┘
//!                      └──────┬───────┘             │
//!                             ▼                     ▼
//!                      ┌─────────────────────────────────┐
//!                      │           engine.rs             │
//!                      │  (candidate accumulation, cap)  │
//!                      └──────────────┬──────────────────┘
//!                                     ▼
//!                      ┌─────────────────────────────────┐
//!                      │  scoring.rs  +  frequency.rs    │
//!                      │  (fixed-weight ranking)         │
//!                      └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typeahead::Autocomplete;
//!
//! let corpus = ["Quantum Console QFSW", "Quantum Physics Corp"];
//! let mut engine = Autocomplete::new(corpus).unwrap();
//!
//! let results = engine.search("quantm", 10).unwrap();
//! assert!(!results.is_empty());
//!
//! // Selection feedback nudges future rankings.
//! engine.record_selection(&results[0]);
//! ```
//!
//! The trie and phonetic index are immutable after construction; the
//! frequency table is the only mutable state. Everything is synchronous and
//! single-threaded by design.

pub mod engine;
pub mod frequency;
pub mod phonetic;
pub mod scoring;
pub mod testing;
pub mod tokenize;
pub mod trie;
pub mod types;

// Re-exports for the public API
pub use engine::{Autocomplete, DEFAULT_MAX_RESULTS};
pub use frequency::FrequencyTable;
pub use phonetic::{encode, PhoneticIndex};
pub use tokenize::tokenize;
pub use trie::Trie;
pub use types::{
    AutocompleteOptions, BuildError, ScoredSuggestion, SearchError, Suggestion,
};

#[cfg(test)]
mod tests {
    //! Cross-module tests pinning the behaviors the ranking formula and
    //! candidate pipeline promise together.

    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // SCENARIO TESTS
    // =========================================================================

    #[test]
    fn transposed_query_finds_catalog_entry() {
        let engine = Autocomplete::new(["Damage Numbers Pro Ekincan Tas"]).unwrap();
        let results = engine.search("Damge", 10).unwrap();
        assert_eq!(results, vec!["Damage Numbers Pro Ekincan Tas".to_string()]);
    }

    #[test]
    fn shared_token_returns_both_entries() {
        let corpus = ["Quantum Console QFSW", "Quantum Physics Corp"];
        let engine = Autocomplete::new(corpus).unwrap();

        let results = engine.search("quantum", 10).unwrap();
        assert!(results.contains(&"Quantum Console QFSW".to_string()));
        assert!(results.contains(&"Quantum Physics Corp".to_string()));
    }

    #[test]
    fn shorter_word_outranks_longer_on_tied_signals() {
        // Identical except for the trailing padding, so only the
        // shorter-word term separates them.
        let corpus = ["Widget Kit Extra Padding Words", "Widget Kit"];
        let engine = Autocomplete::new(corpus).unwrap();

        let scored = engine.search_with_score("widget", 10).unwrap();
        assert_eq!(scored[0].suggestion.word, "Widget Kit");
        assert!(scored[0].score > scored[1].score);
    }

    #[test]
    fn sound_alike_query_surfaces_entry() {
        let engine = Autocomplete::new(["Smith Co"]).unwrap();
        let results = engine.search("Smyth", 10).unwrap();
        assert!(results.contains(&"Smith Co".to_string()));
    }

    #[test]
    fn selection_gap_is_exactly_six_points() {
        let mut engine = Autocomplete::new(["Gadget Works"]).unwrap();
        let before = engine.search_with_score("gadget", 10).unwrap()[0].score;

        for _ in 0..3 {
            engine.record_selection("Gadget Works");
        }
        let after = engine.search_with_score("gadget", 10).unwrap()[0].score;
        assert!((after - before - 6.0).abs() < f64::EPSILON);

        engine.clear_selections();
        let cleared = engine.search_with_score("gadget", 10).unwrap()[0].score;
        assert!((cleared - before).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_corpus_never_errors() {
        let engine = Autocomplete::new(Vec::<String>::new()).unwrap();
        for query in ["", "anything", "several words here", "???"] {
            assert!(engine.search(query, 10).unwrap().is_empty());
        }
    }

    // =========================================================================
    // PROPERTY TESTS
    // =========================================================================

    /// Corpus entries with per-entry unique tokens, so token collisions
    /// can't hide a word behind last-write-wins.
    fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::string::string_regex("[a-z]{3,7}").unwrap(), 1..8).prop_map(
            |stems| {
                stems
                    .into_iter()
                    .enumerate()
                    .map(|(i, stem)| format!("{}{:02} Studio", stem, i))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn results_are_corpus_members_without_duplicates(
            corpus in corpus_strategy(),
            query in "[a-z]{1,6}",
        ) {
            let engine = Autocomplete::new(&corpus).unwrap();
            let results = engine.search(&query, 10).unwrap();

            prop_assert!(results.len() <= 10);
            for word in &results {
                prop_assert!(corpus.contains(word));
            }
            let mut deduped = results.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), results.len());
        }

        #[test]
        fn own_token_always_finds_word(corpus in corpus_strategy()) {
            let engine = Autocomplete::new(&corpus).unwrap();

            for word in &corpus {
                let token = tokenize(word).into_iter().next().unwrap();
                let results = engine.search(&token, corpus.len()).unwrap();
                prop_assert!(
                    results.contains(word),
                    "query {:?} missed {:?}", token, word
                );
            }
        }

        #[test]
        fn scores_are_descending(corpus in corpus_strategy(), query in "[a-z]{2,6}") {
            let engine = Autocomplete::new(&corpus).unwrap();
            let scored = engine.search_with_score(&query, 10).unwrap();

            for pair in scored.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }

        #[test]
        fn search_is_deterministic(corpus in corpus_strategy(), query in "[a-z]{1,6}") {
            let engine = Autocomplete::new(&corpus).unwrap();
            let first = engine.search(&query, 10).unwrap();
            let second = engine.search(&query, 10).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
