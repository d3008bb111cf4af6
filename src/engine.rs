//! The autocomplete facade: candidate accumulation plus ranking.
//!
//! # Architecture
//!
//! ```text
//! corpus ──▶ tokenize ──▶ Trie.insert + PhoneticIndex.insert   (one-time build)
//!
//! query ──▶ tokenize ──▶ { exact, prefix, fuzzy, phonetic }
//!                              │
//!                              ▼
//!                  deduplicated candidate list
//!                              │
//!                              ▼
//!                  scoring::rank ──▶ top max_results
//! ```
//!
//! Candidate sources run in a fixed precedence order: exact matches for the
//! whole query first, then per query token prefix → fuzzy → phonetic. A word
//! found by an earlier source is never replaced by a later one, and
//! accumulation stops early once `2 × max_results` candidates exist. That
//! soft cap is deliberately approximate: a later source might have
//! contributed a higher-scoring candidate than one already collected, so the
//! output is not a guaranteed global top-K. Preserved as-is from the system
//! this engine replaces.

use crate::frequency::FrequencyTable;
use crate::phonetic::PhoneticIndex;
use crate::scoring;
use crate::tokenize::tokenize;
use crate::trie::Trie;
use crate::types::{
    AutocompleteOptions, BuildError, ScoredSuggestion, SearchError, Suggestion,
};
use std::collections::HashMap;

/// Result count used by callers that don't care to choose one.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Fuzzy, phonetic, frequency-learning autocomplete over a catalog of short
/// name strings.
///
/// The trie and phonetic index are built eagerly at construction and never
/// change; a new corpus requires a new engine. The frequency table is the
/// only mutable state, touched by [`Autocomplete::record_selection`] and
/// [`Autocomplete::clear_selections`]. Concurrent readers are safe; mixing
/// writers needs external synchronization.
#[derive(Debug)]
pub struct Autocomplete {
    trie: Trie,
    phonetic_index: PhoneticIndex,
    frequency: FrequencyTable,
    use_phonetic: bool,
}

impl Autocomplete {
    /// Build an engine with default options (`max_edit_distance = 2`,
    /// phonetics enabled).
    pub fn new<I, S>(corpus: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_options(corpus, AutocompleteOptions::default())
    }

    /// Build an engine from a corpus of words.
    ///
    /// Cost is proportional to the total character count of the corpus.
    /// Duplicates are legal; an empty string is not, since it cannot be
    /// tokenized. Validation happens here, once, at the boundary.
    pub fn with_options<I, S>(corpus: I, options: AutocompleteOptions) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new(options.max_edit_distance);
        let mut phonetic_index = PhoneticIndex::new();

        for (index, word) in corpus.into_iter().enumerate() {
            let word = word.as_ref();
            if word.is_empty() {
                return Err(BuildError::EmptyWord { index });
            }
            trie.insert(word);
            phonetic_index.insert(word);
        }

        Ok(Autocomplete {
            trie,
            phonetic_index,
            frequency: FrequencyTable::new(),
            use_phonetic: options.use_phonetic,
        })
    }

    /// Ranked suggestions for `query`, best first.
    ///
    /// An empty or whitespace-only query, an empty corpus, or simply no
    /// matches all return an empty vector; the only error is the fuzzy
    /// traversal blowing its state budget.
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, SearchError> {
        Ok(self
            .search_with_score(query, max_results)?
            .into_iter()
            .map(|scored| scored.suggestion.word)
            .collect())
    }

    /// Same pipeline as [`Autocomplete::search`], with scores retained.
    pub fn search_with_score(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ScoredSuggestion>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.collect_candidates(query, max_results)?;
        Ok(scoring::rank(
            query,
            candidates,
            &self.frequency,
            self.use_phonetic,
            max_results,
        ))
    }

    /// Record that a user accepted `word` as a suggestion.
    ///
    /// Empty words are ignored; anything else counts, even words outside
    /// the corpus (they simply never surface).
    pub fn record_selection(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.frequency.record(word);
    }

    /// Forget all selection feedback, e.g. on corpus reload.
    pub fn clear_selections(&mut self) {
        self.frequency.clear();
    }

    /// Accumulate a deduplicated candidate list in precedence order.
    ///
    /// Exact results may overwrite each other (the query can contain several
    /// tokens mapping to the same word); every later source skips words that
    /// are already present. Each source stops inserting at the soft cap, and
    /// the cap is re-checked after each source so a token's remaining
    /// sources are skipped too.
    fn collect_candidates(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Suggestion>, SearchError> {
        let cap = max_results * 2;
        let mut candidates: Vec<Suggestion> = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for result in self.trie.exact_search(query) {
            match seen.get(&result.word) {
                Some(&slot) => candidates[slot] = result,
                None => {
                    seen.insert(result.word.clone(), candidates.len());
                    candidates.push(result);
                }
            }
        }

        'tokens: for token in tokenize(query) {
            for result in self.trie.prefix_search(&token) {
                if insert_new(&mut candidates, &mut seen, result) >= cap {
                    break;
                }
            }
            if candidates.len() >= cap {
                break 'tokens;
            }

            for result in self.trie.fuzzy_search(&token)? {
                if insert_new(&mut candidates, &mut seen, result) >= cap {
                    break;
                }
            }
            if candidates.len() >= cap {
                break 'tokens;
            }

            if self.use_phonetic {
                for word in self.phonetic_index.lookup(&token) {
                    let result = Suggestion::new(word.clone(), Vec::new(), 0);
                    if insert_new(&mut candidates, &mut seen, result) >= cap {
                        break;
                    }
                }
                if candidates.len() >= cap {
                    break 'tokens;
                }
            }
        }

        Ok(candidates)
    }
}

/// Insert unless the word is already present; returns the candidate count.
fn insert_new(
    candidates: &mut Vec<Suggestion>,
    seen: &mut HashMap<String, usize>,
    result: Suggestion,
) -> usize {
    if !seen.contains_key(&result.word) {
        seen.insert(result.word.clone(), candidates.len());
        candidates.push(result);
    }
    candidates.len()
}
