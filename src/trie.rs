//! Prefix tree over tokens with exact, prefix, and bounded-edit search.
//!
//! # Architecture
//!
//! Nodes live in a flat arena (`Vec<TrieNode>`) and refer to children by
//! index, so the tree needs no `Box` recursion and clones cheaply. Edges are
//! labeled with lowercase characters; a terminal node stores the original
//! corpus word whose tokenization ends there.
//!
//! # Complexity
//!
//! | Operation       | Time                         |
//! |-----------------|------------------------------|
//! | Insert          | O(k) per token               |
//! | Exact search    | O(k) per query token         |
//! | Prefix search   | O(k + subtree)               |
//! | Fuzzy search    | exponential in `max_distance`, bounded by a hard state budget |
//!
//! Where k is token length. The fuzzy traversal is correctness-first and
//! re-explores states rather than tracking a minimal Levenshtein automaton;
//! that is acceptable for the short queries and small corpora this engine
//! targets, and the state budget turns pathological inputs into an error
//! instead of a hang.

use crate::tokenize::tokenize;
use crate::types::{SearchError, Suggestion};
use std::collections::VecDeque;

/// Hard cap on BFS states a single fuzzy search may dequeue.
///
/// Generous for realistic catalogs (a few thousand short names); only
/// adversarial query/corpus combinations get near it.
pub(crate) const FUZZY_STATE_BUDGET: usize = 250_000;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    /// Sorted edges keep traversal order deterministic.
    children: std::collections::BTreeMap<char, usize>,
    /// `Some` marks a terminal node. The stored word is never empty; on
    /// token collisions the later insertion wins (not an error).
    word: Option<String>,
}

/// Prefix tree over the tokenized corpus.
///
/// Immutable once the owning engine finishes building it; a new corpus
/// means a full rebuild.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    max_distance: usize,
}

impl Trie {
    /// Create an empty trie whose fuzzy searches spend at most
    /// `max_distance` edits.
    pub fn new(max_distance: usize) -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            max_distance,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Index `word` under each of its tokens.
    pub fn insert(&mut self, word: &str) {
        for token in tokenize(word) {
            let mut node = 0;
            for ch in token.chars() {
                node = match self.nodes[node].children.get(&ch) {
                    Some(&child) => child,
                    None => {
                        let child = self.nodes.len();
                        self.nodes.push(TrieNode::default());
                        self.nodes[node].children.insert(ch, child);
                        child
                    }
                };
            }
            self.nodes[node].word = Some(word.to_string());
        }
    }

    /// Walk the character path for `s` (lowercased), if it exists.
    fn find_node(&self, s: &str) -> Option<usize> {
        let mut node = 0;
        for ch in s.chars().flat_map(char::to_lowercase) {
            node = *self.nodes[node].children.get(&ch)?;
        }
        Some(node)
    }

    /// Find words whose token path equals a token of `query` exactly.
    ///
    /// The query is tokenized with the same rules as the corpus, so casing
    /// and punctuation differences cost nothing.
    pub fn exact_search(&self, query: &str) -> Vec<Suggestion> {
        let mut results = Vec::new();
        for token in tokenize(query) {
            if let Some(node) = self.find_node(&token) {
                if let Some(word) = &self.nodes[node].word {
                    let matched = (0..token.chars().count()).collect();
                    results.push(Suggestion::new(word.clone(), matched, 0));
                }
            }
        }
        results
    }

    /// Find every word with a token starting with `prefix`.
    ///
    /// The prefix is walked raw (no tokenization), then all terminal
    /// descendants are collected depth-first. Recursion depth is bounded by
    /// the longest indexed token.
    pub fn prefix_search(&self, prefix: &str) -> Vec<Suggestion> {
        let Some(node) = self.find_node(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        self.collect_words(node, &mut words);

        let matched: Vec<usize> = (0..prefix.chars().count()).collect();
        words
            .into_iter()
            .map(|word| Suggestion::new(word, matched.clone(), 0))
            .collect()
    }

    fn collect_words(&self, node: usize, out: &mut Vec<String>) {
        if let Some(word) = &self.nodes[node].word {
            out.push(word.clone());
        }
        for &child in self.nodes[node].children.values() {
            self.collect_words(child, out);
        }
    }

    /// Find words within `max_distance` edits of `query`, breadth-first.
    ///
    /// Each BFS state is `(node, query_depth, edits, matched_indexes)`.
    /// From a state the traversal tries, per child edge: a free advance when
    /// the edge character matches the next query character, otherwise a
    /// substitution; plus an insertion (skip a query character in place) and
    /// a deletion (take the edge without consuming query). States over the
    /// edit cap are discarded; a terminal node reached with the query fully
    /// consumed emits the stored word.
    ///
    /// The same word can be emitted more than once with different edit
    /// counts; callers keep whichever occurrence they see first.
    pub fn fuzzy_search(&self, query: &str) -> Result<Vec<Suggestion>, SearchError> {
        self.fuzzy_search_budgeted(query, FUZZY_STATE_BUDGET)
    }

    fn fuzzy_search_budgeted(
        &self,
        query: &str,
        budget: usize,
    ) -> Result<Vec<Suggestion>, SearchError> {
        let query: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
        let mut results = Vec::new();
        let mut visited = 0usize;

        let mut queue: VecDeque<(usize, usize, usize, Vec<usize>)> = VecDeque::new();
        queue.push_back((0, 0, 0, Vec::new()));

        while let Some((node, depth, edits, matched)) = queue.pop_front() {
            if edits > self.max_distance {
                continue;
            }

            visited += 1;
            if visited > budget {
                return Err(SearchError::BudgetExhausted { visited });
            }

            if depth >= query.len() {
                if let Some(word) = &self.nodes[node].word {
                    results.push(Suggestion::new(word.clone(), matched.clone(), edits));
                }
            }

            for (&ch, &child) in &self.nodes[node].children {
                // Advance (free on match, substitution otherwise).
                if depth < query.len() && ch == query[depth] {
                    let mut extended = matched.clone();
                    extended.push(depth);
                    queue.push_back((child, depth + 1, edits, extended));
                } else {
                    queue.push_back((child, depth + 1, edits + 1, matched.clone()));
                }
                // Deletion: take the edge without consuming query.
                queue.push_back((child, depth, edits + 1, matched.clone()));
            }

            // Insertion: skip a query character, stay on this node.
            queue.push_back((node, depth + 1, edits + 1, matched));
        }

        Ok(results)
    }
}
