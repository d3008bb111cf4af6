//! Session-scoped selection counts used as a learning signal.

use std::collections::HashMap;

/// Word → number of times a user accepted it as a suggestion.
///
/// Starts empty, grows only through [`FrequencyTable::record`], and is
/// cleared wholesale on corpus reload. This is the single piece of mutable
/// state in the engine; concurrent writers need external synchronization.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Increment the count for `word`, starting at 1 if absent.
    pub fn record(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Selection count for `word`; 0 if never selected.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
