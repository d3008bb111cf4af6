//! Heuristic "sounds-like" codes and the index built from them.
//!
//! This is a fixed substitution table in the spirit of Metaphone, not a
//! linguistically faithful implementation. Two words are phonetically
//! equivalent iff their codes are string-equal, so the table itself is the
//! contract: changing a rule changes which words the engine considers to
//! sound alike, and every constant below is load-bearing for ranking.
//!
//! # Rule table
//!
//! | Input            | Output               |
//! |------------------|----------------------|
//! | vowel (A E I O U)| itself in first position, dropped elsewhere |
//! | C                | K, except CH → X     |
//! | D                | T                    |
//! | G                | K                    |
//! | H                | H after a consonant, dropped otherwise |
//! | Q                | K                    |
//! | S                | S, except SH → X     |
//! | V                | F                    |
//! | X                | KS                   |
//! | Z                | S                    |
//! | B F J K L M N P R T W Y | themselves   |
//! | anything else    | skipped silently     |

use crate::tokenize::tokenize;
use std::collections::HashMap;

/// Encode a word into its phonetic code.
///
/// The input is uppercased first; a single-character input is returned
/// unchanged (after uppercasing). Non-letter characters contribute nothing
/// and never raise an error.
pub fn encode(word: &str) -> String {
    let chars: Vec<char> = word.chars().flat_map(char::to_uppercase).collect();

    if chars.len() <= 1 {
        return chars.into_iter().collect();
    }

    let mut code = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];

        match current {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == 0 {
                    code.push(current);
                }
            }
            'C' => {
                if chars.get(i + 1) == Some(&'H') {
                    code.push('X');
                    i += 1;
                } else {
                    code.push('K');
                }
            }
            'S' => {
                if chars.get(i + 1) == Some(&'H') {
                    code.push('X');
                    i += 1;
                } else {
                    code.push('S');
                }
            }
            'D' => code.push('T'),
            'G' | 'Q' => code.push('K'),
            'V' => code.push('F'),
            'X' => code.push_str("KS"),
            'Z' => code.push('S'),
            'H' => {
                // Audible only after a consonant; a leading H or one after a
                // vowel is silent.
                if i > 0 && !is_vowel(chars[i - 1]) {
                    code.push('H');
                }
            }
            'B' | 'F' | 'J' | 'K' | 'L' | 'M' | 'N' | 'P' | 'R' | 'T' | 'W' | 'Y' => {
                code.push(current);
            }
            _ => {}
        }

        i += 1;
    }

    code
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'A' | 'E' | 'I' | 'O' | 'U')
}

/// Mapping from phonetic code to the corpus words whose tokens produce it.
///
/// Built once alongside the trie from the same tokenized corpus and
/// immutable afterwards. Each code keeps its words in first-seen corpus
/// order so that downstream tie-breaking stays deterministic.
#[derive(Debug, Default, Clone)]
pub struct PhoneticIndex {
    codes: HashMap<String, Vec<String>>,
}

impl PhoneticIndex {
    pub fn new() -> Self {
        PhoneticIndex::default()
    }

    /// Index every token of `word` under its phonetic code.
    pub fn insert(&mut self, word: &str) {
        for token in tokenize(word) {
            let entry = self.codes.entry(encode(&token)).or_default();
            if !entry.iter().any(|existing| existing == word) {
                entry.push(word.to_string());
            }
        }
    }

    /// All words sharing the phonetic code of `token`. Empty if the code is
    /// absent.
    pub fn lookup(&self, token: &str) -> &[String] {
        self.codes
            .get(&encode(token))
            .map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }
}
