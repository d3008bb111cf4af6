//! Boundary-splitting tokenizer shared by indexing and queries.
//!
//! A corpus entry like `"QuantumConsole Pro v2.1"` becomes the tokens
//! `["quantum", "console", "pro", "v2", "1"]`. Running the same function over
//! queries keeps index-time and search-time views of a string identical,
//! which the trie depends on.

/// Split a string into lowercase tokens.
///
/// Boundaries:
/// - runs of whitespace, `.`, `-`, `_`
/// - a lowercase letter immediately followed by an uppercase letter
///   (camelCase split, decided on the original casing)
///
/// Empty fragments are dropped. Pure and deterministic.
pub fn tokenize(value: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut prev_lowercase = false;

    for ch in value.chars() {
        if is_delimiter(ch) {
            flush(&mut current, &mut tokens);
            prev_lowercase = false;
        } else {
            if prev_lowercase && ch.is_uppercase() {
                flush(&mut current, &mut tokens);
            }
            current.extend(ch.to_lowercase());
            prev_lowercase = ch.is_lowercase();
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '-' | '_')
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_split() {
        assert_eq!(tokenize("Damage Numbers Pro"), vec!["damage", "numbers", "pro"]);
    }

    #[test]
    fn test_punctuation_split() {
        assert_eq!(tokenize("a.b-c_d"), vec!["a", "b", "c", "d"]);
        assert_eq!(tokenize("v2.1"), vec!["v2", "1"]);
    }

    #[test]
    fn test_camel_case_split() {
        assert_eq!(tokenize("QuantumConsole"), vec!["quantum", "console"]);
        assert_eq!(tokenize("camelCaseWord"), vec!["camel", "case", "word"]);
    }

    #[test]
    fn test_uppercase_runs_stay_together() {
        // Only a lower->upper boundary splits; QFSW is one token.
        assert_eq!(tokenize("Quantum Console QFSW"), vec!["quantum", "console", "qfsw"]);
    }

    #[test]
    fn test_lowercasing() {
        assert_eq!(tokenize("MiXeD"), vec!["mi", "xe", "d"]);
        assert_eq!(tokenize("UPPER lower"), vec!["upper", "lower"]);
    }

    #[test]
    fn test_delimiter_runs_collapse() {
        assert_eq!(tokenize("a  --  b...c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize(" -._ ").is_empty());
    }

    #[test]
    fn test_index_and_query_agree() {
        // The same function serves both sides, so views never diverge.
        assert_eq!(tokenize("DamageNumbers"), tokenize("damage numbers"));
    }
}
