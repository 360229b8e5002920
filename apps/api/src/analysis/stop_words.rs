//! Built-in English stop-word list used when no `STOP_WORDS_FILE` is configured.
//!
//! Function words plus the filler job ads repeat everywhere ("etc", "including").
//! Domain terms such as "experience" or "developer" must stay out of this list.

use std::collections::HashSet;

pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
    "during", "each", "eg", "etc", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
    "ie", "if", "in", "including", "into", "is", "it", "its", "itself", "just", "may",
    "me", "might", "more", "most", "must", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "per", "same", "shall", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "upon", "us", "very",
    "via", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "within", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Returns the built-in list as an owned set.
pub fn default_stop_words() -> HashSet<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Parses a stop-word file: one word per line, blank lines and `#` comments ignored.
/// Words are lowercased so the file may use any casing.
pub fn parse_stop_word_list(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_is_lowercase_and_nonempty() {
        assert!(!DEFAULT_STOP_WORDS.is_empty());
        for word in DEFAULT_STOP_WORDS {
            assert_eq!(*word, word.to_lowercase());
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn test_default_list_keeps_domain_terms() {
        let words = default_stop_words();
        for term in ["experience", "developer", "python", "looking", "api"] {
            assert!(!words.contains(term), "{term} must not be a stop word");
        }
    }

    #[test]
    fn test_parse_stop_word_list_skips_comments_and_blanks() {
        let parsed = parse_stop_word_list("# header\nThe\n\n  and  \nfoo # trailing\n");
        assert_eq!(parsed.len(), 3);
        assert!(parsed.contains("the"));
        assert!(parsed.contains("and"));
        assert!(parsed.contains("foo"));
    }
}
