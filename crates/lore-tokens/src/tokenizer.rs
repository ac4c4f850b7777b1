//! Lexical tokenizer: lowercase, strip punctuation, split, drop stop-words.

use std::collections::HashSet;
use std::sync::OnceLock;

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

pub fn is_stop_word(term: &str) -> bool {
    stop_words().contains(term)
}

/// Split raw text into normalized lexical terms.
///
/// Non-alphanumeric characters act as separators, so `app.service('users')`
/// yields `app`, `service`, `users`. Terms of one character and stop-words
/// are dropped. Pure and deterministic.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|term| term.chars().count() > 1 && !is_stop_word(term))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Feathers SERVICE: create()!"),
            vec!["feathers", "service", "create"]
        );
    }

    #[test]
    fn drops_stop_words_and_short_terms() {
        assert_eq!(tokenize("how do I use a hook in v5"), vec!["use", "hook", "v5"]);
    }

    #[test]
    fn empty_and_punctuation_only_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("... --- !!!").is_empty());
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(tokenize("café über"), vec!["café", "über"]);
    }

    #[test]
    fn deterministic() {
        let text = "Authentication strategies: local, jwt, oauth";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
