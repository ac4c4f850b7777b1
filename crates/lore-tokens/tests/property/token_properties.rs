use lore_tokens::{is_stop_word, tokenize, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn terms_are_alphanumeric(s in ".{0,200}") {
        for term in tokenize(&s) {
            prop_assert!(term.chars().all(char::is_alphanumeric));
        }
    }

    #[test]
    fn terms_are_longer_than_one_char_and_not_stop_words(s in ".{0,200}") {
        for term in tokenize(&s) {
            prop_assert!(term.chars().count() > 1);
            prop_assert!(!is_stop_word(&term));
        }
    }

    #[test]
    fn ascii_terms_are_lowercase(s in "[ -~]{0,200}") {
        for term in tokenize(&s) {
            prop_assert!(!term.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn tokenize_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::default();
        prop_assert_eq!(counter.count(&s), counter.count_cached(&s));
    }
}
