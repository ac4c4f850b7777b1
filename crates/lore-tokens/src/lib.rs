//! # lore-tokens
//!
//! Two kinds of "token" live here:
//! - lexical terms for the BM25 ranker ([`tokenize`]), and
//! - model token counts for budget trimming ([`TokenCounter`], `cl100k_base`).

pub mod counter;
pub mod tokenizer;

pub use counter::TokenCounter;
pub use tokenizer::{is_stop_word, tokenize};
