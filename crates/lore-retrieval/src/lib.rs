//! # lore-retrieval
//!
//! Turns a query and a candidate set into a ranked, deduplicated,
//! budget-constrained result list.
//!
//! - [`vector`]: dot-product similarity against stored embeddings
//! - [`lexical`]: BM25 over record terms, the legacy and degraded-mode path
//! - [`hybrid`]: pattern, then semantic, then fallback, for error text
//! - [`postprocess`]: per-source dedup, token budget, result count
//!
//! [`RetrievalEngine`] composes them into the three boundary operations.

pub mod engine;
pub mod hybrid;
pub mod lexical;
pub mod postprocess;
pub mod scoring;
pub mod snippet;
pub mod types;
pub mod vector;

pub use engine::RetrievalEngine;
pub use hybrid::HybridMatcher;
pub use lexical::LexicalRanker;
pub use postprocess::ResultPostProcessor;
pub use types::{ConceptExplanation, SearchRequest, SearchResponse};
pub use vector::VectorRanker;
