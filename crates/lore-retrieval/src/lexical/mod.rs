//! Legacy lexical ranking.

mod bm25;
mod cache;

pub use bm25::{Bm25Params, LexicalRanker};
pub use cache::LexicalCache;
