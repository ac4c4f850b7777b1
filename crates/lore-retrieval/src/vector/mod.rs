//! Dense vector ranking.

mod ranker;
mod similarity;

pub use ranker::{rank_by_vector, VectorRanker};
pub use similarity::dot;
