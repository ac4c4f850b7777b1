use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Record;

/// Ephemeral ranking output.
///
/// `score` lies in `[0, 1]` after normalization, with `1.0` on the top hit.
/// `index` is the position in the candidate slice the hit was ranked from,
/// which disambiguates ids that collide across version trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    pub id: String,
    pub score: f64,
    pub index: usize,
}

/// A hit joined back to its record, with a display snippet.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub record: Arc<Record>,
    pub score: f64,
    pub snippet: String,
}
