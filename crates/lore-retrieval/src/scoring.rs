//! Ordering and normalization shared by both rankers.

use std::cmp::Ordering;

use lore_core::constants::TOP_SCORE;
use lore_core::models::RankedHit;

/// Sort descending, slice to `limit`, and rescale so the top hit scores 1.0.
///
/// The sort is stable, so equal scores keep candidate order. When the top
/// score is not positive the list is returned unscaled.
pub fn finalize(mut hits: Vec<RankedHit>, limit: usize) -> Vec<RankedHit> {
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits.truncate(limit);

    let Some(top) = hits.first().map(|h| h.score) else {
        return hits;
    };
    if top <= 0.0 {
        return hits;
    }
    for hit in &mut hits {
        hit.score = (hit.score / top * TOP_SCORE).clamp(0.0, TOP_SCORE);
    }
    hits[0].score = TOP_SCORE;
    hits
}
