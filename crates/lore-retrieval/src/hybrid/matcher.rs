use std::sync::Arc;

use lore_core::config::RetrievalConfig;
use lore_core::errors::LoreResult;
use lore_core::models::{Diagnosis, Record};
use tracing::debug;

use super::guidance::fallback_guidance;
use super::patterns::PatternSet;
use crate::vector::VectorRanker;

/// Three-stage error diagnosis. Each stage runs only if the previous one
/// found nothing.
///
/// The pattern stage is synchronous. The semantic stage is the only await
/// point, so dropping the future cancels there.
pub struct HybridMatcher {
    patterns: PatternSet,
    vector: VectorRanker,
    semantic_limit: usize,
    semantic_min_score: f64,
}

impl HybridMatcher {
    pub fn new(vector: VectorRanker, config: &RetrievalConfig) -> Self {
        Self {
            patterns: PatternSet::default(),
            vector,
            semantic_limit: config.troubleshoot_limit,
            semantic_min_score: config.troubleshoot_min_score,
        }
    }

    /// Pattern stage alone.
    pub fn match_pattern(
        &self,
        error_text: &str,
        candidates: &[Arc<Record>],
    ) -> Option<Arc<Record>> {
        self.patterns.best_match(error_text, candidates)
    }

    /// Diagnose `error_text` against error-pattern `candidates`.
    ///
    /// Fails only if the semantic stage is reached and the embedding model
    /// is unavailable.
    pub async fn diagnose(
        &self,
        error_text: &str,
        candidates: &[Arc<Record>],
    ) -> LoreResult<Diagnosis> {
        if let Some(record) = self.match_pattern(error_text, candidates) {
            debug!(record = %record.id, "pattern stage matched");
            return Ok(Diagnosis::Pattern { record });
        }

        let hits = self
            .vector
            .search(
                error_text,
                candidates,
                self.semantic_limit,
                self.semantic_min_score,
            )
            .await?;
        if let Some(top) = hits.first() {
            debug!(record = %top.id, confidence = top.score, "semantic stage matched");
            return Ok(Diagnosis::Semantic {
                record: Arc::clone(&candidates[top.index]),
                confidence: top.score,
            });
        }

        Ok(Self::fallback(error_text))
    }

    pub fn fallback(error_text: &str) -> Diagnosis {
        Diagnosis::Fallback {
            guidance: fallback_guidance(error_text),
        }
    }
}
