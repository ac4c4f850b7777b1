use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Which ranker serves `search_docs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Dense vector similarity against stored embeddings.
    #[default]
    Vector,
    /// Legacy BM25 scoring over record tokens.
    Lexical,
}

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Result count when the caller does not ask for one.
    pub default_limit: usize,
    /// Minimum similarity for general documentation search.
    pub search_min_score: f64,
    /// Minimum similarity for the semantic troubleshooting stage.
    pub troubleshoot_min_score: f64,
    /// Candidate cap for the semantic troubleshooting stage.
    pub troubleshoot_limit: usize,
    /// Result count used by `explain_concept`.
    pub explain_limit: usize,
    /// Max results admitted from one source file.
    pub dedup_cap: usize,
    /// Token budget applied when the caller passes none.
    pub default_token_budget: Option<usize>,
    /// BM25 term-frequency saturation.
    pub bm25_k1: f64,
    /// BM25 length-normalization strength.
    pub bm25_b: f64,
    pub ranking_mode: RankingMode,
    /// Snippet window in characters.
    pub snippet_chars: usize,
    /// Serve lexical results when the embedding model is unavailable.
    pub lexical_fallback: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_LIMIT,
            search_min_score: defaults::DEFAULT_SEARCH_MIN_SCORE,
            troubleshoot_min_score: defaults::DEFAULT_TROUBLESHOOT_MIN_SCORE,
            troubleshoot_limit: defaults::DEFAULT_TROUBLESHOOT_LIMIT,
            explain_limit: defaults::DEFAULT_EXPLAIN_LIMIT,
            dedup_cap: defaults::DEFAULT_DEDUP_CAP,
            default_token_budget: None,
            bm25_k1: defaults::DEFAULT_BM25_K1,
            bm25_b: defaults::DEFAULT_BM25_B,
            ranking_mode: RankingMode::default(),
            snippet_chars: defaults::DEFAULT_SNIPPET_CHARS,
            lexical_fallback: defaults::DEFAULT_LEXICAL_FALLBACK,
        }
    }
}

impl RetrievalConfig {
    /// Reject thresholds and caps the rankers cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("retrieval.search_min_score", self.search_min_score),
            ("retrieval.troubleshoot_min_score", self.troubleshoot_min_score),
            ("retrieval.bm25_b", self.bm25_b),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} is outside [0, 1]")));
            }
        }
        if self.bm25_k1 < 0.0 {
            return Err(invalid("retrieval.bm25_k1", "must be non-negative".to_string()));
        }
        if self.dedup_cap == 0 {
            return Err(invalid("retrieval.dedup_cap", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}
