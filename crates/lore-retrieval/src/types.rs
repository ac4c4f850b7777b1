//! Request and response shapes of the boundary operations.

use lore_core::models::{ScoredResult, VersionFilter};
use serde::Serialize;

/// Documentation search request.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    pub version: VersionFilter,
    /// Result count; the configured default when `None`.
    pub limit: Option<usize>,
    /// Token ceiling; the configured default (if any) when `None`.
    pub token_budget: Option<usize>,
    /// Restrict candidates to one category.
    pub category: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: VersionFilter) -> Self {
        self.version = version;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_token_budget(mut self, budget: usize) -> Self {
        self.token_budget = Some(budget);
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<ScoredResult>,
    pub total_tokens: usize,
    /// Served by the lexical ranker because the embedding model was unavailable.
    pub degraded: bool,
}

/// Best match for a concept plus the runners-up.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConceptExplanation {
    pub best: Option<ScoredResult>,
    pub related: Vec<ScoredResult>,
}
