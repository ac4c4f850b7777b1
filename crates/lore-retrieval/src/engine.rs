//! RetrievalEngine: the boundary operations over store, rankers and shaping.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use lore_core::config::{LoreConfig, RankingMode, RetrievalConfig};
use lore_core::errors::{LoreResult, RetrievalError};
use lore_core::models::{
    DegradationEvent, Diagnosis, RankedHit, Record, ScoredResult, VersionFilter,
};
use lore_core::traits::QueryEmbedder;
use lore_core::LoreError;
use lore_embeddings::EmbeddingEngine;
use lore_observability::{DegradationTracker, QueryLog, QueryLogEntry, TrackedDegradation};
use lore_store::{KnowledgeIndex, KnowledgeStore};
use lore_tokens::{tokenize, TokenCounter};
use tracing::{debug, info, warn, Instrument};

use crate::hybrid::HybridMatcher;
use crate::lexical::{Bm25Params, LexicalCache};
use crate::postprocess::ResultPostProcessor;
use crate::snippet::snippet;
use crate::types::{ConceptExplanation, SearchRequest, SearchResponse};
use crate::vector::VectorRanker;

const EMBEDDING_COMPONENT: &str = "embedding";

/// Search, troubleshooting and concept explanation over one corpus.
pub struct RetrievalEngine {
    store: Arc<KnowledgeStore>,
    vector: VectorRanker,
    matcher: HybridMatcher,
    lexical: LexicalCache,
    post: ResultPostProcessor,
    config: RetrievalConfig,
    degradation: Mutex<DegradationTracker>,
    query_log: Mutex<QueryLog>,
}

impl RetrievalEngine {
    /// Fails with [`lore_core::errors::ConfigError`] if `config` is out of range.
    pub fn new(
        store: Arc<KnowledgeStore>,
        embedder: Arc<dyn QueryEmbedder>,
        config: RetrievalConfig,
    ) -> LoreResult<Self> {
        config.validate()?;
        let vector = VectorRanker::new(embedder);
        Ok(Self {
            store,
            matcher: HybridMatcher::new(vector.clone(), &config),
            vector,
            lexical: LexicalCache::new(Bm25Params::from(&config)),
            post: ResultPostProcessor::new(config.dedup_cap, Arc::new(TokenCounter::default())),
            config,
            degradation: Mutex::new(DegradationTracker::new()),
            query_log: Mutex::new(QueryLog::default()),
        })
    }

    /// Wire store, embedding engine and retrieval from one configuration.
    pub fn from_config(config: &LoreConfig) -> LoreResult<Self> {
        config.validate()?;
        let store = Arc::new(KnowledgeStore::new(config.store.clone()));
        let embedder = Arc::new(EmbeddingEngine::new(&config.embedding)?);
        let engine = Self::new(store, embedder, config.retrieval.clone())?;
        *engine.lock_log() = QueryLog::with_capacity(config.observability.query_log_capacity);
        Ok(engine)
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Drop cached corpus collections; the next call re-reads from disk.
    pub fn reload(&self) {
        self.store.clear_cache();
    }

    /// Documentation search.
    ///
    /// When the embedding model is unavailable, serves lexical results marked
    /// `degraded` if `lexical_fallback` is set, and fails with
    /// [`RetrievalError::SearchUnavailable`] otherwise.
    pub async fn search_docs(&self, request: &SearchRequest) -> LoreResult<SearchResponse> {
        let span = lore_observability::search_span!(request.query, request.version);
        let started = Instant::now();
        let response = self.search_inner(request).instrument(span).await?;

        self.log_query(QueryLogEntry::new(
            "search_docs",
            &request.query,
            started.elapsed(),
            response.results.len(),
            response.total_tokens,
            response.degraded,
        ));
        Ok(response)
    }

    async fn search_inner(&self, request: &SearchRequest) -> LoreResult<SearchResponse> {
        let limit = request.limit.unwrap_or(self.config.default_limit);
        if request.query.trim().is_empty() || limit == 0 {
            return Ok(SearchResponse::default());
        }

        let index = self.index().await?;
        let category = request.category.as_deref();
        let candidates = index.candidates(category, &request.version);
        // Rank without a cap so dedup has the full ordering to draw from.
        let depth = candidates.len();

        let rank_lexical = || {
            self.lexical
                .ranker(&index, category, &request.version, &candidates)
                .search(&request.query, depth)
        };

        let (hits, degraded) = match self.config.ranking_mode {
            RankingMode::Lexical => (rank_lexical(), false),
            RankingMode::Vector => {
                match self
                    .vector
                    .search(&request.query, &candidates, depth, self.config.search_min_score)
                    .await
                {
                    Ok(hits) => {
                        self.note_recovered();
                        (hits, false)
                    }
                    Err(LoreError::Embedding(e)) => {
                        if !self.config.lexical_fallback {
                            return Err(RetrievalError::SearchUnavailable {
                                reason: e.to_string(),
                            }
                            .into());
                        }
                        self.note_degraded(&e.to_string(), "lexical ranking");
                        (rank_lexical(), true)
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        let budget = request.token_budget.or(self.config.default_token_budget);
        let shaped = self.post.process(hits, &candidates, budget, limit);
        let terms = tokenize(&request.query);
        let results = self.join(&shaped.hits, &candidates, &terms);

        info!(
            candidates = candidates.len(),
            results = results.len(),
            total_tokens = shaped.total_tokens,
            degraded,
            "search complete"
        );
        Ok(SearchResponse {
            results,
            total_tokens: shaped.total_tokens,
            degraded,
        })
    }

    /// The memoized corpus index; a cold build runs off the async workers.
    async fn index(&self) -> LoreResult<Arc<KnowledgeIndex>> {
        if let Some(index) = self.store.cached_index() {
            return Ok(index);
        }
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.build_index())
            .await
            .map_err(|e| {
                LoreError::from(RetrievalError::SearchUnavailable {
                    reason: format!("index build failed: {e}"),
                })
            })
    }

    fn join(
        &self,
        hits: &[RankedHit],
        candidates: &[Arc<Record>],
        terms: &[String],
    ) -> Vec<ScoredResult> {
        hits.iter()
            .filter_map(|hit| {
                let record = candidates.get(hit.index)?;
                Some(ScoredResult {
                    record: Arc::clone(record),
                    score: hit.score,
                    snippet: snippet(&record.content, terms, self.config.snippet_chars),
                })
            })
            .collect()
    }

    /// Diagnose an error message against the error-pattern collection.
    ///
    /// If the semantic stage is needed and the model is unavailable, the
    /// fallback guidance is returned. Blank text matches nothing and also
    /// ends in the fallback.
    pub async fn troubleshoot(
        &self,
        error_text: &str,
        version: &VersionFilter,
    ) -> LoreResult<Diagnosis> {
        let span = lore_observability::troubleshoot_span!(error_text);
        let started = Instant::now();
        let index = self.index().await?;
        let candidates = index.error_patterns_for(version);

        let (diagnosis, degraded) = match self
            .matcher
            .diagnose(error_text, &candidates)
            .instrument(span)
            .await
        {
            Ok(diagnosis) => (diagnosis, false),
            Err(LoreError::Embedding(e)) => {
                self.note_degraded(&e.to_string(), "fallback guidance");
                (HybridMatcher::fallback(error_text), true)
            }
            Err(e) => return Err(e),
        };

        debug!(match_kind = ?diagnosis.match_kind(), degraded, "troubleshoot complete");
        self.log_query(QueryLogEntry::new(
            "troubleshoot",
            error_text,
            started.elapsed(),
            usize::from(diagnosis.record().is_some()),
            0,
            degraded,
        ));
        Ok(diagnosis)
    }

    /// Top documentation hit for `concept` plus the next few as related reading.
    pub async fn explain_concept(&self, concept: &str) -> LoreResult<ConceptExplanation> {
        let request = SearchRequest::new(concept).with_limit(self.config.explain_limit);
        let mut results = self.search_docs(&request).await?.results.into_iter();
        Ok(ConceptExplanation {
            best: results.next(),
            related: results.collect(),
        })
    }

    pub fn query_log(&self) -> Vec<QueryLogEntry> {
        self.lock_log().snapshot()
    }

    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.lock_tracker().history().to_vec()
    }

    /// Whether search is currently being served by the lexical fallback.
    pub fn is_degraded(&self) -> bool {
        self.lock_tracker().is_degraded(EMBEDDING_COMPONENT)
    }

    /// Records one event per outage; repeats while already degraded are
    /// only logged.
    fn note_degraded(&self, failure: &str, fallback: &str) {
        let mut tracker = self.lock_tracker();
        if tracker.is_degraded(EMBEDDING_COMPONENT) {
            debug!(failure, fallback, "embedding model still unavailable");
            return;
        }
        warn!(failure, fallback, "embedding model unavailable");
        tracker.record(DegradationEvent::now(EMBEDDING_COMPONENT, failure, fallback));
    }

    fn note_recovered(&self) {
        let mut tracker = self.lock_tracker();
        if tracker.recover(EMBEDDING_COMPONENT) > 0 {
            info!("embedding model recovered");
        }
    }

    fn log_query(&self, entry: QueryLogEntry) {
        self.lock_log().record(entry);
    }

    fn lock_tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradation.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_log(&self) -> MutexGuard<'_, QueryLog> {
        self.query_log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
