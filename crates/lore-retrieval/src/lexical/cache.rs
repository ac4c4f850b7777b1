//! BM25 indexes reused across queries until the corpus index is rebuilt.

use std::sync::{Arc, Mutex, PoisonError};

use lore_core::models::{Record, VersionFilter};
use lore_store::KnowledgeIndex;
use moka::sync::Cache;

use super::bm25::{Bm25Params, LexicalRanker};

/// Candidate set identity within one corpus index.
type CandidateKey = (Option<String>, VersionFilter);
type RankerCache = Cache<CandidateKey, Arc<LexicalRanker>>;

const MAX_CANDIDATE_SETS: u64 = 256;

/// One BM25 ranker per (category, version) candidate set of the current
/// [`KnowledgeIndex`].
///
/// Rankers are tied to the index they were built from: hit positions refer
/// to that index's candidate order. A new index gets a fresh cache.
pub struct LexicalCache {
    params: Bm25Params,
    current: Mutex<Option<(Arc<KnowledgeIndex>, RankerCache)>>,
}

impl LexicalCache {
    pub fn new(params: Bm25Params) -> Self {
        Self {
            params,
            current: Mutex::new(None),
        }
    }

    /// Ranker over `candidates`, which must be
    /// `index.candidates(category, version)`.
    pub fn ranker(
        &self,
        index: &Arc<KnowledgeIndex>,
        category: Option<&str>,
        version: &VersionFilter,
        candidates: &[Arc<Record>],
    ) -> Arc<LexicalRanker> {
        let key = (category.map(str::to_string), version.clone());
        self.rankers_for(index).get_with(key, || {
            let mut ranker = LexicalRanker::new(self.params);
            ranker.index_records(candidates);
            tracing::debug!(documents = ranker.len(), "lexical index built");
            Arc::new(ranker)
        })
    }

    fn rankers_for(&self, index: &Arc<KnowledgeIndex>) -> RankerCache {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        match &*current {
            Some((built_from, cache)) if Arc::ptr_eq(built_from, index) => cache.clone(),
            _ => {
                let cache = Cache::new(MAX_CANDIDATE_SETS);
                *current = Some((Arc::clone(index), cache.clone()));
                cache
            }
        }
    }
}
