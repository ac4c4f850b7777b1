//! EmbeddingEngine: lazy, shared model initialization plus query embedding.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use lore_core::config::EmbeddingConfig;
use lore_core::errors::{EmbeddingError, LoreResult};
use lore_core::models::EmbeddingScheme;
use lore_core::traits::{EmbeddingProvider, QueryEmbedder};
use lore_observability::events;
use tracing::{debug, Instrument};

use crate::loader::{create_loader, ModelLoader};
use crate::query_cache::QueryCache;

type LoadResult = Result<Arc<dyn EmbeddingProvider>, EmbeddingError>;
type LoadFuture = Shared<BoxFuture<'static, LoadResult>>;

enum ModelState {
    Idle,
    /// One initialization in flight; every caller awaits this same future.
    Loading(LoadFuture),
    Ready(Arc<dyn EmbeddingProvider>),
}

/// Shared query embedder.
///
/// The model is built on first use. A failed build resets the engine to
/// idle so the next call retries.
pub struct EmbeddingEngine {
    loader: Arc<dyn ModelLoader>,
    state: Mutex<ModelState>,
    cache: QueryCache,
    scheme: EmbeddingScheme,
    query_prefix: String,
}

impl EmbeddingEngine {
    /// Engine for the provider named in `config`.
    pub fn new(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        Ok(Self::with_loader(config, create_loader(config)?))
    }

    /// Engine over an explicit loader.
    pub fn with_loader(config: &EmbeddingConfig, loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            loader,
            state: Mutex::new(ModelState::Idle),
            cache: QueryCache::new(config.query_cache_size),
            scheme: EmbeddingScheme::from(config),
            query_prefix: config.query_prefix.clone(),
        }
    }

    /// Whether the model has finished loading.
    pub fn is_ready(&self) -> bool {
        matches!(*self.lock_state(), ModelState::Ready(_))
    }

    pub fn model_id(&self) -> &str {
        &self.scheme.model_id
    }

    /// The loaded provider, initializing it if needed.
    pub async fn provider(&self) -> LoadResult {
        let pending = {
            let mut state = self.lock_state();
            match &*state {
                ModelState::Ready(provider) => return Ok(Arc::clone(provider)),
                ModelState::Loading(pending) => pending.clone(),
                ModelState::Idle => {
                    let pending = self.start_load();
                    *state = ModelState::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut state = self.lock_state();
        let still_current = matches!(&*state, ModelState::Loading(p) if p.ptr_eq(&pending));
        if still_current {
            match &result {
                Ok(provider) => {
                    events::model_loaded(self.loader.model_id(), provider.dimensions());
                    *state = ModelState::Ready(Arc::clone(provider));
                }
                Err(e) => {
                    events::model_load_failed(self.loader.model_id(), &e.to_string());
                    *state = ModelState::Idle;
                }
            }
        }
        result
    }

    fn start_load(&self) -> LoadFuture {
        let loader = Arc::clone(&self.loader);
        let model = self.loader.model_id().to_string();
        let span = lore_observability::embedding_span!(model, self.scheme.dimensions);
        async move {
            match tokio::task::spawn_blocking(move || loader.load()).await {
                Ok(result) => result,
                Err(e) => Err(EmbeddingError::ModelLoadFailed {
                    model,
                    reason: format!("loader task failed: {e}"),
                }),
            }
        }
        .instrument(span)
        .boxed()
        .shared()
    }

    /// Query text as fed to the model.
    pub fn prepare(&self, query: &str) -> String {
        format!("{}{}", self.query_prefix, query.trim())
    }

    pub fn clear_query_cache(&self) {
        self.cache.clear();
    }

    fn lock_state(&self) -> MutexGuard<'_, ModelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QueryEmbedder for EmbeddingEngine {
    async fn embed_query(&self, query: &str) -> LoreResult<Vec<f32>> {
        let prepared = self.prepare(query);
        let key = QueryCache::key(&prepared);
        if let Some(hit) = self.cache.get(&key) {
            debug!("query embedding cache hit");
            return Ok(hit);
        }

        let provider = self.provider().await?;
        let vector = tokio::task::spawn_blocking(move || provider.embed(&prepared))
            .await
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("inference task failed: {e}"),
            })??;

        if vector.len() != self.scheme.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.scheme.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        self.cache.insert(key, vector.clone());
        Ok(vector)
    }

    fn scheme(&self) -> &EmbeddingScheme {
        &self.scheme
    }
}
