//! Shared test embedders.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lore_core::config::Pooling;
use lore_core::config::StoreConfig;
use lore_core::errors::{EmbeddingError, LoreResult};
use lore_core::models::EmbeddingScheme;
use lore_core::traits::QueryEmbedder;
use lore_store::KnowledgeStore;
use test_fixtures::{normalized, FIXTURE_DIMENSIONS, FIXTURE_MODEL};

fn fixture_scheme() -> EmbeddingScheme {
    EmbeddingScheme {
        model_id: FIXTURE_MODEL.to_string(),
        pooling: Pooling::Mean,
        normalized: true,
        dimensions: FIXTURE_DIMENSIONS,
    }
}

/// Maps keywords onto the golden-corpus axes. Unknown text embeds to zero.
pub struct KeywordEmbedder {
    scheme: EmbeddingScheme,
    calls: AtomicUsize,
}

impl KeywordEmbedder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            scheme: fixture_scheme(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

const AXES: [&[&str]; 4] = [
    &["hook"],
    &["service"],
    &["auth", "token", "jwt"],
    &["database", "connect"],
];

#[async_trait]
impl QueryEmbedder for KeywordEmbedder {
    async fn embed_query(&self, query: &str) -> LoreResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let lowered = query.to_lowercase();
        let v: Vec<f32> = AXES
            .iter()
            .map(|words| {
                if words.iter().any(|w| lowered.contains(w)) {
                    1.0
                } else {
                    0.0
                }
            })
            .collect();
        Ok(normalized(&v))
    }

    fn scheme(&self) -> &EmbeddingScheme {
        &self.scheme
    }
}

/// Embedder whose model never loads.
pub struct FailingEmbedder {
    scheme: EmbeddingScheme,
    calls: AtomicUsize,
}

impl FailingEmbedder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            scheme: fixture_scheme(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryEmbedder for FailingEmbedder {
    async fn embed_query(&self, _query: &str) -> LoreResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::ModelLoadFailed {
            model: FIXTURE_MODEL.to_string(),
            reason: "weights not found".to_string(),
        }
        .into())
    }

    fn scheme(&self) -> &EmbeddingScheme {
        &self.scheme
    }
}

pub fn golden_store() -> Arc<KnowledgeStore> {
    Arc::new(KnowledgeStore::new(StoreConfig {
        root: test_fixtures::corpus_root().to_string_lossy().into_owned(),
        ..StoreConfig::default()
    }))
}

pub fn store_at(root: &str) -> Arc<KnowledgeStore> {
    Arc::new(KnowledgeStore::new(StoreConfig {
        root: root.to_string(),
        ..StoreConfig::default()
    }))
}
