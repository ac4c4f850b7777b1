use std::sync::Arc;

use lore_core::errors::LoreResult;
use lore_core::models::{EmbeddingScheme, RankedHit, Record};
use lore_core::traits::QueryEmbedder;
use lore_observability::events;
use rayon::prelude::*;

use super::similarity::dot;
use crate::scoring;

enum Outcome {
    Scored(f64),
    Unembedded,
    SchemeMismatch,
    DimensionMismatch,
}

fn compare(query: &[f32], scheme: &EmbeddingScheme, record: &Record) -> Outcome {
    let Some(embedding) = record.embedding.as_deref().filter(|e| !e.is_empty()) else {
        return Outcome::Unembedded;
    };
    if !scheme.accepts(record.embedding_model.as_deref()) {
        return Outcome::SchemeMismatch;
    }
    match dot(query, embedding) {
        Some(score) => Outcome::Scored(score),
        None => Outcome::DimensionMismatch,
    }
}

/// Score every candidate against `query` and return the normalized top hits.
///
/// Unembedded candidates and candidates embedded under another model are
/// skipped. A dimension mismatch scores 0 for that candidate.
pub fn rank_by_vector(
    query: &[f32],
    scheme: &EmbeddingScheme,
    candidates: &[Arc<Record>],
    limit: usize,
    min_score: f64,
) -> Vec<RankedHit> {
    let outcomes: Vec<Outcome> = candidates
        .par_iter()
        .map(|record| compare(query, scheme, record))
        .collect();

    let mut scheme_mismatch = 0;
    let mut dimension_mismatch = 0;
    let mut hits = Vec::new();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        let score = match outcome {
            Outcome::Scored(score) => score,
            Outcome::Unembedded => continue,
            Outcome::SchemeMismatch => {
                scheme_mismatch += 1;
                continue;
            }
            Outcome::DimensionMismatch => {
                dimension_mismatch += 1;
                0.0
            }
        };
        if score < min_score {
            continue;
        }
        hits.push(RankedHit {
            id: candidates[index].id.clone(),
            score,
            index,
        });
    }
    if scheme_mismatch > 0 || dimension_mismatch > 0 {
        events::candidates_excluded(scheme_mismatch, dimension_mismatch);
    }

    scoring::finalize(hits, limit)
}

/// Vector ranker over an injected query embedder.
#[derive(Clone)]
pub struct VectorRanker {
    embedder: Arc<dyn QueryEmbedder>,
}

impl VectorRanker {
    pub fn new(embedder: Arc<dyn QueryEmbedder>) -> Self {
        Self { embedder }
    }

    /// Embed `query` and rank `candidates` against it.
    ///
    /// An empty query, an empty candidate set, or a set with no embedded
    /// record returns no hits without touching the model.
    pub async fn search(
        &self,
        query: &str,
        candidates: &[Arc<Record>],
        limit: usize,
        min_score: f64,
    ) -> LoreResult<Vec<RankedHit>> {
        if query.trim().is_empty()
            || limit == 0
            || !candidates.iter().any(|r| r.is_embedded())
        {
            return Ok(Vec::new());
        }
        let query_vector = self.embedder.embed_query(query).await?;
        Ok(rank_by_vector(
            &query_vector,
            self.embedder.scheme(),
            candidates,
            limit,
            min_score,
        ))
    }
}
