//! Property tests: score bounds, ordering, and the dedup cap.

use std::collections::HashMap;
use std::sync::Arc;

use lore_core::config::Pooling;
use lore_core::models::{EmbeddingScheme, RankedHit, Record, TokenInfo, Version};
use lore_retrieval::vector::rank_by_vector;
use lore_retrieval::{LexicalRanker, ResultPostProcessor};
use lore_tokens::TokenCounter;
use proptest::prelude::*;
use test_fixtures::normalized;

const DIMS: usize = 4;

fn scheme() -> EmbeddingScheme {
    EmbeddingScheme {
        model_id: "prop".to_string(),
        pooling: Pooling::Mean,
        normalized: true,
        dimensions: DIMS,
    }
}

fn unit_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, DIMS)
        .prop_filter("non-zero", |v| v.iter().any(|x| x.abs() > 1e-3))
        .prop_map(|v| normalized(&v))
}

fn assert_bounded(hits: &[RankedHit]) {
    for hit in hits {
        assert!((0.0..=1.0).contains(&hit.score), "score out of range: {}", hit.score);
    }
    if let Some(top) = hits.first() {
        assert_eq!(top.score, 1.0);
    }
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

const VOCAB: &[&str] = &["feathers", "service", "hooks", "auth", "channel", "query", "adapter"];

proptest! {
    #[test]
    fn vector_scores_are_bounded(
        query in unit_vector(),
        embeddings in prop::collection::vec(prop::option::of(unit_vector()), 0..30),
        limit in 1usize..20,
        min_score in 0.01f64..0.9,
    ) {
        let candidates: Vec<Arc<Record>> = embeddings
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let mut r = Record::new(format!("r{i}"), "t", "c", Version::V5);
                r.embedding = e;
                Arc::new(r)
            })
            .collect();
        let hits = rank_by_vector(&query, &scheme(), &candidates, limit, min_score);
        prop_assert!(hits.len() <= limit);
        assert_bounded(&hits);
        for hit in &hits {
            prop_assert!(candidates[hit.index].is_embedded());
        }
    }

    #[test]
    fn lexical_scores_are_bounded(
        docs in prop::collection::vec(prop::collection::vec(prop::sample::select(VOCAB), 0..8), 0..20),
        query in prop::collection::vec(prop::sample::select(VOCAB), 1..4),
        limit in 1usize..20,
    ) {
        let mut ranker = LexicalRanker::default();
        ranker.index(docs.iter().enumerate().map(|(i, terms)| {
            (format!("d{i}"), terms.iter().map(|t| t.to_string()).collect())
        }));
        let hits = ranker.search(&query.join(" "), limit);
        prop_assert!(hits.len() <= limit);
        assert_bounded(&hits);
    }

    #[test]
    fn dedup_cap_is_respected(
        sources in prop::collection::vec(0usize..4, 0..40),
        cap in 1usize..4,
        limit in 1usize..50,
    ) {
        let records: Vec<Arc<Record>> = sources
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let mut r = Record::new(format!("r{i}"), "t", "c", Version::V5);
                r.source_file = format!("doc{s}.md");
                r.tokens = Some(TokenInfo::Count(1));
                Arc::new(r)
            })
            .collect();
        let hits: Vec<RankedHit> = records
            .iter()
            .enumerate()
            .map(|(index, r)| RankedHit { id: r.id.clone(), score: 1.0, index })
            .collect();

        let processor = ResultPostProcessor::new(cap, Arc::new(TokenCounter::new(16)));
        let shaped = processor.process(hits, &records, None, limit);

        prop_assert!(shaped.hits.len() <= limit);
        let mut per_source: HashMap<&str, usize> = HashMap::new();
        for hit in &shaped.hits {
            *per_source.entry(records[hit.index].source_file.as_str()).or_default() += 1;
        }
        prop_assert!(per_source.values().all(|&n| n <= cap));
    }
}
