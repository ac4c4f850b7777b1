//! BM25 over per-record term lists.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lore_core::config::RetrievalConfig;
use lore_core::models::{RankedHit, Record};
use lore_tokens::tokenize;

use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length-normalization strength, in `[0, 1]`.
    pub b: f64,
}

impl From<&RetrievalConfig> for Bm25Params {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            k1: config.bm25_k1,
            b: config.bm25_b,
        }
    }
}

#[derive(Debug)]
struct IndexedDoc {
    id: String,
    len: usize,
    tf: HashMap<String, u32>,
}

/// BM25 ranker. Hits carry the document's position in the indexed corpus.
#[derive(Debug)]
pub struct LexicalRanker {
    params: Bm25Params,
    docs: Vec<IndexedDoc>,
    df: HashMap<String, usize>,
    avg_len: f64,
}

impl LexicalRanker {
    pub fn new(params: Bm25Params) -> Self {
        Self {
            params,
            docs: Vec::new(),
            df: HashMap::new(),
            avg_len: 0.0,
        }
    }

    /// Replace the index with `corpus`.
    pub fn index<I>(&mut self, corpus: I)
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        self.docs.clear();
        self.df.clear();

        let mut total_len = 0usize;
        for (id, tokens) in corpus {
            let mut tf: HashMap<String, u32> = HashMap::new();
            for token in &tokens {
                *tf.entry(token.clone()).or_default() += 1;
            }
            for term in tf.keys() {
                *self.df.entry(term.clone()).or_default() += 1;
            }
            total_len += tokens.len();
            self.docs.push(IndexedDoc {
                id,
                len: tokens.len(),
                tf,
            });
        }
        self.avg_len = if self.docs.is_empty() {
            0.0
        } else {
            total_len as f64 / self.docs.len() as f64
        };
    }

    /// Index records by their stored term lists, tokenizing the searchable
    /// text of records that have none.
    pub fn index_records(&mut self, records: &[Arc<Record>]) {
        self.index(records.iter().map(|r| {
            let terms = match r.lexical_terms() {
                Some(terms) => terms.iter().map(|t| t.to_lowercase()).collect(),
                None => tokenize(&r.searchable_text()),
            };
            (r.id.clone(), terms)
        }));
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// `ln(1 + (N - df + 0.5) / (df + 0.5))`. Unknown terms have `df = 0`.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.docs.len() as f64;
        let df = self.df.get(term).copied().unwrap_or(0) as f64;
        (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
    }

    fn score_doc(&self, doc: &IndexedDoc, terms: &[&str]) -> f64 {
        let Bm25Params { k1, b } = self.params;
        let avg_len = if self.avg_len > 0.0 { self.avg_len } else { 1.0 };
        let norm = k1 * (1.0 - b + b * (doc.len as f64 / avg_len));
        terms
            .iter()
            .filter_map(|term| doc.tf.get(*term).map(|&tf| (term, tf as f64)))
            .map(|(term, tf)| self.idf(term) * (tf * (k1 + 1.0)) / (tf + norm))
            .sum()
    }

    /// Rank indexed documents against `query`.
    ///
    /// Documents sharing no term with the query are not hits.
    pub fn search(&self, query: &str, limit: usize) -> Vec<RankedHit> {
        let query_terms = tokenize(query);
        let mut seen = HashSet::new();
        let terms: Vec<&str> = query_terms
            .iter()
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect();
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let hits = self
            .docs
            .iter()
            .enumerate()
            .map(|(index, doc)| RankedHit {
                id: doc.id.clone(),
                score: self.score_doc(doc, &terms),
                index,
            })
            .filter(|hit| hit.score > 0.0)
            .collect();
        scoring::finalize(hits, limit)
    }
}

impl Default for LexicalRanker {
    fn default() -> Self {
        Self::new(Bm25Params::from(&RetrievalConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn feathers_corpus() -> LexicalRanker {
        let mut ranker = LexicalRanker::default();
        ranker.index(vec![
            ("a".to_string(), terms(&["feathers", "service", "create"])),
            ("b".to_string(), terms(&["feathers", "hooks"])),
        ]);
        ranker
    }

    #[test]
    fn service_query_ranks_a_first() {
        let hits = feathers_corpus().search("feathers service", 10);
        assert_eq!(hits[0].id, "a");
        assert_eq!(hits[0].score, 1.0);
        assert_eq!(hits[1].id, "b");
        assert!(hits[1].score < 1.0);
    }

    #[test]
    fn unknown_terms_contribute_zero() {
        let ranker = feathers_corpus();
        assert!(ranker.search("kubernetes", 10).is_empty());
        let with_noise = ranker.search("feathers service kubernetes", 10);
        let without = ranker.search("feathers service", 10);
        assert_eq!(with_noise, without);
    }

    #[test]
    fn idf_is_lower_for_common_terms() {
        let ranker = feathers_corpus();
        assert!(ranker.idf("feathers") < ranker.idf("hooks"));
        assert!(ranker.idf("absent") > ranker.idf("hooks"));
    }

    #[test]
    fn reindex_replaces_prior_corpus() {
        let mut ranker = feathers_corpus();
        ranker.index(vec![("c".to_string(), terms(&["channels"]))]);
        assert_eq!(ranker.len(), 1);
        assert!(ranker.search("feathers", 10).is_empty());
        assert_eq!(ranker.search("channels", 10)[0].id, "c");
    }

    #[test]
    fn longer_documents_are_penalized() {
        let mut ranker = LexicalRanker::default();
        ranker.index(vec![
            ("short".to_string(), terms(&["hooks", "x1"])),
            (
                "long".to_string(),
                terms(&["hooks", "x1", "x2", "x3", "x4", "x5", "x6", "x7"]),
            ),
        ]);
        let hits = ranker.search("hooks", 10);
        assert_eq!(hits[0].id, "short");
        assert!(hits[1].score < 1.0);
    }

    #[test]
    fn limit_slices_results() {
        let hits = feathers_corpus().search("feathers", 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 1.0);
    }
}
