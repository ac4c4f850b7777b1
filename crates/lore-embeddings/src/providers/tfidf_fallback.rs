//! Hashed term-frequency provider.
//!
//! Deterministic fixed-dimension vectors with no model files. Usable offline
//! and in tests; its vectors are not comparable with neural embeddings.

use std::collections::HashMap;

use lore_core::errors::EmbeddingError;
use lore_core::traits::EmbeddingProvider;
use lore_tokens::tokenize;

use crate::pooling::l2_normalize;

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let terms = tokenize(text);
        let mut v = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return v;
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *tf.entry(term.as_str()).or_default() += 1.0;
        }
        let total = terms.len() as f32;
        for (term, count) in tf {
            // Longer terms are rarer; weight them up.
            let idf = 1.0 + (term.len() as f32).ln();
            v[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }
        l2_normalize(&mut v);
        v
    }
}

impl EmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn stop_words_only_gives_zero_vector() {
        let p = TfIdfFallback::new(64);
        let v = p.embed("the and of").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_length() {
        let p = TfIdfFallback::new(256);
        let v = p.embed("feathers service hooks authentication").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "got {norm}");
    }

    #[test]
    fn deterministic_and_batch_consistent() {
        let p = TfIdfFallback::new(128);
        let texts = vec!["service hooks".to_string(), "database adapter".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        assert_eq!(batch[0], p.embed("service hooks").unwrap());
        assert_eq!(batch[1], p.embed("database adapter").unwrap());
    }

    #[test]
    fn overlapping_texts_score_higher() {
        let p = TfIdfFallback::new(256);
        let a = p.embed("service hooks registration").unwrap();
        let b = p.embed("service hooks ordering").unwrap();
        let c = p.embed("database connection refused").unwrap();
        assert!(dot(&a, &b) > dot(&a, &c));
    }
}
