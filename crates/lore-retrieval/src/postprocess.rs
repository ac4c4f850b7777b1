//! Result shaping after ranking: per-source dedup, token budget, result count.

use std::collections::HashMap;
use std::sync::Arc;

use lore_core::models::{RankedHit, Record};
use lore_tokens::TokenCounter;

/// Hits that survived post-processing and their summed token cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped {
    pub hits: Vec<RankedHit>,
    pub total_tokens: usize,
}

pub struct ResultPostProcessor {
    dedup_cap: usize,
    counter: Arc<TokenCounter>,
}

impl ResultPostProcessor {
    pub fn new(dedup_cap: usize, counter: Arc<TokenCounter>) -> Self {
        Self { dedup_cap, counter }
    }

    /// Shape `hits`, which index into `records`.
    ///
    /// 1. Admit at most `dedup_cap` hits per `source_file`, in score order.
    /// 2. With a budget, admit hits while the running token total fits;
    ///    the first hit that would overflow ends the list.
    /// 3. Slice to `limit`.
    pub fn process(
        &self,
        hits: Vec<RankedHit>,
        records: &[Arc<Record>],
        token_budget: Option<usize>,
        limit: usize,
    ) -> Shaped {
        let mut per_source: HashMap<&str, usize> = HashMap::new();
        let mut admitted = Vec::with_capacity(hits.len().min(limit));
        let mut used = 0usize;

        for hit in hits {
            if admitted.len() == limit {
                break;
            }
            let Some(record) = records.get(hit.index) else {
                continue;
            };
            let seen = per_source.entry(record.source_file.as_str()).or_default();
            if *seen >= self.dedup_cap {
                continue;
            }

            let cost = self.counter.record_tokens(record);
            if let Some(budget) = token_budget {
                if used + cost > budget {
                    break;
                }
            }

            *seen += 1;
            used += cost;
            admitted.push(hit);
        }

        Shaped {
            hits: admitted,
            total_tokens: used,
        }
    }
}
