use std::sync::Arc;

use lore_core::constants::MAX_PATTERN_SIZE_BYTES;
use lore_core::models::Record;
use lore_observability::events;
use moka::sync::Cache;
use regex::{Regex, RegexBuilder};

/// Compiled error-pattern cache.
///
/// Invalid patterns are cached as `None` so each is reported once.
pub struct PatternSet {
    compiled: Cache<String, Option<Arc<Regex>>>,
}

impl PatternSet {
    pub fn new(capacity: u64) -> Self {
        Self {
            compiled: Cache::new(capacity),
        }
    }

    fn compile(&self, record: &Record, pattern: &str) -> Option<Arc<Regex>> {
        self.compiled.get_with(pattern.to_string(), || {
            match RegexBuilder::new(pattern)
                .case_insensitive(true)
                .size_limit(MAX_PATTERN_SIZE_BYTES)
                .build()
            {
                Ok(re) => Some(Arc::new(re)),
                Err(e) => {
                    events::pattern_rejected(&record.id, &e.to_string());
                    None
                }
            }
        })
    }

    /// The candidate whose pattern matches `text`, preferring the longest
    /// pattern string. Earlier candidates win ties.
    pub fn best_match(&self, text: &str, candidates: &[Arc<Record>]) -> Option<Arc<Record>> {
        let mut best: Option<(usize, &Arc<Record>)> = None;
        for record in candidates {
            let Some(pattern) = record.pattern.as_deref().filter(|p| !p.is_empty()) else {
                continue;
            };
            let Some(re) = self.compile(record, pattern) else {
                continue;
            };
            if !re.is_match(text) {
                continue;
            }
            let specificity = pattern.chars().count();
            if best.map_or(true, |(len, _)| specificity > len) {
                best = Some((specificity, record));
            }
        }
        best.map(|(_, record)| Arc::clone(record))
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new(4_096)
    }
}
