//! In-process log of recent boundary operations.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One served request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    /// `search_docs`, `troubleshoot`, ...
    pub operation: String,
    pub query: String,
    pub latency: Duration,
    pub result_count: usize,
    pub total_tokens: usize,
    /// Served without the embedding model.
    pub degraded: bool,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    pub fn new(
        operation: impl Into<String>,
        query: impl Into<String>,
        latency: Duration,
        result_count: usize,
        total_tokens: usize,
        degraded: bool,
    ) -> Self {
        Self {
            operation: operation.into(),
            query: query.into(),
            latency,
            result_count,
            total_tokens,
            degraded,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Aggregates over the retained entries of one operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperationStats {
    pub count: usize,
    pub avg_latency: Duration,
    pub empty_results: usize,
    pub degraded: usize,
}

/// Ring buffer of the most recent entries.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: VecDeque<QueryLogEntry>,
    capacity: usize,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(lore_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }
}

impl QueryLog {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1_024)),
            capacity,
        }
    }

    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            operation = %entry.operation,
            latency_ms = entry.latency.as_millis() as u64,
            results = entry.result_count,
            tokens = entry.total_tokens,
            degraded = entry.degraded,
            "query served"
        );
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &QueryLogEntry> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Vec<QueryLogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self, operation: &str) -> OperationStats {
        let mut stats = OperationStats::default();
        let mut total = Duration::ZERO;
        for entry in self.entries.iter().filter(|e| e.operation == operation) {
            stats.count += 1;
            total += entry.latency;
            stats.empty_results += usize::from(entry.result_count == 0);
            stats.degraded += usize::from(entry.degraded);
        }
        if stats.count > 0 {
            stats.avg_latency = total / stats.count as u32;
        }
        stats
    }
}
