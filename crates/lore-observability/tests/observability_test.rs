use std::time::Duration;

use lore_core::config::ObservabilityConfig;
use lore_observability::{
    init_tracing, init_tracing_with_filter, OperationStats, QueryLog, QueryLogEntry,
};

fn entry(query: &str, latency_ms: u64, degraded: bool) -> QueryLogEntry {
    QueryLogEntry::new(
        "search_docs",
        query,
        Duration::from_millis(latency_ms),
        3,
        120,
        degraded,
    )
}

#[test]
fn query_log_is_bounded() {
    let mut log = QueryLog::with_capacity(2);
    log.record(entry("a", 1, false));
    log.record(entry("b", 1, false));
    log.record(entry("c", 1, false));
    assert_eq!(log.len(), 2);
    assert_eq!(log.entries().next().unwrap().query, "b");
}

#[test]
fn query_log_stats_per_operation() {
    let mut log = QueryLog::default();
    assert_eq!(log.stats("search_docs"), OperationStats::default());
    log.record(entry("a", 10, false));
    log.record(entry("b", 30, true));
    log.record(QueryLogEntry::new(
        "troubleshoot",
        "ECONNREFUSED",
        Duration::from_millis(500),
        0,
        0,
        false,
    ));

    let search = log.stats("search_docs");
    assert_eq!(search.count, 2);
    assert_eq!(search.avg_latency, Duration::from_millis(20));
    assert_eq!(search.degraded, 1);
    assert_eq!(search.empty_results, 0);
    assert_eq!(log.stats("troubleshoot").empty_results, 1);
}

#[test]
fn query_log_entry_serializes() {
    let json = serde_json::to_value(entry("hooks", 5, false)).unwrap();
    assert_eq!(json["operation"], "search_docs");
    assert_eq!(json["result_count"], 3);
}

#[test]
fn second_init_reports_existing_subscriber() {
    let _ = init_tracing_with_filter("debug");
    assert!(!init_tracing(&ObservabilityConfig::default()));
}
