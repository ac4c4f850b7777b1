//! # lore-observability
//!
//! Tracing setup, structured events for contained failures, degradation
//! tracking, and an in-process query log.

pub mod degradation;
pub mod query_log;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use query_log::{OperationStats, QueryLog, QueryLogEntry};
pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
