//! Degradation tracking for components running on a fallback path.

mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};
