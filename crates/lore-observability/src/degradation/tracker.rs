//! History of fallbacks taken by components, with recovery marking.

use chrono::{DateTime, Utc};
use lore_core::models::DegradationEvent;
use serde::{Deserialize, Serialize};

use crate::tracing_setup::events;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    Active,
    Recovered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

impl TrackedDegradation {
    pub fn is_active(&self) -> bool {
        self.recovery_status == RecoveryStatus::Active
    }
}

#[derive(Debug, Clone, Default)]
pub struct DegradationTracker {
    history: Vec<TrackedDegradation>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a component fell back. Emits a structured warning.
    pub fn record(&mut self, event: DegradationEvent) {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.history.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Close every open degradation of `component`. Returns how many were closed.
    pub fn recover(&mut self, component: &str) -> usize {
        let now = Utc::now();
        let mut closed = 0;
        for tracked in self
            .history
            .iter_mut()
            .filter(|t| t.event.component == component && t.is_active())
        {
            tracked.recovery_status = RecoveryStatus::Recovered;
            tracked.recovered_at = Some(now);
            closed += 1;
        }
        closed
    }

    pub fn history(&self) -> &[TrackedDegradation] {
        &self.history
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.history
            .iter()
            .any(|t| t.event.component == component && t.is_active())
    }

    /// Most recent open degradation of `component`.
    pub fn latest_active(&self, component: &str) -> Option<&TrackedDegradation> {
        self.history
            .iter()
            .rev()
            .find(|t| t.event.component == component && t.is_active())
    }
}
