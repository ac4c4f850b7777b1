use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Record;

/// Which troubleshooting stage produced a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Pattern,
    Semantic,
    Fallback,
}

/// Outcome of error troubleshooting. Exactly one stage wins.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "matchKind", rename_all = "lowercase")]
pub enum Diagnosis {
    /// A record's regex matched the error text.
    Pattern { record: Arc<Record> },
    /// Nearest error record by embedding similarity.
    Semantic {
        record: Arc<Record>,
        confidence: f64,
    },
    /// Nothing matched; generic guidance echoing the error text.
    Fallback { guidance: String },
}

impl Diagnosis {
    pub fn match_kind(&self) -> MatchKind {
        match self {
            Diagnosis::Pattern { .. } => MatchKind::Pattern,
            Diagnosis::Semantic { .. } => MatchKind::Semantic,
            Diagnosis::Fallback { .. } => MatchKind::Fallback,
        }
    }

    pub fn record(&self) -> Option<&Arc<Record>> {
        match self {
            Diagnosis::Pattern { record } | Diagnosis::Semantic { record, .. } => Some(record),
            Diagnosis::Fallback { .. } => None,
        }
    }

    pub fn confidence(&self) -> Option<f64> {
        match self {
            Diagnosis::Semantic { confidence, .. } => Some(*confidence),
            _ => None,
        }
    }
}
