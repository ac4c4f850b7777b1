mod degradation_event;
mod diagnosis;
mod embedding_scheme;
mod hit;
mod record;
mod version;

pub use degradation_event::DegradationEvent;
pub use diagnosis::{Diagnosis, MatchKind};
pub use embedding_scheme::EmbeddingScheme;
pub use hit::{RankedHit, ScoredResult};
pub use record::{Record, TokenInfo};
pub use version::{Version, VersionFilter};
