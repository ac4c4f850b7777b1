//! Error troubleshooting: pattern, then semantic, then fallback guidance.

mod guidance;
mod matcher;
mod patterns;

pub use guidance::fallback_guidance;
pub use matcher::HybridMatcher;
pub use patterns::PatternSet;
