//! # Yiield Scoring
//!
//! Security score for DeFi stablecoin pools.
//!
//! ## Score Formula
//!
//! ```text
//! base      = audits + age + tvl + exploits             (0-100, 25 per factor)
//! raw_total = base + auditor + team + insurance + gov   (0-120)
//! total     = min(100, raw_total / 120 * 100)           (dossier known)
//! total     = base                                      (no dossier)
//! ```
//!
//! The total maps to a [`SecurityRating`] tier for display.
//!
//! ## Pipeline
//!
//! ```text
//! PoolRecord ──► PoolMetrics ──► BaseScorer ──► SecurityFactors
//!                                                   │
//! project name ──► ProtocolDirectory::resolve ──► ScoreEnhancer ──► YiieldScoreBreakdown ──► SecurityRating
//! ```
//!
//! Every function here is pure and synchronous. Bad upstream numbers are
//! clamped, logged at `warn`, and never turned into errors.

pub mod base;
pub mod enhancer;
pub mod format;
pub mod listing;

pub use base::BaseScorer;
pub use enhancer::ScoreEnhancer;
pub use format::{format_apy, format_score, format_tvl};
pub use listing::{rank, ListingDisplay, ListingFilter, ListingScorer, ScoredListing};

pub use yiield_common::{
    PoolMetrics, PoolRecord, ProtocolDossier, SecurityFactors, SecurityRating,
    YiieldScoreBreakdown,
};
pub use yiield_directory::{ProtocolDirectory, ResolutionStep};

/// Base security score from pool-observable signals
pub fn score_base(
    audits: i64,
    protocol_age_days: i64,
    tvl_usd: f64,
    exploits_count: i64,
) -> SecurityFactors {
    BaseScorer::score(&PoolMetrics::new(audits, protocol_age_days, tvl_usd, exploits_count))
}

/// Enhance a base score with dossier bonuses
pub fn enhance(base_score: f64, dossier: Option<&ProtocolDossier>) -> YiieldScoreBreakdown {
    ScoreEnhancer::enhance(base_score, dossier)
}

/// Resolve a protocol name against a directory
pub fn resolve<'a>(
    directory: &'a ProtocolDirectory,
    protocol_name: &str,
) -> Option<&'a ProtocolDossier> {
    directory.resolve(protocol_name)
}

/// Risk tier for a score
pub fn classify(score: f64) -> SecurityRating {
    SecurityRating::from_score(score)
}
