//! # Yiield Common
//!
//! Shared value types and errors for the Yiield security score.
//!
//! ## Core Types
//!
//! - [`PoolRecord`]: Raw pool row from the upstream yield aggregator
//! - [`PoolMetrics`]: Pool-observable signals fed to the base scorer
//! - [`SecurityFactors`]: Base score (0-100) with its four sub-scores
//! - [`ProtocolDossier`]: Curated audit/team/insurance/governance facts
//! - [`YiieldScoreBreakdown`]: Enhanced score with every bonus exposed
//! - [`SecurityRating`]: Discrete risk tier used for display
//!
//! Every type here is a plain value. Nothing is shared or mutated after
//! construction, so all of them are `Send + Sync` and cheap to clone.

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{DirectoryError, Result, YiieldError};
pub use types::{
    breakdown::YiieldScoreBreakdown,
    dossier::{
        AuditorRecord, AuditorTier, GovernanceRecord, GovernanceType, InsuranceRecord,
        ProtocolDossier, TeamStatus,
    },
    factors::SecurityFactors,
    pool::{PoolMetrics, PoolRecord},
    rating::SecurityRating,
};

/// Yiield version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum value of the base score and of the normalized composite score
pub const MAX_SCORE: f64 = 100.0;

/// Minimum value of any score
pub const MIN_SCORE: f64 = 0.0;

/// Maximum points a single base factor contributes
pub const MAX_FACTOR_SCORE: u8 = 25;

/// Theoretical ceiling of base score plus every bonus (100 + 10 + 5 + 3 + 2)
pub const MAX_RAW_TOTAL: f64 = 120.0;
