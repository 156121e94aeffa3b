//! SecurityFactors - Base security score (0-100) from pool-observable signals
//!
//! Four factors contribute up to 25 points each:
//! - Audits: how many independent audits the protocol has
//! - Age: how long the protocol has survived in production
//! - TVL: how much capital trusts the pool
//! - Exploits: how often the protocol has been exploited (penalizing)

use serde::{Deserialize, Serialize};

use crate::MAX_FACTOR_SCORE;

/// Base score breakdown by factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SecurityFactors {
    /// Audit coverage (0-25 points)
    pub audit_score: u8,

    /// Protocol age (0-25 points)
    pub age_score: u8,

    /// Total value locked (5-25 points)
    pub tvl_score: u8,

    /// Exploit history (0-25 points, 25 = never exploited)
    pub exploit_score: u8,

    /// Sum of the four factors (0-100)
    pub total: u8,
}

impl SecurityFactors {
    /// Assemble factors, capping each at 25 and deriving the total
    pub fn new(audit_score: u8, age_score: u8, tvl_score: u8, exploit_score: u8) -> Self {
        let audit_score = audit_score.min(MAX_FACTOR_SCORE);
        let age_score = age_score.min(MAX_FACTOR_SCORE);
        let tvl_score = tvl_score.min(MAX_FACTOR_SCORE);
        let exploit_score = exploit_score.min(MAX_FACTOR_SCORE);

        Self {
            audit_score,
            age_score,
            tvl_score,
            exploit_score,
            total: audit_score + age_score + tvl_score + exploit_score,
        }
    }

    /// Base score as the float the enhancer consumes
    #[inline]
    pub fn score(&self) -> f64 {
        f64::from(self.total)
    }
}

impl std::fmt::Display for SecurityFactors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SecurityFactors({}/100: audits={}, age={}, tvl={}, exploits={})",
            self.total, self.audit_score, self.age_score, self.tvl_score, self.exploit_score
        )
    }
}
