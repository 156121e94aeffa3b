//! YiieldScoreBreakdown - Base score plus dossier bonuses, normalized to 0-100
//!
//! ```text
//! raw_total = base + auditor + team + insurance + governance   (max 120)
//! total     = min(100, raw_total / 120 * 100)
//! ```
//!
//! When no dossier is known the base score passes through unnormalized.

use serde::{Deserialize, Serialize};

use crate::types::rating::SecurityRating;

/// Enhanced score with every component exposed for transparency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YiieldScoreBreakdown {
    /// Base security score (0-100)
    pub base_score: f64,

    /// Best auditor tier present (0-10)
    pub auditor_tier_bonus: u8,

    /// Team transparency (0-5)
    pub team_verification_bonus: u8,

    /// Deposit cover present (0-3)
    pub insurance_bonus: u8,

    /// On-chain governance present (0-2)
    pub governance_bonus: u8,

    /// Base plus all bonuses (max 120)
    pub raw_total: f64,

    /// Normalized composite (0-100)
    pub total: f64,
}

impl YiieldScoreBreakdown {
    /// Sum of the four bonuses (0-20)
    pub fn bonus_total(&self) -> u8 {
        self.auditor_tier_bonus
            + self.team_verification_bonus
            + self.insurance_bonus
            + self.governance_bonus
    }

    /// Risk tier of the composite score
    pub fn rating(&self) -> SecurityRating {
        SecurityRating::from_score(self.total)
    }
}

impl std::fmt::Display for YiieldScoreBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "YiieldScore({:.1}/100, base={:.1}, bonus=+{}, raw={:.1}/120)",
            self.total,
            self.base_score,
            self.bonus_total(),
            self.raw_total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_total_and_rating() {
        let breakdown = YiieldScoreBreakdown {
            base_score: 90.0,
            auditor_tier_bonus: 10,
            team_verification_bonus: 5,
            insurance_bonus: 0,
            governance_bonus: 2,
            raw_total: 107.0,
            total: 107.0 / 120.0 * 100.0,
        };
        assert_eq!(breakdown.bonus_total(), 17);
        assert_eq!(breakdown.rating(), SecurityRating::Excellent);
        assert!(breakdown.to_string().contains("bonus=+17"));
    }

    #[test]
    fn test_default_is_danger() {
        assert_eq!(YiieldScoreBreakdown::default().rating(), SecurityRating::Danger);
    }
}
