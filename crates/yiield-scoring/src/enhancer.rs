//! Score enhancer: base score plus curated dossier bonuses
//!
//! Bonuses take the best signal present in each category rather than
//! summing, so ten tier-3 audits never beat one tier-1 audit.
//!
//! | Category   | Signal                      | Points |
//! |------------|-----------------------------|--------|
//! | Auditors   | best tier 1 / 2 / 3 / none  | 10 / 6 / 3 / 0 |
//! | Team       | doxxed / verified / anon    | 5 / 3 / 0 |
//! | Insurance  | any cover                   | 3      |
//! | Governance | has governance              | 2      |
//!
//! With a dossier the sum is normalized against the 120-point ceiling. A
//! perfect base score with no bonuses therefore lands at ~83.3, not 100.
//! Without a dossier the base score passes through unchanged.

use tracing::warn;
use yiield_common::{
    AuditorTier, PoolMetrics, ProtocolDossier, SecurityFactors, TeamStatus, YiieldScoreBreakdown,
    MAX_RAW_TOTAL, MAX_SCORE, MIN_SCORE,
};

use crate::base::BaseScorer;

/// Maximum auditor bonus (tier-1 auditor present)
pub const MAX_AUDITOR_BONUS: u8 = 10;

/// Maximum team bonus (doxxed team)
pub const MAX_TEAM_BONUS: u8 = 5;

/// Insurance bonus
pub const INSURANCE_BONUS: u8 = 3;

/// Governance bonus
pub const GOVERNANCE_BONUS: u8 = 2;

pub struct ScoreEnhancer;

impl ScoreEnhancer {
    /// Enhance a base score with dossier bonuses
    ///
    /// `base_score` outside 0-100 is a caller bug; it is clamped and logged
    /// rather than allowed to break a render path.
    pub fn enhance(base_score: f64, dossier: Option<&ProtocolDossier>) -> YiieldScoreBreakdown {
        let base_score = clamp_base(base_score);

        let Some(dossier) = dossier else {
            return YiieldScoreBreakdown {
                base_score,
                raw_total: base_score,
                total: base_score,
                ..Default::default()
            };
        };

        let auditor_tier_bonus = Self::auditor_tier_bonus(dossier);
        let team_verification_bonus = Self::team_verification_bonus(dossier);
        let insurance_bonus = Self::insurance_bonus(dossier);
        let governance_bonus = Self::governance_bonus(dossier);

        let raw_total = base_score
            + f64::from(
                auditor_tier_bonus + team_verification_bonus + insurance_bonus + governance_bonus,
            );
        let total = (raw_total / MAX_RAW_TOTAL * MAX_SCORE).clamp(MIN_SCORE, MAX_SCORE);

        YiieldScoreBreakdown {
            base_score,
            auditor_tier_bonus,
            team_verification_bonus,
            insurance_bonus,
            governance_bonus,
            raw_total,
            total,
        }
    }

    /// Base-score pool metrics, then enhance
    pub fn enhance_metrics(
        metrics: &PoolMetrics,
        dossier: Option<&ProtocolDossier>,
    ) -> (SecurityFactors, YiieldScoreBreakdown) {
        let factors = BaseScorer::score(metrics);
        let breakdown = Self::enhance(factors.score(), dossier);
        (factors, breakdown)
    }

    /// Best auditor tier present wins
    pub fn auditor_tier_bonus(dossier: &ProtocolDossier) -> u8 {
        match dossier.best_auditor_tier() {
            Some(AuditorTier::Tier1) => MAX_AUDITOR_BONUS,
            Some(AuditorTier::Tier2) => 6,
            Some(AuditorTier::Tier3) => 3,
            None => 0,
        }
    }

    pub fn team_verification_bonus(dossier: &ProtocolDossier) -> u8 {
        match dossier.team_status {
            TeamStatus::Doxxed => MAX_TEAM_BONUS,
            TeamStatus::Verified => 3,
            TeamStatus::Anonymous => 0,
        }
    }

    /// Coverage amount is not weighted
    pub fn insurance_bonus(dossier: &ProtocolDossier) -> u8 {
        if dossier.has_insurance() {
            INSURANCE_BONUS
        } else {
            0
        }
    }

    pub fn governance_bonus(dossier: &ProtocolDossier) -> u8 {
        if dossier.has_governance() {
            GOVERNANCE_BONUS
        } else {
            0
        }
    }
}

fn clamp_base(base_score: f64) -> f64 {
    if base_score.is_nan() {
        warn!(raw = base_score, clamped = MIN_SCORE, "NaN base score clamped");
        return MIN_SCORE;
    }
    let clamped = base_score.clamp(MIN_SCORE, MAX_SCORE);
    if clamped != base_score {
        warn!(raw = base_score, clamped, "Base score outside 0-100 clamped");
    }
    clamped
}
