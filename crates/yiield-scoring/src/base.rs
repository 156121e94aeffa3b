//! Base security scorer: base = audits + age + tvl + exploits
//!
//! Discrete bands, not interpolation. Each band is half-open on the upper
//! end, so a protocol exactly 30 days old already scores 10 for age.

use tracing::warn;
use yiield_common::{PoolMetrics, SecurityFactors};

/// Audit count → points. Index is the count; counts past the end take the last entry.
const AUDIT_POINTS: [u8; 4] = [0, 10, 18, 25];

/// Minimum age in days → points, highest band first
const AGE_BANDS: [(u64, u8); 3] = [(365, 25), (90, 18), (30, 10)];

/// Minimum TVL in USD → points, highest band first
const TVL_BANDS: [(f64, u8); 3] = [(100_000_000.0, 25), (10_000_000.0, 20), (1_000_000.0, 12)];

/// Points for TVL below the lowest band
const TVL_FLOOR_POINTS: u8 = 5;

/// Exploit count → points. Counts past the end take the last entry.
const EXPLOIT_POINTS: [u8; 3] = [25, 10, 0];

pub struct BaseScorer;

impl BaseScorer {
    /// Score pool metrics. Total, never fails; invalid inputs are clamped.
    pub fn score(metrics: &PoolMetrics) -> SecurityFactors {
        SecurityFactors::new(
            Self::audit_score(metrics.audits),
            Self::age_score(metrics.protocol_age_days),
            Self::tvl_score(metrics.tvl_usd),
            Self::exploit_score(metrics.exploits_count),
        )
    }

    /// 0 → 0, 1 → 10, 2 → 18, 3+ → 25
    pub fn audit_score(audits: i64) -> u8 {
        let audits = clamp_count("audits", audits);
        lookup_capped(&AUDIT_POINTS, audits)
    }

    /// <30 → 0, [30,90) → 10, [90,365) → 18, 365+ → 25
    pub fn age_score(protocol_age_days: i64) -> u8 {
        let days = clamp_count("protocol_age_days", protocol_age_days);
        AGE_BANDS
            .iter()
            .find(|(min_days, _)| days >= *min_days)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    /// <1M → 5, [1M,10M) → 12, [10M,100M) → 20, 100M+ → 25
    pub fn tvl_score(tvl_usd: f64) -> u8 {
        let tvl = clamp_usd("tvl_usd", tvl_usd);
        TVL_BANDS
            .iter()
            .find(|(min_tvl, _)| tvl >= *min_tvl)
            .map(|(_, points)| *points)
            .unwrap_or(TVL_FLOOR_POINTS)
    }

    /// 0 → 25, 1 → 10, 2+ → 0
    pub fn exploit_score(exploits_count: i64) -> u8 {
        let exploits = clamp_count("exploits_count", exploits_count);
        lookup_capped(&EXPLOIT_POINTS, exploits)
    }
}

fn lookup_capped(table: &[u8], index: u64) -> u8 {
    let last = table.len() - 1;
    let idx = usize::try_from(index).map_or(last, |i| i.min(last));
    table[idx]
}

/// Negative counts from upstream become 0
fn clamp_count(field: &'static str, value: i64) -> u64 {
    if value < 0 {
        warn!(field, raw = value, clamped = 0, "Negative count clamped");
        0
    } else {
        value as u64
    }
}

/// Negative or NaN USD amounts from upstream become 0
fn clamp_usd(field: &'static str, value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        warn!(field, raw = value, clamped = 0.0, "Invalid USD amount clamped");
        0.0
    } else {
        value
    }
}
