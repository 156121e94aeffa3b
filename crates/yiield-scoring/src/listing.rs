//! Listing pipeline: pool record → dossier lookup → score → tier
//!
//! A [`ListingScorer`] borrows the directory and fixes the `as_of` date
//! used for protocol age, so scoring a batch is reproducible.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};
use yiield_common::{
    PoolMetrics, PoolRecord, SecurityFactors, SecurityRating, YiieldScoreBreakdown,
};
use yiield_directory::{ProtocolDirectory, ResolutionStep};

use crate::enhancer::ScoreEnhancer;
use crate::format::{format_apy, format_score, format_tvl};

/// Pre-formatted strings for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingDisplay {
    pub score: String,
    pub tvl: String,
    pub apy: String,
    pub label: &'static str,
    pub color: &'static str,
}

/// A pool with its full score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredListing {
    /// Source record
    pub record: PoolRecord,

    /// Metrics the base score was computed from
    pub metrics: PoolMetrics,

    /// Base score factors
    pub factors: SecurityFactors,

    /// Enhanced score
    pub breakdown: YiieldScoreBreakdown,

    /// Tier of the enhanced score
    pub rating: SecurityRating,

    /// Slug of the matched dossier, if any
    pub dossier_slug: Option<String>,

    /// Step that matched the dossier
    pub resolution: Option<ResolutionStep>,

    /// Display strings
    pub display: ListingDisplay,
}

impl ScoredListing {
    #[inline]
    pub fn score(&self) -> f64 {
        self.breakdown.total
    }
}

/// Scores aggregator records against a protocol directory
#[derive(Debug, Clone, Copy)]
pub struct ListingScorer<'a> {
    directory: &'a ProtocolDirectory,
    as_of: NaiveDate,
}

impl<'a> ListingScorer<'a> {
    pub fn new(directory: &'a ProtocolDirectory, as_of: NaiveDate) -> Self {
        Self { directory, as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Score one record
    #[instrument(skip(self, record), fields(project = %record.project, chain = %record.chain))]
    pub fn score(&self, record: &PoolRecord) -> ScoredListing {
        let metrics = PoolMetrics::from_record(record, self.as_of);
        let resolved = self.directory.resolve_with_step(&record.project);
        let dossier = resolved.map(|(dossier, _)| dossier);

        let (factors, breakdown) = ScoreEnhancer::enhance_metrics(&metrics, dossier);
        let rating = breakdown.rating();

        debug!(
            base = factors.total,
            total = breakdown.total,
            rating = %rating,
            "Scored listing"
        );

        ScoredListing {
            record: record.clone(),
            metrics,
            factors,
            breakdown,
            rating,
            dossier_slug: dossier.map(|d| d.slug.clone()),
            resolution: resolved.map(|(_, step)| step),
            display: ListingDisplay {
                score: format_score(breakdown.total),
                tvl: format_tvl(record.tvl_usd),
                apy: format_apy(record.effective_apy()),
                label: rating.label(),
                color: rating.color(),
            },
        }
    }

    /// Score a batch and rank it
    #[instrument(skip_all, fields(as_of = %self.as_of))]
    pub fn score_all<'r>(
        &self,
        records: impl IntoIterator<Item = &'r PoolRecord>,
    ) -> Vec<ScoredListing> {
        let mut listings: Vec<ScoredListing> =
            records.into_iter().map(|r| self.score(r)).collect();
        rank(&mut listings);
        debug!(count = listings.len(), "Scored and ranked listings");
        listings
    }
}

/// Sort by score descending, then TVL descending, then project and pool id
pub fn rank(listings: &mut [ScoredListing]) {
    listings.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| b.record.tvl_usd.total_cmp(&a.record.tvl_usd))
            .then_with(|| a.record.project.cmp(&b.record.project))
            .then_with(|| a.record.pool.cmp(&b.record.pool))
    });
}

/// Which listings to show
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingFilter {
    /// Minimum TVL in USD
    pub min_tvl_usd: f64,
    /// Only pools flagged as stablecoin pools
    pub stablecoin_only: bool,
    /// Maximum number of listings after ranking
    pub limit: Option<usize>,
}

impl ListingFilter {
    pub fn matches(&self, record: &PoolRecord) -> bool {
        if self.stablecoin_only && !record.stablecoin {
            return false;
        }
        !record.tvl_usd.is_nan() && record.tvl_usd >= self.min_tvl_usd
    }

    /// Drop non-matching listings and truncate to the limit, keeping order
    pub fn apply(&self, mut listings: Vec<ScoredListing>) -> Vec<ScoredListing> {
        listings.retain(|l| self.matches(&l.record));
        if let Some(limit) = self.limit {
            listings.truncate(limit);
        }
        listings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yiield_common::{AuditorTier, ProtocolDossier, TeamStatus};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    fn directory() -> ProtocolDirectory {
        ProtocolDirectory::builder()
            .dossier(
                ProtocolDossier::new("Aave V3", "aave-v3")
                    .with_team(TeamStatus::Doxxed)
                    .with_auditor("OpenZeppelin", AuditorTier::Tier1),
            )
            .alias("aave", "aave-v3")
            .build()
            .unwrap()
    }

    fn aave_record() -> PoolRecord {
        PoolRecord::new("aave-v3", "Ethereum", "USDC", 500_000_000.0)
            .with_apy(4.2, Some(4.2), None)
            .with_audits(5)
            .with_launch_date(NaiveDate::from_ymd_opt(2023, 1, 27).unwrap())
            .stablecoin()
    }

    #[test]
    fn test_score_known_protocol() {
        let dir = directory();
        let scorer = ListingScorer::new(&dir, as_of());
        let listing = scorer.score(&aave_record());

        assert_eq!(listing.factors.total, 100);
        assert_eq!(listing.breakdown.auditor_tier_bonus, 10);
        assert_eq!(listing.breakdown.team_verification_bonus, 5);
        assert_eq!(listing.breakdown.raw_total, 115.0);
        assert!((listing.score() - 115.0 / 120.0 * 100.0).abs() < 1e-9);
        assert_eq!(listing.rating, SecurityRating::Excellent);
        assert_eq!(listing.dossier_slug.as_deref(), Some("aave-v3"));
        assert_eq!(listing.resolution, Some(ResolutionStep::Slug));
        assert_eq!(listing.display.score, "95.8");
        assert_eq!(listing.display.tvl, "$500.00M");
        assert_eq!(listing.display.apy, "4.20%");
        assert_eq!(listing.display.label, "Excellent");
    }

    #[test]
    fn test_score_unknown_protocol_uses_base_only() {
        let dir = directory();
        let scorer = ListingScorer::new(&dir, as_of());
        let record = PoolRecord::new("tiny-farm", "Base", "USDC", 50_000.0).with_audits(1);
        let listing = scorer.score(&record);

        // audits 10 + age 0 + tvl 5 + exploits 25
        assert_eq!(listing.factors.total, 40);
        assert_eq!(listing.breakdown.total, 40.0);
        assert_eq!(listing.rating, SecurityRating::Moderate);
        assert_eq!(listing.dossier_slug, None);
        assert_eq!(listing.resolution, None);
    }

    #[test]
    fn test_score_all_ranks_by_score_then_tvl() {
        let dir = directory();
        let scorer = ListingScorer::new(&dir, as_of());
        let records = vec![
            PoolRecord::new("tiny-farm", "Base", "USDC", 50_000.0),
            aave_record(),
            PoolRecord::new("other-farm", "Base", "USDT", 60_000.0),
        ];

        let ranked = scorer.score_all(&records);
        let projects: Vec<&str> = ranked.iter().map(|l| l.record.project.as_str()).collect();
        // Both farms score 30; the larger TVL ranks first
        assert_eq!(projects, vec!["aave-v3", "other-farm", "tiny-farm"]);
    }

    #[test]
    fn test_filter() {
        let dir = directory();
        let scorer = ListingScorer::new(&dir, as_of());
        let records = vec![
            aave_record(),
            PoolRecord::new("tiny-farm", "Base", "USDC", 50_000.0).stablecoin(),
            PoolRecord::new("volatile", "Base", "ETH", 80_000_000.0),
        ];
        let ranked = scorer.score_all(&records);

        let filter = ListingFilter {
            min_tvl_usd: 100_000.0,
            stablecoin_only: true,
            limit: None,
        };
        let shown = filter.apply(ranked.clone());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].record.project, "aave-v3");

        let top_two = ListingFilter {
            limit: Some(2),
            ..Default::default()
        }
        .apply(ranked);
        assert_eq!(top_two.len(), 2);
    }

    #[test]
    fn test_filter_rejects_nan_tvl() {
        let filter = ListingFilter::default();
        let record = PoolRecord::new("x", "Base", "USDC", f64::NAN);
        assert!(!filter.matches(&record));
    }
}
