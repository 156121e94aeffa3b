//! Pool records from the yield aggregator and the metrics derived from them
//!
//! The aggregator refreshes hourly and its data is noisy: missing fields,
//! counts shipped as strings, negative or NaN numbers. [`PoolRecord`]
//! accepts all of that as-is. [`PoolMetrics`] keeps the raw counts and TVL;
//! the base scorer clamps those. Only the derived age is clamped here, since
//! it is computed here.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Raw pool row as served by the upstream yield aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    /// Aggregator pool identifier
    #[serde(default)]
    pub pool: String,

    /// Protocol name as the aggregator spells it (e.g. "aave-v3", "Compound V3")
    pub project: String,

    /// Chain the pool is deployed on
    #[serde(default)]
    pub chain: String,

    /// Token symbol(s) of the pool
    #[serde(default)]
    pub symbol: String,

    /// Total value locked in USD
    #[serde(default)]
    pub tvl_usd: f64,

    /// Total APY in percent
    #[serde(default)]
    pub apy: Option<f64>,

    /// Base (organic) APY in percent
    #[serde(default)]
    pub apy_base: Option<f64>,

    /// Reward-token APY in percent
    #[serde(default)]
    pub apy_reward: Option<f64>,

    /// Whether the aggregator flags the pool as a stablecoin pool
    #[serde(default)]
    pub stablecoin: bool,

    /// Number of audits; the aggregator sometimes sends this as a string
    #[serde(default, deserialize_with = "deserialize_count")]
    pub audits: Option<i64>,

    /// Protocol launch date, used to derive protocol age
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,

    /// Number of known exploits
    #[serde(default, deserialize_with = "deserialize_count")]
    pub exploits: Option<i64>,
}

impl PoolRecord {
    /// Create a record with only the identifying fields and TVL set
    pub fn new(
        project: impl Into<String>,
        chain: impl Into<String>,
        symbol: impl Into<String>,
        tvl_usd: f64,
    ) -> Self {
        Self {
            pool: String::new(),
            project: project.into(),
            chain: chain.into(),
            symbol: symbol.into(),
            tvl_usd,
            apy: None,
            apy_base: None,
            apy_reward: None,
            stablecoin: false,
            audits: None,
            launch_date: None,
            exploits: None,
        }
    }

    /// Set APY components
    pub fn with_apy(mut self, apy: f64, apy_base: Option<f64>, apy_reward: Option<f64>) -> Self {
        self.apy = Some(apy);
        self.apy_base = apy_base;
        self.apy_reward = apy_reward;
        self
    }

    /// Set audit count
    pub fn with_audits(mut self, audits: i64) -> Self {
        self.audits = Some(audits);
        self
    }

    /// Set protocol launch date
    pub fn with_launch_date(mut self, launch_date: NaiveDate) -> Self {
        self.launch_date = Some(launch_date);
        self
    }

    /// Set exploit count
    pub fn with_exploits(mut self, exploits: i64) -> Self {
        self.exploits = Some(exploits);
        self
    }

    /// Mark as stablecoin pool
    pub fn stablecoin(mut self) -> Self {
        self.stablecoin = true;
        self
    }

    /// Effective APY: the reported total, or base + reward when the total is missing
    pub fn effective_apy(&self) -> Option<f64> {
        match (self.apy, self.apy_base, self.apy_reward) {
            (Some(apy), _, _) => Some(apy),
            (None, None, None) => None,
            (None, base, reward) => Some(base.unwrap_or(0.0) + reward.unwrap_or(0.0)),
        }
    }
}

/// Pool-observable signals consumed by the base scorer
///
/// Fields are signed so malformed upstream values survive until the scorer
/// clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoolMetrics {
    /// Number of audits
    pub audits: i64,
    /// Protocol age in days
    pub protocol_age_days: i64,
    /// Total value locked in USD
    pub tvl_usd: f64,
    /// Number of known exploits
    pub exploits_count: i64,
}

impl PoolMetrics {
    pub fn new(audits: i64, protocol_age_days: i64, tvl_usd: f64, exploits_count: i64) -> Self {
        Self {
            audits,
            protocol_age_days,
            tvl_usd,
            exploits_count,
        }
    }

    /// Derive metrics from an aggregator record
    ///
    /// Age is measured from the record's launch date to `as_of`. A missing
    /// launch date yields age 0. A launch date after `as_of` is clamped to
    /// age 0 and logged.
    pub fn from_record(record: &PoolRecord, as_of: NaiveDate) -> Self {
        let protocol_age_days = match record.launch_date {
            Some(launch) => {
                let days = (as_of - launch).num_days();
                if days < 0 {
                    warn!(
                        project = %record.project,
                        pool = %record.pool,
                        %launch,
                        %as_of,
                        raw = days,
                        clamped = 0,
                        "Launch date after scoring date, age clamped"
                    );
                }
                days.max(0)
            }
            None => 0,
        };

        Self {
            audits: record.audits.unwrap_or(0),
            protocol_age_days,
            tvl_usd: record.tvl_usd,
            exploits_count: record.exploits.unwrap_or(0),
        }
    }
}

/// Accept a count as a JSON number, a numeric string, or null
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawCount>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawCount::Int(n)) => Some(n),
        Some(RawCount::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(RawCount::Float(_)) => None,
        Some(RawCount::Text(s)) => s.trim().parse::<i64>().ok(),
    })
}
