//! Scorer configuration

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use yiield_common::{Result, YiieldError};
use yiield_scoring::ListingFilter;

/// Batch scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Pool export to score
    pub pools_path: Option<PathBuf>,
    /// Directory file; the bundled curated directory when unset
    pub directory_path: Option<PathBuf>,
    /// Reference date for protocol age; today when unset
    pub as_of: Option<NaiveDate>,
    /// Listing filter
    pub filter: FilterSettings,
    /// Output settings
    pub output: OutputSettings,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            pools_path: None,
            directory_path: None,
            as_of: None,
            filter: FilterSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl ScorerConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, starting from defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("YIIELD_POOLS_PATH") {
            cfg.pools_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("YIIELD_DIRECTORY_PATH") {
            cfg.directory_path = Some(PathBuf::from(path));
        }
        if let Some(val) = lookup("YIIELD_AS_OF") {
            cfg.as_of = Some(parse_var("YIIELD_AS_OF", &val)?);
        }

        // Filter settings
        if let Some(val) = lookup("YIIELD_MIN_TVL_USD") {
            cfg.filter.min_tvl_usd = parse_var("YIIELD_MIN_TVL_USD", &val)?;
        }
        if let Some(val) = lookup("YIIELD_STABLECOIN_ONLY") {
            cfg.filter.stablecoin_only = parse_var("YIIELD_STABLECOIN_ONLY", &val)?;
        }
        if let Some(val) = lookup("YIIELD_LIMIT") {
            cfg.filter.limit = Some(parse_var("YIIELD_LIMIT", &val)?);
        }

        // Output settings
        if let Some(val) = lookup("YIIELD_PRETTY") {
            cfg.output.pretty = parse_var("YIIELD_PRETTY", &val)?;
        }

        Ok(cfg)
    }

    /// Reference date, falling back to today (UTC)
    pub fn as_of_or_today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| YiieldError::Config(format!("{}={:?}: {}", key, value, e)))
}

/// Which listings to print
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Minimum TVL in USD
    pub min_tvl_usd: f64,
    /// Only stablecoin pools
    pub stablecoin_only: bool,
    /// Maximum listings printed
    pub limit: Option<usize>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_tvl_usd: 0.0,
            stablecoin_only: true,
            limit: None,
        }
    }
}

impl From<&FilterSettings> for ListingFilter {
    fn from(settings: &FilterSettings) -> Self {
        ListingFilter {
            min_tvl_usd: settings.min_tvl_usd,
            stablecoin_only: settings.stablecoin_only,
            limit: settings.limit,
        }
    }
}

/// Output formatting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Pretty-print JSON
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = ScorerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ScorerConfig::default());
        assert!(cfg.filter.stablecoin_only);
        assert_eq!(cfg.filter.limit, None);
    }

    #[test]
    fn test_overrides() {
        let cfg = ScorerConfig::from_lookup(lookup_from(&[
            ("YIIELD_POOLS_PATH", "/data/pools.json"),
            ("YIIELD_AS_OF", "2026-10-01"),
            ("YIIELD_MIN_TVL_USD", "1000000"),
            ("YIIELD_STABLECOIN_ONLY", "false"),
            ("YIIELD_LIMIT", " 25 "),
            ("YIIELD_PRETTY", "true"),
        ]))
        .unwrap();

        assert_eq!(cfg.pools_path, Some(PathBuf::from("/data/pools.json")));
        assert_eq!(cfg.as_of, NaiveDate::from_ymd_opt(2026, 10, 1));
        assert_eq!(cfg.filter.min_tvl_usd, 1_000_000.0);
        assert!(!cfg.filter.stablecoin_only);
        assert_eq!(cfg.filter.limit, Some(25));
        assert!(cfg.output.pretty);
    }

    #[test]
    fn test_bad_number_is_config_error() {
        let err =
            ScorerConfig::from_lookup(lookup_from(&[("YIIELD_LIMIT", "lots")])).unwrap_err();
        assert!(matches!(err, YiieldError::Config(ref msg) if msg.contains("YIIELD_LIMIT")));
    }

    #[test]
    fn test_filter_conversion() {
        let settings = FilterSettings {
            min_tvl_usd: 5.0,
            stablecoin_only: false,
            limit: Some(3),
        };
        let filter = ListingFilter::from(&settings);
        assert_eq!(filter.min_tvl_usd, 5.0);
        assert_eq!(filter.limit, Some(3));
    }
}
