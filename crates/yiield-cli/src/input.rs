//! Pool export parsing
//!
//! Accepts either a bare JSON array of pool records or the aggregator's
//! `{ "status": "success", "data": [...] }` envelope.

use serde::Deserialize;
use yiield_common::{PoolRecord, Result};

/// Aggregator response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct PoolsEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Vec<PoolRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PoolsFile {
    Bare(Vec<PoolRecord>),
    Envelope(PoolsEnvelope),
}

/// Parse a pool export
pub fn parse_pools(json: &str) -> Result<Vec<PoolRecord>> {
    let parsed: PoolsFile = serde_json::from_str(json)?;
    Ok(match parsed {
        PoolsFile::Bare(records) => records,
        PoolsFile::Envelope(envelope) => envelope.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yiield_common::YiieldError;

    #[test]
    fn test_bare_array() {
        let records = parse_pools(r#"[{ "project": "aave-v3", "tvlUsd": 10 }]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tvl_usd, 10.0);
    }

    #[test]
    fn test_envelope() {
        let json = r#"{ "status": "success", "data": [
            { "project": "aave-v3" },
            { "project": "compound-v3", "chain": "Base" }
        ] }"#;
        let records = parse_pools(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].chain, "Base");
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_pools(r#"{ "data": 5 }"#).unwrap_err();
        assert!(matches!(err, YiieldError::Serialization(_)));
    }
}
