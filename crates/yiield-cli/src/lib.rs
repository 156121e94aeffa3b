//! # Yiield CLI
//!
//! Batch scoring of aggregator pool exports. The binary reads a JSON file of
//! pool records, scores each against the protocol directory, and prints
//! ranked listings as JSON.

pub mod config;
pub mod input;

pub use config::{FilterSettings, OutputSettings, ScorerConfig};
pub use input::{parse_pools, PoolsEnvelope};
