//! # Yiield Directory
//!
//! Resolves free-text protocol names from the yield aggregator to curated
//! [`ProtocolDossier`](yiield_common::ProtocolDossier) entries.
//!
//! ## Resolution Order
//!
//! ```text
//! "AAVE V3"
//!    │
//!    ├─ 1. alias table      lowercase, whitespace collapsed   "aave v3"  → aave-v3
//!    ├─ 2. slug lookup      lowercase-with-hyphens            "aave-v3"
//!    ├─ 3. version strip    drop trailing "-v<digits>"        "compound-v99" → "compound"
//!    └─ 4. display name     case-insensitive scan of names    "Aave V3"
//! ```
//!
//! First match wins. Not finding a protocol is an expected outcome: the
//! caller scores the pool with its base score only.
//!
//! The directory is immutable once built. Load it once at startup and pass
//! it by reference; there is no global table.

pub mod directory;
pub mod normalize;

pub use directory::{DirectoryBuilder, DirectoryData, ProtocolDirectory, ResolutionStep};
pub use normalize::{is_valid_slug, normalize_alias_key, slugify, strip_version_suffix};

/// Curated directory bundled with the crate
pub const CURATED_DIRECTORY_JSON: &str = include_str!("../data/protocols.json");
