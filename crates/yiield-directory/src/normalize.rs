//! Name normalization used by the resolution steps
//!
//! Each step of the lookup has its own normalizer so each can be tested on
//! its own.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VERSION_SUFFIX: Regex = Regex::new(r"^(?P<base>.+)-v\d+$").unwrap();
    static ref SLUG: Regex = Regex::new(r"^[a-z0-9.]+(-[a-z0-9.]+)*$").unwrap();
}

/// Alias table key: trimmed, lowercase, inner whitespace collapsed to one space
///
/// `"  Aave   V3 "` → `"aave v3"`
pub fn normalize_alias_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Directory slug: lowercase words joined by single hyphens
///
/// Whitespace, underscores and hyphens all separate words.
/// `"Aave V3"` → `"aave-v3"`, `"curve_dex"` → `"curve-dex"`
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Strip a trailing `-v<digits>` version suffix from a slug
///
/// Returns `None` when there is no suffix to strip.
/// `"compound-v3"` → `Some("compound")`
pub fn strip_version_suffix(slug: &str) -> Option<&str> {
    VERSION_SUFFIX
        .captures(slug)
        .and_then(|caps| caps.name("base"))
        .map(|base| base.as_str())
}

/// Whether a string is already in canonical slug form
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG.is_match(slug)
}
