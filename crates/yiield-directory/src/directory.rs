//! ProtocolDirectory - Immutable dossier map with alias table
//!
//! Dossiers keep their load order so the display-name fallback scan is
//! deterministic when curation data contains near-duplicates.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use yiield_common::{DirectoryError, ProtocolDossier, Result};

use crate::normalize::{is_valid_slug, normalize_alias_key, slugify, strip_version_suffix};

/// Which resolution step produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStep {
    /// Matched an entry in the alias table
    Alias,
    /// Matched a slug directly after hyphenation
    Slug,
    /// Matched after stripping a `-v<digits>` suffix
    VersionStripped,
    /// Matched a dossier display name
    DisplayName,
}

/// Serialized form of a directory file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryData {
    /// Curation data version
    #[serde(default)]
    pub version: Option<String>,

    /// Date the curation data was last reviewed
    #[serde(default)]
    pub updated: Option<NaiveDate>,

    /// Curated dossiers
    #[serde(default)]
    pub protocols: Vec<ProtocolDossier>,

    /// Alternate name → canonical slug
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Read-only protocol directory
#[derive(Debug, Clone, Default)]
pub struct ProtocolDirectory {
    dossiers: Vec<ProtocolDossier>,
    by_slug: HashMap<String, usize>,
    aliases: HashMap<String, String>,
    version: Option<String>,
    updated: Option<NaiveDate>,
}

impl ProtocolDirectory {
    /// Start building a directory by hand
    pub fn builder() -> DirectoryBuilder {
        DirectoryBuilder::default()
    }

    /// Build from deserialized directory data, validating it
    pub fn from_data(data: DirectoryData) -> Result<Self> {
        DirectoryBuilder {
            dossiers: data.protocols,
            aliases: data.aliases.into_iter().collect(),
            version: data.version,
            updated: data.updated,
        }
        .build()
    }

    /// Parse and validate directory JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let data: DirectoryData =
            serde_json::from_str(json).map_err(|e| DirectoryError::Parse(e.to_string()))?;
        Self::from_data(data)
    }

    /// Load a directory file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            protocols = directory.len(),
            aliases = directory.aliases.len(),
            version = directory.version.as_deref().unwrap_or("unversioned"),
            "Loaded protocol directory"
        );
        Ok(directory)
    }

    /// Directory bundled with the crate
    pub fn curated() -> Result<Self> {
        Self::from_json(crate::CURATED_DIRECTORY_JSON)
    }

    /// Resolve a free-text protocol name to its dossier
    pub fn resolve(&self, protocol_name: &str) -> Option<&ProtocolDossier> {
        self.resolve_with_step(protocol_name).map(|(dossier, _)| dossier)
    }

    /// Resolve a protocol name, reporting which step matched
    pub fn resolve_with_step(
        &self,
        protocol_name: &str,
    ) -> Option<(&ProtocolDossier, ResolutionStep)> {
        let found = self
            .by_alias(protocol_name)
            .map(|d| (d, ResolutionStep::Alias))
            .or_else(|| self.by_slug(protocol_name).map(|d| (d, ResolutionStep::Slug)))
            .or_else(|| {
                self.by_version_stripped(protocol_name)
                    .map(|d| (d, ResolutionStep::VersionStripped))
            })
            .or_else(|| {
                self.by_display_name(protocol_name)
                    .map(|d| (d, ResolutionStep::DisplayName))
            });

        match found {
            Some((dossier, step)) => {
                debug!(name = protocol_name, slug = %dossier.slug, ?step, "Resolved protocol");
            }
            None => {
                debug!(name = protocol_name, "No dossier for protocol, base score only");
            }
        }
        found
    }

    /// Step 1: alias table on the lowercased name
    pub fn by_alias(&self, protocol_name: &str) -> Option<&ProtocolDossier> {
        self.aliases
            .get(&normalize_alias_key(protocol_name))
            .and_then(|slug| self.get(slug))
    }

    /// Step 2: direct slug lookup on the hyphenated name
    pub fn by_slug(&self, protocol_name: &str) -> Option<&ProtocolDossier> {
        self.get(&slugify(protocol_name))
    }

    /// Step 3: slug lookup with the trailing version suffix removed
    pub fn by_version_stripped(&self, protocol_name: &str) -> Option<&ProtocolDossier> {
        let slug = slugify(protocol_name);
        strip_version_suffix(&slug).and_then(|base| self.get(base))
    }

    /// Step 4: case-insensitive scan of display names
    pub fn by_display_name(&self, protocol_name: &str) -> Option<&ProtocolDossier> {
        let wanted = normalize_alias_key(protocol_name);
        if wanted.is_empty() {
            return None;
        }
        self.dossiers
            .iter()
            .find(|d| normalize_alias_key(&d.name) == wanted)
    }

    /// Exact slug lookup
    pub fn get(&self, slug: &str) -> Option<&ProtocolDossier> {
        self.by_slug.get(slug).map(|&idx| &self.dossiers[idx])
    }

    /// Dossiers in load order
    pub fn iter(&self) -> impl Iterator<Item = &ProtocolDossier> {
        self.dossiers.iter()
    }

    pub fn len(&self) -> usize {
        self.dossiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dossiers.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn updated(&self) -> Option<NaiveDate> {
        self.updated
    }
}

/// Builder for [`ProtocolDirectory`], mainly for synthetic test directories
#[derive(Debug, Clone, Default)]
pub struct DirectoryBuilder {
    dossiers: Vec<ProtocolDossier>,
    aliases: Vec<(String, String)>,
    version: Option<String>,
    updated: Option<NaiveDate>,
}

impl DirectoryBuilder {
    /// Add a dossier
    pub fn dossier(mut self, dossier: ProtocolDossier) -> Self {
        self.dossiers.push(dossier);
        self
    }

    /// Map an alternate name to a slug
    pub fn alias(mut self, alias: impl Into<String>, slug: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), slug.into()));
        self
    }

    /// Set data version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set review date
    pub fn updated(mut self, updated: NaiveDate) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Validate and freeze the directory
    ///
    /// Slugs must be canonical and unique; every alias must target a known slug.
    /// Aliases that normalize to the same key must agree on their target.
    pub fn build(self) -> Result<ProtocolDirectory> {
        let mut by_slug = HashMap::with_capacity(self.dossiers.len());
        for (idx, dossier) in self.dossiers.iter().enumerate() {
            if !is_valid_slug(&dossier.slug) {
                return Err(DirectoryError::InvalidSlug {
                    slug: dossier.slug.clone(),
                }
                .into());
            }
            if by_slug.insert(dossier.slug.clone(), idx).is_some() {
                return Err(DirectoryError::DuplicateSlug(dossier.slug.clone()).into());
            }
        }

        let mut aliases: HashMap<String, String> = HashMap::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            if !by_slug.contains_key(&target) {
                return Err(DirectoryError::DanglingAlias { alias, target }.into());
            }
            let key = normalize_alias_key(&alias);
            if let Some(existing) = aliases.get(&key) {
                if *existing != target {
                    return Err(DirectoryError::DuplicateAlias {
                        key,
                        first: existing.clone(),
                        second: target,
                    }
                    .into());
                }
                continue;
            }
            aliases.insert(key, target);
        }

        Ok(ProtocolDirectory {
            dossiers: self.dossiers,
            by_slug,
            aliases,
            version: self.version,
            updated: self.updated,
        })
    }
}
