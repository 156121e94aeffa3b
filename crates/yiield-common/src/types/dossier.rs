//! ProtocolDossier - Curated due-diligence record for a protocol
//!
//! Dossiers are maintained by hand, loaded once and never mutated by the
//! scorer. They carry the facts the score enhancer turns into bonus points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Team transparency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    /// Publicly identified team members
    Doxxed,
    /// Identity verified by a third party but not public
    Verified,
    /// Pseudonymous or unknown team
    Anonymous,
}

impl Default for TeamStatus {
    fn default() -> Self {
        TeamStatus::Anonymous
    }
}

/// Audit firm reputation tier, 1 = most rigorous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AuditorTier {
    Tier1,
    Tier2,
    Tier3,
}

impl AuditorTier {
    /// Numeric tier (1-3)
    pub fn level(&self) -> u8 {
        match self {
            AuditorTier::Tier1 => 1,
            AuditorTier::Tier2 => 2,
            AuditorTier::Tier3 => 3,
        }
    }
}

impl TryFrom<u8> for AuditorTier {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(AuditorTier::Tier1),
            2 => Ok(AuditorTier::Tier2),
            3 => Ok(AuditorTier::Tier3),
            other => Err(format!("auditor tier must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<AuditorTier> for u8 {
    fn from(tier: AuditorTier) -> Self {
        tier.level()
    }
}

/// A completed audit by a named firm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditorRecord {
    /// Audit firm name
    pub name: String,
    /// Reputation tier of the firm
    pub tier: AuditorTier,
}

impl AuditorRecord {
    pub fn new(name: impl Into<String>, tier: AuditorTier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }
}

/// Third-party cover for protocol deposits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    /// Cover provider (e.g. "Nexus Mutual")
    pub provider: String,
    /// Cover amount in USD, when published
    #[serde(default)]
    pub coverage_amount: Option<Decimal>,
}

impl InsuranceRecord {
    pub fn new(provider: impl Into<String>, coverage_amount: Option<Decimal>) -> Self {
        Self {
            provider: provider.into(),
            coverage_amount,
        }
    }
}

/// How protocol changes are controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernanceType {
    Dao,
    Multisig,
    Timelock,
}

/// Governance facts for a protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceRecord {
    /// Whether on-chain governance is in place
    pub has_governance: bool,
    /// Governance mechanism
    #[serde(rename = "type")]
    pub kind: GovernanceType,
}

impl GovernanceRecord {
    pub fn new(has_governance: bool, kind: GovernanceType) -> Self {
        Self {
            has_governance,
            kind,
        }
    }
}

/// Curated directory entry for one protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolDossier {
    /// Display name (e.g. "Aave V3")
    pub name: String,

    /// Canonical lowercase-with-hyphens key (e.g. "aave-v3")
    pub slug: String,

    /// Team transparency
    #[serde(default)]
    pub team_status: TeamStatus,

    /// Completed audits
    #[serde(default)]
    pub auditors: Vec<AuditorRecord>,

    /// Deposit cover, if any
    #[serde(default)]
    pub insurance: Option<InsuranceRecord>,

    /// Governance setup, if known
    #[serde(default)]
    pub governance: Option<GovernanceRecord>,
}

impl ProtocolDossier {
    /// Create a dossier with an anonymous team and no other facts
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            team_status: TeamStatus::Anonymous,
            auditors: Vec::new(),
            insurance: None,
            governance: None,
        }
    }

    /// Set team status
    pub fn with_team(mut self, team_status: TeamStatus) -> Self {
        self.team_status = team_status;
        self
    }

    /// Add an auditor
    pub fn with_auditor(mut self, name: impl Into<String>, tier: AuditorTier) -> Self {
        self.auditors.push(AuditorRecord::new(name, tier));
        self
    }

    /// Set insurance cover
    pub fn with_insurance(mut self, insurance: InsuranceRecord) -> Self {
        self.insurance = Some(insurance);
        self
    }

    /// Set governance
    pub fn with_governance(mut self, governance: GovernanceRecord) -> Self {
        self.governance = Some(governance);
        self
    }

    /// Most rigorous auditor tier present, if any auditor is listed
    pub fn best_auditor_tier(&self) -> Option<AuditorTier> {
        self.auditors.iter().map(|a| a.tier).min()
    }

    pub fn has_insurance(&self) -> bool {
        self.insurance.is_some()
    }

    pub fn has_governance(&self) -> bool {
        self.governance.map(|g| g.has_governance).unwrap_or(false)
    }
}
