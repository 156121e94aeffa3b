//! SecurityRating - Discrete risk tier derived from a score
//!
//! Boundaries are inclusive on the lower bound:
//!
//! | Score     | Rating    |
//! |-----------|-----------|
//! | >= 80     | Excellent |
//! | >= 60     | Good      |
//! | >= 40     | Moderate  |
//! | >= 20     | Risky     |
//! | otherwise | Danger    |

use serde::{Deserialize, Serialize};

/// Risk tier used to rank and color-code listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityRating {
    Danger,
    Risky,
    Moderate,
    Good,
    Excellent,
}

impl SecurityRating {
    /// Lower bound of each tier, highest first
    const THRESHOLDS: [(f64, SecurityRating); 4] = [
        (80.0, SecurityRating::Excellent),
        (60.0, SecurityRating::Good),
        (40.0, SecurityRating::Moderate),
        (20.0, SecurityRating::Risky),
    ];

    /// Classify a score. Total over f64: NaN and anything below 20 is Danger.
    pub fn from_score(score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, rating)| *rating)
            .unwrap_or(SecurityRating::Danger)
    }

    /// All tiers, best first
    pub fn all() -> [SecurityRating; 5] {
        [
            SecurityRating::Excellent,
            SecurityRating::Good,
            SecurityRating::Moderate,
            SecurityRating::Risky,
            SecurityRating::Danger,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SecurityRating::Excellent => "Excellent",
            SecurityRating::Good => "Good",
            SecurityRating::Moderate => "Moderate",
            SecurityRating::Risky => "Risky",
            SecurityRating::Danger => "Danger",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            SecurityRating::Excellent => "#22c55e",
            SecurityRating::Good => "#84cc16",
            SecurityRating::Moderate => "#eab308",
            SecurityRating::Risky => "#f97316",
            SecurityRating::Danger => "#ef4444",
        }
    }
}

impl std::fmt::Display for SecurityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
