//! Loyalty tier ladder and early-access status.

use serde::{Deserialize, Serialize};

use super::money::DiscountPercent;

/// A loyalty tier. Derives `Ord` so the ladder is a total order:
/// `Basic < Bronze < Silver < Gold < Platinum`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Tier {
    #[default]
    Basic,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
    ];

    /// Tiers above Basic, i.e. those carrying a point threshold.
    pub const RANKED: [Self; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum];

    /// The discount percentage conferred by this tier.
    #[must_use]
    pub fn discount_percent(self) -> DiscountPercent {
        let percent = match self {
            Self::Basic => 0,
            Self::Bronze => 2,
            Self::Silver => 3,
            Self::Gold => 5,
            Self::Platinum => 7,
        };
        // Tier percentages are all within [0, 100]
        DiscountPercent::from_u8(percent).unwrap_or(DiscountPercent::ZERO)
    }

    /// The tier immediately above this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Bronze),
            Self::Bronze => Some(Self::Silver),
            Self::Silver => Some(Self::Gold),
            Self::Gold => Some(Self::Platinum),
            Self::Platinum => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Basic => "Basic",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Self::Basic),
            "Bronze" => Ok(Self::Bronze),
            "Silver" => Ok(Self::Silver),
            "Gold" => Ok(Self::Gold),
            "Platinum" => Ok(Self::Platinum),
            _ => Err(format!("invalid tier: {s}")),
        }
    }
}

/// How the effective tier relates to the early-access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EarlyAccessStatus {
    /// Tier earned through standard thresholds alone.
    #[default]
    None,
    /// Tier elevated one rung by the active early-access policy.
    EarlyActive,
    /// Early-access tier retained after the policy was disabled, while the
    /// early threshold still holds.
    Protected,
}
