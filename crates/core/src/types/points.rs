//! Loyalty points type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Points earned per 100 shillings spent on delivered orders.
///
/// Earning is a side effect owned by the order-placement collaborator; the
/// constant lives here so progress displays use the same rate.
pub const POINTS_PER_KES: u64 = 100;

/// A loyalty points balance. Non-negative by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Points(u64);

impl Points {
    /// Zero points.
    pub const ZERO: Self = Self(0);

    /// Create a points balance.
    #[must_use]
    pub const fn new(points: u64) -> Self {
        Self(points)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Monetary value at the fixed redemption rate of 1 point = KES 1.
    #[must_use]
    pub fn as_money(&self) -> Money {
        // u64 points always fit a Decimal
        Money::new(Decimal::from(self.0)).unwrap_or(Money::ZERO)
    }

    /// Spend required to earn this many points at the program earn rate.
    #[must_use]
    pub fn spend_equivalent(&self) -> Money {
        Money::new(Decimal::from(self.0.saturating_mul(POINTS_PER_KES))).unwrap_or(Money::ZERO)
    }

    /// Subtract, saturating at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Add two balances.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// The smaller of two balances.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Whether the balance is empty.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pts", self.0)
    }
}

impl From<u64> for Points {
    fn from(points: u64) -> Self {
        Self(points)
    }
}
