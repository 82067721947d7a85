//! Money and discount-percentage types using decimal arithmetic.
//!
//! All amounts are Kenyan Shillings (KES). Every chargeable amount in the
//! system is rounded with a single rule: half-away-from-zero to whole
//! shillings. [`Money::percent_of`] is the only place that rule is applied;
//! call sites never round independently, so a displayed savings figure can
//! never disagree with the charged amount.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing monetary values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// Amount was negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
    /// Discount percentage outside the valid 0-100 range.
    #[error("discount percent must be between 0 and 100: {0}")]
    PercentOutOfRange(Decimal),
}

/// A monetary amount in Kenyan Shillings.
///
/// Non-negative by construction. Arithmetic that could produce a negative
/// amount saturates at zero instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero shillings.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] for negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create an amount from a whole number of shillings.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] for negative amounts.
    pub fn from_shillings(shillings: i64) -> Result<Self, MoneyError> {
        Self::new(Decimal::from(shillings))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Compute `percent` of this amount, rounded to whole shillings.
    ///
    /// This is the single rounding point for every chargeable amount:
    /// half-away-from-zero to zero decimal places.
    #[must_use]
    pub fn percent_of(&self, percent: DiscountPercent) -> Self {
        let raw = self.0 * percent.as_decimal() / Decimal::ONE_HUNDRED;
        Self(raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Add two amounts.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Subtract, saturating at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn mul_quantity(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// The smaller of two amounts.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KES {}", self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::add)
    }
}

/// A discount percentage, validated to lie in `[0, 100]`.
///
/// Out-of-range values are a validation failure at construction, never
/// silently clamped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::PercentOutOfRange`] for values outside `[0, 100]`.
    pub fn new(percent: Decimal) -> Result<Self, MoneyError> {
        if percent.is_sign_negative() || percent > Decimal::ONE_HUNDRED {
            return Err(MoneyError::PercentOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Create from a whole-number percentage.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::PercentOutOfRange`] for values above 100.
    pub fn from_u8(percent: u8) -> Result<Self, MoneyError> {
        Self::new(Decimal::from(percent))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether this is a zero percentage.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl std::fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rejects_negative() {
        assert!(matches!(
            Money::new(Decimal::from(-1)),
            Err(MoneyError::Negative(_))
        ));
        assert!(Money::from_shillings(0).is_ok());
    }

    #[test]
    fn test_percent_of_rounds_half_away_from_zero() {
        let price = Money::from_shillings(1000).expect("money");
        let pct = DiscountPercent::from_u8(10).expect("pct");
        assert_eq!(price.percent_of(pct), Money::from_shillings(100).expect("money"));

        // 15% of 105 = 15.75 -> 16
        let price = Money::from_shillings(105).expect("money");
        let pct = DiscountPercent::from_u8(15).expect("pct");
        assert_eq!(price.percent_of(pct), Money::from_shillings(16).expect("money"));

        // 5% of 50 = 2.5 -> 3 (half rounds away from zero, not to even)
        let price = Money::from_shillings(50).expect("money");
        let pct = DiscountPercent::from_u8(5).expect("pct");
        assert_eq!(price.percent_of(pct), Money::from_shillings(3).expect("money"));
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let a = Money::from_shillings(100).expect("money");
        let b = Money::from_shillings(250).expect("money");
        assert_eq!(a.saturating_sub(b), Money::ZERO);
        assert_eq!(b.saturating_sub(a), Money::from_shillings(150).expect("money"));
    }

    #[test]
    fn test_discount_percent_bounds() {
        assert!(DiscountPercent::new(Decimal::ZERO).is_ok());
        assert!(DiscountPercent::new(Decimal::ONE_HUNDRED).is_ok());
        // 100.01
        assert!(matches!(
            DiscountPercent::new(Decimal::new(10001, 2)),
            Err(MoneyError::PercentOutOfRange(_))
        ));
        assert!(matches!(
            DiscountPercent::new(Decimal::from(-5)),
            Err(MoneyError::PercentOutOfRange(_))
        ));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [100_i64, 250, 55]
            .iter()
            .map(|s| Money::from_shillings(*s).expect("money"))
            .sum();
        assert_eq!(total, Money::from_shillings(405).expect("money"));
    }
}
