//! Sequential discount stacking for a single cart line.
//!
//! Discounts are never summed. The product discount comes off the unit price
//! first; the tier discount then applies to the already-reduced base. The
//! order is fixed - reversing it changes the charged amount whenever both
//! percentages are non-zero.

use serde::{Deserialize, Serialize};

use tajicart_core::{DiscountPercent, Money};

/// The per-unit outcome of stacking both discounts.
///
/// Each field is computed from its own formula so "your savings" displays
/// never reconstruct a figure by subtracting two already-rounded numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiscount {
    /// Price per unit after both discounts.
    pub final_unit_price: Money,
    /// Savings per unit from the product's own promotion.
    pub product_savings: Money,
    /// Savings per unit from the loyalty tier, on the reduced base.
    pub tier_savings: Money,
}

/// Apply the product discount, then the tier discount, to one unit price.
///
/// Both percentages are validated at construction ([`DiscountPercent`]), so
/// stacking itself cannot fail. Invariants:
/// `final_unit_price <= unit_price` and `final_unit_price >= 0`.
#[must_use]
pub fn apply_discounts(
    unit_price: Money,
    product_discount: DiscountPercent,
    tier_discount: DiscountPercent,
) -> LineDiscount {
    let product_savings = unit_price.percent_of(product_discount);
    let price_after_product = unit_price.saturating_sub(product_savings);
    let tier_savings = price_after_product.percent_of(tier_discount);
    let final_unit_price = price_after_product.saturating_sub(tier_savings);

    LineDiscount {
        final_unit_price,
        product_savings,
        tier_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kes(amount: i64) -> Money {
        Money::from_shillings(amount).expect("money")
    }

    fn pct(percent: u8) -> DiscountPercent {
        DiscountPercent::from_u8(percent).expect("pct")
    }

    #[test]
    fn test_sequential_stacking() {
        // price 1000, product 10%, tier 5%:
        // productSavings=100, after=900, tierSavings=45, final=855
        let discount = apply_discounts(kes(1000), pct(10), pct(5));
        assert_eq!(discount.product_savings, kes(100));
        assert_eq!(discount.tier_savings, kes(45));
        assert_eq!(discount.final_unit_price, kes(855));
    }

    #[test]
    fn test_stacking_is_not_additive() {
        // 10% then 5% is 14.5% effective, not 15%
        let discount = apply_discounts(kes(1000), pct(10), pct(5));
        let additive = kes(1000).saturating_sub(kes(1000).percent_of(pct(15)));
        assert_ne!(discount.final_unit_price, additive);
    }

    #[test]
    fn test_zero_discounts_leave_price_untouched() {
        let discount = apply_discounts(kes(755), pct(0), pct(0));
        assert_eq!(discount.final_unit_price, kes(755));
        assert_eq!(discount.product_savings, Money::ZERO);
        assert_eq!(discount.tier_savings, Money::ZERO);
    }

    #[test]
    fn test_full_discount_reaches_zero() {
        let discount = apply_discounts(kes(499), pct(100), pct(7));
        assert_eq!(discount.product_savings, kes(499));
        assert_eq!(discount.tier_savings, Money::ZERO);
        assert_eq!(discount.final_unit_price, Money::ZERO);
    }

    #[test]
    fn test_rounding_matches_charged_amount() {
        // 3% of 999 = 29.97 -> 30; the savings figure and the charge both
        // derive from the same rounded value.
        let discount = apply_discounts(kes(999), pct(0), pct(3));
        assert_eq!(discount.tier_savings, kes(30));
        assert_eq!(discount.final_unit_price, kes(969));
    }

    #[test]
    fn test_monotone_and_bounded() {
        // final price never increases as either percentage grows, and stays
        // within [0, unit_price]
        let price = kes(12345);
        for product in (0..=100).step_by(5) {
            let mut last = price;
            for tier in 0..=100 {
                let discount = apply_discounts(price, pct(product), pct(tier));
                assert!(discount.final_unit_price <= last);
                assert!(discount.final_unit_price <= price);
                last = discount.final_unit_price;
            }
        }
        let price = kes(777);
        for tier in (0..=100).step_by(4) {
            let mut last = price;
            for product in 0..=100 {
                let discount = apply_discounts(price, pct(product), pct(tier));
                assert!(discount.final_unit_price <= last);
                last = discount.final_unit_price;
            }
        }
    }
}
