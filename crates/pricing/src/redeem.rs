//! Loyalty point redemption against a checkout total.
//!
//! Redemption is opt-in per checkout and purely computational here: the
//! order-placement collaborator is the only party that ever deducts points
//! from the account.

use tracing::warn;

use tajicart_core::{Money, Points};

/// Compute the redeemable value for a checkout, at 1 point = KES 1.
///
/// With the toggle off the value is zero regardless of balance. Otherwise
/// the value is capped at both the available balance and the amount still
/// payable after rewards. A `requested` amount above the available balance
/// is clamped and logged; it is an over-redemption attempt, not a normal
/// zero case.
#[must_use]
pub fn redeemable_value(
    available: Points,
    requested: Option<Points>,
    price_after_rewards: Money,
    opt_in: bool,
) -> Money {
    if !opt_in {
        return Money::ZERO;
    }

    let spend = match requested {
        Some(requested) if requested > available => {
            warn!(
                requested = requested.as_u64(),
                available = available.as_u64(),
                "redemption request exceeds balance; clamping"
            );
            available
        }
        Some(requested) => requested,
        None => available,
    };

    spend.as_money().min(price_after_rewards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kes(amount: i64) -> Money {
        Money::from_shillings(amount).expect("money")
    }

    #[test]
    fn test_opt_out_is_zero() {
        assert_eq!(
            redeemable_value(Points::new(2500), None, kes(1800), false),
            Money::ZERO
        );
    }

    #[test]
    fn test_capped_by_price() {
        // 2500 points against an 1800 total redeems exactly 1800
        assert_eq!(
            redeemable_value(Points::new(2500), None, kes(1800), true),
            kes(1800)
        );
    }

    #[test]
    fn test_capped_by_balance() {
        // 50 points against a 2000 total redeems 50
        assert_eq!(
            redeemable_value(Points::new(50), None, kes(2000), true),
            kes(50)
        );
    }

    #[test]
    fn test_requested_amount_honored_when_within_balance() {
        assert_eq!(
            redeemable_value(Points::new(2500), Some(Points::new(300)), kes(1800), true),
            kes(300)
        );
    }

    #[test]
    fn test_over_redemption_clamped_to_balance() {
        assert_eq!(
            redeemable_value(Points::new(120), Some(Points::new(9999)), kes(1800), true),
            kes(120)
        );
    }

    #[test]
    fn test_zero_balance_redeems_nothing() {
        assert_eq!(
            redeemable_value(Points::ZERO, None, kes(500), true),
            Money::ZERO
        );
    }
}
