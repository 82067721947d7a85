//! The checkout quote pipeline.
//!
//! One pure function composes tier resolution, per-line discount stacking,
//! the community-reward effect and point redemption into the final payable
//! total. The step order is fixed; reordering changes the customer-facing
//! amount. Recomputing with identical inputs yields an identical quote, so
//! UI toggles (points on/off, reward selection) simply rebuild it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tajicart_core::{CartLineId, EarlyAccessStatus, Money, Tier};

use crate::account::LoyaltyAccount;
use crate::cart::CartLine;
use crate::error::QuoteError;
use crate::redeem::redeemable_value;
use crate::resolver::{TierResolution, resolve};
use crate::rewards::{CommunityReward, RewardEffect, effect_of};
use crate::stacker::{LineDiscount, apply_discounts};
use crate::thresholds::TierThresholdConfig;

/// Everything a quote is computed from.
///
/// `now` is supplied by the caller so the pipeline stays a pure function;
/// two calls with the same request produce bit-identical quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub lines: Vec<CartLine>,
    pub account: LoyaltyAccount,
    pub config: TierThresholdConfig,
    pub selected_reward: Option<CommunityReward>,
    /// Point-redemption toggle.
    pub redeem_points: bool,
    /// Optional explicit redemption amount; defaults to the full balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_points: Option<tajicart_core::Points>,
    pub now: DateTime<Utc>,
}

/// Per-line breakdown retained on the quote for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineQuote {
    pub line_id: CartLineId,
    pub quantity: u32,
    pub unit_price: Money,
    pub discount: LineDiscount,
    /// `final_unit_price * quantity`.
    pub line_total: Money,
}

/// The fully computed, about-to-be-charged breakdown for one checkout
/// attempt. Ephemeral: computed fresh per attempt, never persisted apart
/// from the order it produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// Untouched pre-discount subtotal.
    pub subtotal: Money,
    /// Total product-promotion savings across lines.
    pub product_discount_total: Money,
    /// Total tier savings across lines.
    pub tier_discount_total: Money,
    /// Sum of line totals after both per-line discounts.
    pub subtotal_after_line_discounts: Money,
    pub reward_effect: RewardEffect,
    /// Amount taken off by a percent-discount reward.
    pub reward_discount: Money,
    /// Set by a free-shipping reward; the delivery fee itself is handled
    /// outside this engine.
    pub free_shipping: bool,
    /// Value redeemed from loyalty points.
    pub points_redeemed: Money,
    pub total_payable: Money,
    pub tier: Tier,
    pub early_access_status: EarlyAccessStatus,
    /// False when the account was the zero-benefit fallback; no discount is
    /// granted on unverified data.
    pub loyalty_verified: bool,
    pub lines: Vec<LineQuote>,
}

/// Build a checkout quote.
///
/// Pipeline, in fixed order:
///
/// 1. Resolve the effective tier (validates the threshold config).
/// 2. Stack product and tier discounts per line; sum the line totals.
/// 3. Apply a percent-discount reward to that sum; a free-shipping reward
///    only sets the pass-through flag.
/// 4. Compute the redeemable point value against the result of step 3.
/// 5. `total_payable = max(0, step3 - points)`.
///
/// The pre-discount subtotal and each savings total are computed from the
/// stacker's own intermediates, never reconstructed by subtraction.
///
/// # Errors
///
/// Returns [`QuoteError`] for an empty cart or an invalid threshold
/// configuration. Cart lines and percentages are validated at construction
/// of their own types.
pub fn build_quote(request: &QuoteRequest) -> Result<CheckoutQuote, QuoteError> {
    if request.lines.is_empty() {
        return Err(QuoteError::EmptyCart);
    }

    // Step 1: effective tier. A fallback account never contributes a tier
    // discount, whatever its recorded balance claims.
    let resolution = resolve(&request.account, &request.config)?;
    let resolution = if request.account.is_verified() {
        resolution
    } else {
        warn!(
            user_id = %request.account.user_id,
            "loyalty data unverified; quoting without loyalty benefits"
        );
        TierResolution::basic()
    };
    let tier_percent = resolution.tier.discount_percent();

    // Step 2: per-line stacking.
    let mut lines = Vec::with_capacity(request.lines.len());
    let mut subtotal = Money::ZERO;
    let mut product_discount_total = Money::ZERO;
    let mut tier_discount_total = Money::ZERO;
    let mut subtotal_after_line_discounts = Money::ZERO;

    for line in &request.lines {
        let discount = apply_discounts(line.product.price, line.product.discount_percent, tier_percent);
        let line_total = discount.final_unit_price.mul_quantity(line.quantity);

        subtotal = subtotal.add(line.undiscounted_total());
        product_discount_total =
            product_discount_total.add(discount.product_savings.mul_quantity(line.quantity));
        tier_discount_total =
            tier_discount_total.add(discount.tier_savings.mul_quantity(line.quantity));
        subtotal_after_line_discounts = subtotal_after_line_discounts.add(line_total);

        lines.push(LineQuote {
            line_id: line.line_id.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            discount,
            line_total,
        });
    }

    // Step 3: cart-level reward. An expired reward should have been
    // filtered before it got here; treat one as absent, loudly.
    let reward = match &request.selected_reward {
        Some(reward) if reward.is_expired(request.now) => {
            warn!(
                reward_id = %reward.reward_id,
                expired_at = %reward.expiry_date,
                "expired reward reached the quote pipeline; ignoring"
            );
            None
        }
        other => other.as_ref(),
    };
    let reward_effect = effect_of(reward);
    let reward_discount = match reward_effect {
        RewardEffect::PercentDiscount(percent) => {
            subtotal_after_line_discounts.percent_of(percent)
        }
        RewardEffect::None | RewardEffect::FreeShipping => Money::ZERO,
    };
    let free_shipping = reward_effect == RewardEffect::FreeShipping;
    let after_reward = subtotal_after_line_discounts.saturating_sub(reward_discount);

    // Step 4: point redemption against the post-reward amount.
    let points_redeemed = if request.account.is_verified() {
        redeemable_value(
            request.account.points,
            request.requested_points,
            after_reward,
            request.redeem_points,
        )
    } else {
        Money::ZERO
    };

    // Step 5: final payable total, floored at zero.
    let total_payable = after_reward.saturating_sub(points_redeemed);

    Ok(CheckoutQuote {
        subtotal,
        product_discount_total,
        tier_discount_total,
        subtotal_after_line_discounts,
        reward_effect,
        reward_discount,
        free_shipping,
        points_redeemed,
        total_payable,
        tier: resolution.tier,
        early_access_status: resolution.status,
        loyalty_verified: request.account.is_verified(),
        lines,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use tajicart_core::{
        CampaignId, CardNumber, CartLineId, DiscountPercent, Points, ProductId, RewardId, UserId,
    };

    use super::*;
    use crate::account::AccountSource;
    use crate::cart::ProductSnapshot;
    use crate::rewards::RewardKind;
    use crate::thresholds::TierThreshold;

    fn kes(amount: i64) -> Money {
        Money::from_shillings(amount).expect("money")
    }

    fn pct(percent: u8) -> DiscountPercent {
        DiscountPercent::from_u8(percent).expect("pct")
    }

    fn line(id: &str, price: i64, discount: u8, quantity: u32) -> CartLine {
        let product = ProductSnapshot::new(
            ProductId::new(format!("p-{id}")),
            kes(price),
            pct(discount),
            100,
        )
        .expect("snapshot");
        CartLine::new(CartLineId::new(id), product, quantity).expect("line")
    }

    fn account(points: u64, recorded: Tier) -> LoyaltyAccount {
        LoyaltyAccount {
            user_id: UserId::new("u-1"),
            points: Points::new(points),
            tier: recorded,
            card_number: CardNumber::new("TAJI000000000001"),
            expires_at: Utc::now() + Duration::days(365),
            tier_override: None,
            source: AccountSource::Verified,
        }
    }

    fn discount_reward(percent: u8) -> CommunityReward {
        CommunityReward {
            reward_id: RewardId::new("r-1"),
            campaign_id: CampaignId::new("c-1"),
            kind: RewardKind::Discount(pct(percent)),
            campaign_title: "Estate Clean-Up Drive".to_owned(),
            expiry_date: Utc::now() + Duration::days(7),
        }
    }

    fn request(lines: Vec<CartLine>, account: LoyaltyAccount) -> QuoteRequest {
        QuoteRequest {
            lines,
            account,
            config: TierThresholdConfig::default(),
            selected_reward: None,
            redeem_points: false,
            requested_points: None,
            now: Utc::now(),
        }
    }

    #[test]
    fn test_single_line_matches_stacker() {
        // price 1000, product 10%, Gold tier 5%: final unit 855
        let mut req = request(vec![line("l-1", 1000, 10, 1)], account(3000, Tier::Gold));
        req.config.early_access_enabled = false;
        let quote = build_quote(&req).expect("quote");

        assert_eq!(quote.tier, Tier::Gold);
        assert_eq!(quote.subtotal, kes(1000));
        assert_eq!(quote.product_discount_total, kes(100));
        assert_eq!(quote.tier_discount_total, kes(45));
        assert_eq!(quote.subtotal_after_line_discounts, kes(855));
        assert_eq!(quote.total_payable, kes(855));
    }

    #[test]
    fn test_reward_and_full_redemption_reach_zero() {
        // Subtotal after line discounts 2000, 10% reward -> 1800,
        // 2500 points -> redeem 1800, payable 0. Thresholds are raised so
        // the 2500-point balance stays Basic and the base is exactly 2000.
        let mut req = request(vec![line("l-1", 1000, 0, 2)], account(2500, Tier::Basic));
        req.config.bronze = TierThreshold {
            standard: Points::new(5000),
            early: Points::new(4000),
        };
        req.config.silver = TierThreshold {
            standard: Points::new(15000),
            early: Points::new(12000),
        };
        req.config.gold = TierThreshold {
            standard: Points::new(30000),
            early: Points::new(25000),
        };
        req.config.platinum = TierThreshold {
            standard: Points::new(50000),
            early: Points::new(37500),
        };
        req.selected_reward = Some(discount_reward(10));
        req.redeem_points = true;
        let quote = build_quote(&req).expect("quote");

        assert_eq!(quote.subtotal_after_line_discounts, kes(2000));
        assert_eq!(quote.reward_discount, kes(200));
        assert_eq!(quote.points_redeemed, kes(1800));
        assert_eq!(quote.total_payable, Money::ZERO);
    }

    #[test]
    fn test_partial_redemption() {
        // 50 points against a 2000 total: payable 1950.
        let mut req = request(vec![line("l-1", 2000, 0, 1)], account(50, Tier::Basic));
        req.redeem_points = true;
        let quote = build_quote(&req).expect("quote");

        assert_eq!(quote.points_redeemed, kes(50));
        assert_eq!(quote.total_payable, kes(1950));
    }

    #[test]
    fn test_redemption_off_ignores_balance() {
        let req = request(vec![line("l-1", 2000, 0, 1)], account(5000, Tier::Platinum));
        let quote = build_quote(&req).expect("quote");
        assert_eq!(quote.points_redeemed, Money::ZERO);
    }

    #[test]
    fn test_free_shipping_passes_through() {
        let mut req = request(vec![line("l-1", 500, 0, 1)], account(0, Tier::Basic));
        req.selected_reward = Some(CommunityReward {
            kind: RewardKind::Shipping,
            ..discount_reward(0)
        });
        let quote = build_quote(&req).expect("quote");

        assert!(quote.free_shipping);
        assert_eq!(quote.reward_discount, Money::ZERO);
        assert_eq!(quote.total_payable, kes(500));
    }

    #[test]
    fn test_expired_reward_contributes_nothing() {
        let mut req = request(vec![line("l-1", 1000, 0, 1)], account(0, Tier::Basic));
        let mut reward = discount_reward(50);
        reward.expiry_date = Utc::now() - Duration::days(1);
        req.selected_reward = Some(reward);
        let quote = build_quote(&req).expect("quote");

        assert_eq!(quote.reward_effect, RewardEffect::None);
        assert_eq!(quote.total_payable, kes(1000));
    }

    #[test]
    fn test_fallback_account_gets_zero_benefit() {
        let mut fallback = LoyaltyAccount::fallback(UserId::new("u-1"), Utc::now());
        // Even a corrupted fallback claiming points and tier is ignored
        fallback.points = Points::new(9000);
        fallback.tier = Tier::Platinum;
        let mut req = request(vec![line("l-1", 1000, 0, 1)], fallback);
        req.redeem_points = true;
        let quote = build_quote(&req).expect("quote");

        assert!(!quote.loyalty_verified);
        assert_eq!(quote.tier, Tier::Basic);
        assert_eq!(quote.tier_discount_total, Money::ZERO);
        assert_eq!(quote.points_redeemed, Money::ZERO);
        assert_eq!(quote.total_payable, kes(1000));
    }

    #[test]
    fn test_savings_totals_derived_independently() {
        // Multi-line cart: each displayed total comes from its own formula.
        let req = request(
            vec![line("l-1", 999, 7, 3), line("l-2", 1450, 25, 1)],
            account(1500, Tier::Silver),
        );
        let quote = build_quote(&req).expect("quote");

        let expected_subtotal = kes(999 * 3 + 1450);
        assert_eq!(quote.subtotal, expected_subtotal);

        // 7% of 999 = 69.93 -> 70; 25% of 1450 = 362.5 -> 363 (half away
        // from zero)
        assert_eq!(quote.product_discount_total, kes(70 * 3 + 363));

        // Tier 3% on the reduced bases: 3% of 929 = 27.87 -> 28;
        // 3% of 1087 = 32.61 -> 33
        assert_eq!(quote.tier_discount_total, kes(28 * 3 + 33));

        assert_eq!(
            quote.subtotal_after_line_discounts,
            kes((999 - 70 - 28) * 3 + (1450 - 363 - 33))
        );
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let req = request(vec![], account(0, Tier::Basic));
        assert!(matches!(build_quote(&req), Err(QuoteError::EmptyCart)));
    }

    #[test]
    fn test_invalid_config_fails_whole_quote() {
        let mut req = request(vec![line("l-1", 100, 0, 1)], account(0, Tier::Basic));
        req.config.silver.standard = Points::new(400);
        assert!(matches!(
            build_quote(&req),
            Err(QuoteError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_idempotent_bit_identical() {
        let mut req = request(
            vec![line("l-1", 999, 7, 3), line("l-2", 1450, 25, 1)],
            account(1200, Tier::Silver),
        );
        req.selected_reward = Some(discount_reward(10));
        req.redeem_points = true;
        req.config.early_access_enabled = true;

        let first = build_quote(&req).expect("quote");
        let second = build_quote(&req).expect("quote");
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).expect("serialize"),
            serde_json::to_vec(&second).expect("serialize")
        );
    }

    #[test]
    fn test_early_access_tier_feeds_discount() {
        // 1200 points with early access on resolves Silver (3%) instead of
        // Bronze (2%); the line math must see the elevated percentage.
        let mut req = request(vec![line("l-1", 1000, 0, 1)], account(1200, Tier::Bronze));
        req.config.early_access_enabled = true;
        let quote = build_quote(&req).expect("quote");

        assert_eq!(quote.tier, Tier::Silver);
        assert_eq!(quote.early_access_status, EarlyAccessStatus::EarlyActive);
        assert_eq!(quote.tier_discount_total, kes(30));
        assert_eq!(quote.total_payable, kes(970));
    }
}
