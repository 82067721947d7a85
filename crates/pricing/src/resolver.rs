//! Effective loyalty tier resolution.
//!
//! Resolution is a pure function of the account snapshot and the threshold
//! configuration. It is evaluated identically wherever a tier (and therefore
//! a tier discount) is needed - card display, cart summary, checkout quote.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tajicart_core::{EarlyAccessStatus, Tier};

use crate::account::LoyaltyAccount;
use crate::error::QuoteError;
use crate::thresholds::TierThresholdConfig;

/// The outcome of tier resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierResolution {
    pub tier: Tier,
    pub status: EarlyAccessStatus,
}

impl TierResolution {
    /// Resolution for an account with no loyalty benefits.
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            tier: Tier::Basic,
            status: EarlyAccessStatus::None,
        }
    }
}

/// Resolve the effective tier and early-access status for an account.
///
/// Rules, in order:
///
/// 1. A pinned override (administrator accounts) short-circuits to that tier
///    with status `None`.
/// 2. The standard tier is the highest tier whose standard threshold the
///    points balance meets.
/// 3. With early access enabled, the balance may lift the account exactly
///    one rung above the standard tier when it meets that rung's early
///    threshold. Never more than one rung per evaluation.
/// 4. With early access disabled, an account whose last recorded tier sits
///    one rung above its standard tier keeps that tier (`Protected`) while
///    the balance still meets the rung's early threshold.
///
/// # Errors
///
/// Returns [`QuoteError::InvalidThresholds`] when the configuration fails
/// validation; a misconfigured ladder is never silently normalized.
pub fn resolve(
    account: &LoyaltyAccount,
    config: &TierThresholdConfig,
) -> Result<TierResolution, QuoteError> {
    config.validate()?;

    if let Some(pinned) = account.tier_override {
        debug!(user_id = %account.user_id, tier = %pinned, "tier pinned by override");
        return Ok(TierResolution {
            tier: pinned,
            status: EarlyAccessStatus::None,
        });
    }

    let points = account.points;
    let standard = config.standard_tier_for(points);

    if config.early_access_enabled {
        if let Some(next) = standard.next() {
            // RANKED tiers always carry thresholds
            if let Some(threshold) = config.threshold(next) {
                if points >= threshold.early && points < threshold.standard {
                    debug!(
                        user_id = %account.user_id,
                        tier = %next,
                        points = points.as_u64(),
                        "early access elevation"
                    );
                    return Ok(TierResolution {
                        tier: next,
                        status: EarlyAccessStatus::EarlyActive,
                    });
                }
            }
        }
    } else if account.tier > standard && Some(account.tier) == standard.next() {
        if let Some(threshold) = config.threshold(account.tier) {
            if points >= threshold.early {
                debug!(
                    user_id = %account.user_id,
                    tier = %account.tier,
                    points = points.as_u64(),
                    "early access tier protected after policy disable"
                );
                return Ok(TierResolution {
                    tier: account.tier,
                    status: EarlyAccessStatus::Protected,
                });
            }
        }
    }

    Ok(TierResolution {
        tier: standard,
        status: EarlyAccessStatus::None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use tajicart_core::{CardNumber, Points, UserId};

    use super::*;
    use crate::account::AccountSource;

    fn account(points: u64, recorded: Tier) -> LoyaltyAccount {
        LoyaltyAccount {
            user_id: UserId::new("u-1"),
            points: Points::new(points),
            tier: recorded,
            card_number: CardNumber::new("TAJI000000000001"),
            expires_at: Utc::now(),
            tier_override: None,
            source: AccountSource::Verified,
        }
    }

    fn config(early_access: bool) -> TierThresholdConfig {
        TierThresholdConfig {
            early_access_enabled: early_access,
            ..TierThresholdConfig::default()
        }
    }

    #[test]
    fn test_zero_points_is_basic() {
        let resolution = resolve(&account(0, Tier::Basic), &config(true)).expect("resolve");
        assert_eq!(resolution, TierResolution::basic());
    }

    #[test]
    fn test_standard_thresholds_inclusive() {
        let config = config(false);
        let at = resolve(&account(1500, Tier::Bronze), &config).expect("resolve");
        assert_eq!(at.tier, Tier::Silver);
        assert_eq!(at.status, EarlyAccessStatus::None);

        let below = resolve(&account(1499, Tier::Bronze), &config).expect("resolve");
        assert_eq!(below.tier, Tier::Bronze);
    }

    #[test]
    fn test_early_access_elevates_one_rung() {
        // Scenario: 1200 points, Bronze standard at 500, Silver standard at
        // 1500 with early threshold 1200 -> Silver via early access.
        let resolution = resolve(&account(1200, Tier::Bronze), &config(true)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Silver);
        assert_eq!(resolution.status, EarlyAccessStatus::EarlyActive);
    }

    #[test]
    fn test_early_access_never_skips_rungs() {
        // 2500 points meets Gold's early threshold, but the account stands
        // at Silver (1500..3000); elevation stops at one rung.
        let resolution = resolve(&account(2500, Tier::Silver), &config(true)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Gold);
        assert_eq!(resolution.status, EarlyAccessStatus::EarlyActive);

        // 1200 points never reaches Gold even though a two-rung jump from
        // Bronze would; only Silver's early threshold is in range.
        let resolution = resolve(&account(1200, Tier::Basic), &config(true)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Silver);
    }

    #[test]
    fn test_early_access_inactive_below_early_threshold() {
        let resolution = resolve(&account(1199, Tier::Bronze), &config(true)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Bronze);
        assert_eq!(resolution.status, EarlyAccessStatus::None);
    }

    #[test]
    fn test_protected_after_policy_disable() {
        // Scenario: recorded Silver, 1200 points, early access now disabled.
        let resolution = resolve(&account(1200, Tier::Silver), &config(false)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Silver);
        assert_eq!(resolution.status, EarlyAccessStatus::Protected);
    }

    #[test]
    fn test_protection_lost_when_points_drop() {
        // Same account at 1100 points no longer meets Silver's early
        // threshold; the tier falls back to Bronze.
        let resolution = resolve(&account(1100, Tier::Silver), &config(false)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Bronze);
        assert_eq!(resolution.status, EarlyAccessStatus::None);
    }

    #[test]
    fn test_protection_only_one_rung_above_standard() {
        // Recorded Gold but standing at Bronze standard: two rungs apart,
        // no protection.
        let resolution = resolve(&account(600, Tier::Gold), &config(false)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Bronze);
        assert_eq!(resolution.status, EarlyAccessStatus::None);
    }

    #[test]
    fn test_admin_override_pins_platinum() {
        let mut admin = account(37, Tier::Basic);
        admin.tier_override = Some(Tier::Platinum);
        let resolution = resolve(&admin, &config(true)).expect("resolve");
        assert_eq!(resolution.tier, Tier::Platinum);
        assert_eq!(resolution.status, EarlyAccessStatus::None);
    }

    #[test]
    fn test_rejects_misconfigured_thresholds() {
        let mut bad = config(true);
        bad.silver.early = Points::new(2000);
        let result = resolve(&account(1200, Tier::Bronze), &bad);
        assert!(matches!(result, Err(QuoteError::InvalidThresholds(_))));
    }

    #[test]
    fn test_monotonic_in_points_with_fixed_policy() {
        // For a fixed config and recorded tier, the resolved tier never
        // decreases as points increase.
        for early_access in [false, true] {
            let config = config(early_access);
            let mut last = Tier::Basic;
            for points in (0..6000).step_by(25) {
                let resolution =
                    resolve(&account(points, Tier::Basic), &config).expect("resolve");
                assert!(
                    resolution.tier >= last,
                    "tier regressed at {points} points (early_access={early_access})"
                );
                last = resolution.tier;
            }
        }
    }
}
