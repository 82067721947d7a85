//! Community-campaign rewards and their cart-level effect.
//!
//! At most one reward is active per checkout. Selection has toggle
//! semantics: selecting the active reward again clears it, selecting a
//! different one replaces it. Rewards past their expiry date are filtered
//! out before selection; one slipping through is logged, never applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use tajicart_core::{CampaignId, DiscountPercent, Points, RewardId};

/// What a community reward grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RewardKind {
    /// Percentage off the cart subtotal after per-line discounts.
    Discount(DiscountPercent),
    /// Waives the delivery fee; the fee itself lives outside this engine.
    Shipping,
    /// A free product, fulfilled by the order collaborator.
    Product,
    /// Bonus loyalty points, credited by the order collaborator.
    Points(Points),
}

/// A reward earned through a completed community campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityReward {
    pub reward_id: RewardId,
    pub campaign_id: CampaignId,
    #[serde(flatten)]
    pub kind: RewardKind,
    pub campaign_title: String,
    pub expiry_date: DateTime<Utc>,
}

impl CommunityReward {
    /// Whether the reward has expired as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now
    }
}

/// Drop expired rewards from a fetched list, logging each one dropped.
#[must_use]
pub fn filter_active(rewards: Vec<CommunityReward>, now: DateTime<Utc>) -> Vec<CommunityReward> {
    rewards
        .into_iter()
        .filter(|reward| {
            if reward.is_expired(now) {
                warn!(
                    reward_id = %reward.reward_id,
                    campaign = %reward.campaign_title,
                    expired_at = %reward.expiry_date,
                    "dropping expired community reward"
                );
                false
            } else {
                true
            }
        })
        .collect()
}

/// The cart-level effect of the selected reward.
///
/// Product and bonus-point rewards have no effect on the payable total; they
/// pass through to the order-placement boundary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "effect", content = "value", rename_all = "snake_case")]
pub enum RewardEffect {
    #[default]
    None,
    PercentDiscount(DiscountPercent),
    FreeShipping,
}

/// The effect a reward (if any) has on the quote.
#[must_use]
pub fn effect_of(reward: Option<&CommunityReward>) -> RewardEffect {
    match reward.map(|r| r.kind) {
        Some(RewardKind::Discount(percent)) => RewardEffect::PercentDiscount(percent),
        Some(RewardKind::Shipping) => RewardEffect::FreeShipping,
        Some(RewardKind::Product | RewardKind::Points(_)) | None => RewardEffect::None,
    }
}

/// Outcome of a toggle on the reward selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The reward is now the active selection.
    Selected,
    /// The reward was already active and is now cleared.
    Cleared,
    /// The reward was expired; the selection is unchanged.
    RejectedExpired,
}

/// Selection state for the single active community reward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardSelection {
    selected: Option<CommunityReward>,
}

impl RewardSelection {
    /// No reward selected.
    #[must_use]
    pub const fn none() -> Self {
        Self { selected: None }
    }

    /// The currently selected reward.
    #[must_use]
    pub const fn selected(&self) -> Option<&CommunityReward> {
        self.selected.as_ref()
    }

    /// Toggle a reward: select it, or clear it if it is already active.
    /// Selecting a different reward replaces the current one.
    ///
    /// An expired reward leaves the selection unchanged; the attempt is
    /// logged rather than treated as a normal no-op.
    pub fn toggle(&mut self, reward: CommunityReward, now: DateTime<Utc>) -> ToggleOutcome {
        if reward.is_expired(now) {
            warn!(
                reward_id = %reward.reward_id,
                expired_at = %reward.expiry_date,
                "rejected selection of expired reward"
            );
            return ToggleOutcome::RejectedExpired;
        }
        if self
            .selected
            .as_ref()
            .is_some_and(|current| current.reward_id == reward.reward_id)
        {
            self.selected = None;
            ToggleOutcome::Cleared
        } else {
            self.selected = Some(reward);
            ToggleOutcome::Selected
        }
    }
}
