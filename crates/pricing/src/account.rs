//! Loyalty account snapshot consumed by the tier resolver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tajicart_core::{CardNumber, Points, Tier, UserId};

/// Where an account snapshot came from.
///
/// A fallback account (loyalty collaborator unreachable) renders the same as
/// a verified zero-points account but must never be conflated with one: no
/// discount is granted on unverified data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountSource {
    /// Fetched from the loyalty collaborator.
    #[default]
    Verified,
    /// Zero-benefit stand-in used when the loyalty lookup failed.
    Fallback,
}

/// A customer's loyalty account as fetched for one request.
///
/// `tier` is the last tier recorded by the loyalty collaborator. It is only
/// an input to the hysteresis rule in [`crate::resolver`]; the effective tier
/// is always recomputed, never trusted from here. The exception is
/// `tier_override`: administrator accounts are pinned to Platinum by an
/// explicit override rather than role checks scattered across call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub user_id: UserId,
    pub points: Points,
    /// Last recorded tier, input to the protected-status check.
    pub tier: Tier,
    pub card_number: CardNumber,
    pub expires_at: DateTime<Utc>,
    /// Deliberate administrator override; resolution short-circuits to this
    /// tier with no early-access status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_override: Option<Tier>,
    #[serde(default)]
    pub source: AccountSource,
}

impl LoyaltyAccount {
    /// The documented zero-benefit stand-in for a failed loyalty lookup.
    ///
    /// Flagged as [`AccountSource::Fallback`] so the quote pipeline can
    /// withhold every loyalty benefit while the UI still renders.
    #[must_use]
    pub fn fallback(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            points: Points::ZERO,
            tier: Tier::Basic,
            card_number: CardNumber::new(""),
            expires_at: now,
            tier_override: None,
            source: AccountSource::Fallback,
        }
    }

    /// Whether this snapshot came from the loyalty collaborator.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.source == AccountSource::Verified
    }
}
