//! Loyalty account lookup collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use tajicart_core::{CardNumber, Points, Tier, UserId};
use tajicart_pricing::{AccountSource, LoyaltyAccount};

use super::{CollaboratorError, PlatformClient};

/// Loyalty account lookup.
#[async_trait]
pub trait LoyaltyService: Send + Sync {
    /// Fetch the account for a user.
    async fn account(&self, user_id: &UserId) -> Result<LoyaltyAccount, CollaboratorError>;

    /// Fetch the account, degrading to the flagged zero-benefit fallback on
    /// failure so the caller can still render a page. The fallback is never
    /// conflated with a verified zero-points account.
    async fn account_or_fallback(&self, user_id: &UserId) -> LoyaltyAccount {
        match self.account(user_id).await {
            Ok(account) => account,
            Err(error) => {
                warn!(%user_id, %error, "loyalty lookup failed; using fallback account");
                LoyaltyAccount::fallback(user_id.clone(), Utc::now())
            }
        }
    }
}

/// Wire shape of a loyalty card from the platform API.
#[derive(Debug, Deserialize)]
struct LoyaltyCardDto {
    points: u64,
    tier: Tier,
    card_number: String,
    expires_at: DateTime<Utc>,
    /// Administrator accounts are pinned to Platinum upstream.
    #[serde(default)]
    is_admin: bool,
}

/// HTTP-backed loyalty lookup.
#[derive(Clone)]
pub struct HttpLoyaltyService {
    client: Arc<PlatformClient>,
}

impl HttpLoyaltyService {
    #[must_use]
    pub const fn new(client: Arc<PlatformClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LoyaltyService for HttpLoyaltyService {
    async fn account(&self, user_id: &UserId) -> Result<LoyaltyAccount, CollaboratorError> {
        let dto: LoyaltyCardDto = self
            .client
            .get_json(&format!("/api/users/{user_id}/loyalty-card"))
            .await?;

        Ok(LoyaltyAccount {
            user_id: user_id.clone(),
            points: Points::new(dto.points),
            tier: dto.tier,
            card_number: CardNumber::new(dto.card_number),
            expires_at: dto.expires_at,
            tier_override: dto.is_admin.then_some(Tier::Platinum),
            source: AccountSource::Verified,
        })
    }
}
