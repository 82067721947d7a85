//! Community reward list collaborator.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use tajicart_core::UserId;
use tajicart_pricing::{CommunityReward, rewards::filter_active};

use super::{CollaboratorError, PlatformClient};

/// Active community reward lookup.
#[async_trait]
pub trait RewardService: Send + Sync {
    /// Fetch the user's active, non-expired rewards.
    async fn active_rewards(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CommunityReward>, CollaboratorError>;

    /// Fetch rewards, degrading to an empty list on failure. A missing
    /// reward list can only under-discount, so it is not fatal to a quote;
    /// the failure is logged rather than passed off as "no rewards earned".
    async fn active_rewards_or_none(&self, user_id: &UserId) -> Vec<CommunityReward> {
        match self.active_rewards(user_id).await {
            Ok(rewards) => rewards,
            Err(error) => {
                warn!(%user_id, %error, "reward lookup failed; quoting without rewards");
                Vec::new()
            }
        }
    }
}

/// HTTP-backed reward lookup.
#[derive(Clone)]
pub struct HttpRewardService {
    client: Arc<PlatformClient>,
}

impl HttpRewardService {
    #[must_use]
    pub const fn new(client: Arc<PlatformClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RewardService for HttpRewardService {
    async fn active_rewards(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CommunityReward>, CollaboratorError> {
        let rewards: Vec<CommunityReward> = self
            .client
            .get_json(&format!("/api/users/{user_id}/rewards"))
            .await?;

        // The upstream filters expired rewards too; this is the engine-side
        // guarantee that none reach selection.
        Ok(filter_active(rewards, Utc::now()))
    }
}
