//! Stub collaborator services for exercising the storefront without a
//! network.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::SecretString;

use tajicart_core::{ProductId, UserId};
use tajicart_pricing::{CommunityReward, LoyaltyAccount, ProductSnapshot, TierThresholdConfig};
use tajicart_storefront::config::{PlatformApiConfig, StorefrontConfig};
use tajicart_storefront::services::{
    CatalogService, CollaboratorError, LoyaltyService, OrderConfirmation, OrderPlacement,
    OrderService, RewardService, ThresholdService,
};

/// Admin token used by the stub configuration.
pub const TEST_ADMIN_TOKEN: &str = "kY8v#mQ2pX!rT5wZ9nB3cF7jH1dL4gS6";

/// A storefront configuration that never touches the environment.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        api: PlatformApiConfig {
            base_url: "http://localhost:0".to_string(),
            token: SecretString::from("t0k3n-t0k3n-t0k3n-t0k3n-t0k3n!!"),
        },
        admin_token: SecretString::from(TEST_ADMIN_TOKEN),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

fn unavailable() -> CollaboratorError {
    CollaboratorError::Api {
        status: 503,
        message: "stubbed outage".to_string(),
    }
}

/// Loyalty stub: a fixed account, or a simulated outage.
pub struct StubLoyalty {
    pub account: Option<LoyaltyAccount>,
}

#[async_trait]
impl LoyaltyService for StubLoyalty {
    async fn account(&self, _user_id: &UserId) -> Result<LoyaltyAccount, CollaboratorError> {
        self.account.clone().ok_or_else(unavailable)
    }
}

/// Threshold stub: a fixed configuration, or a simulated outage.
pub struct StubThresholds {
    pub config: Option<TierThresholdConfig>,
}

#[async_trait]
impl ThresholdService for StubThresholds {
    async fn current(&self) -> Result<TierThresholdConfig, CollaboratorError> {
        self.config.ok_or_else(unavailable)
    }

    async fn update(
        &self,
        config: &TierThresholdConfig,
    ) -> Result<TierThresholdConfig, CollaboratorError> {
        Ok(*config)
    }
}

/// Reward stub: a fixed list, or a simulated outage.
pub struct StubRewards {
    pub rewards: Option<Vec<CommunityReward>>,
}

#[async_trait]
impl RewardService for StubRewards {
    async fn active_rewards(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<CommunityReward>, CollaboratorError> {
        self.rewards.clone().ok_or_else(unavailable)
    }
}

/// Catalog stub backed by a map; unknown products are not found.
pub struct StubCatalog {
    pub products: HashMap<ProductId, ProductSnapshot>,
}

#[async_trait]
impl CatalogService for StubCatalog {
    async fn snapshot(&self, product_id: &ProductId) -> Result<ProductSnapshot, CollaboratorError> {
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CollaboratorError::NotFound(product_id.to_string()))
    }
}

/// Order stub that records every placement it accepts.
#[derive(Default)]
pub struct StubOrders {
    pub placed: Mutex<Vec<OrderPlacement>>,
}

#[async_trait]
impl OrderService for StubOrders {
    async fn place_order(
        &self,
        placement: &OrderPlacement,
    ) -> Result<OrderConfirmation, CollaboratorError> {
        self.placed
            .lock()
            .map_err(|_| CollaboratorError::InvalidPayload("poisoned stub".to_string()))?
            .push(placement.clone());
        Ok(OrderConfirmation {
            order_id: tajicart_core::OrderId::new("ORD-TEST-1"),
            invoice_receipt: "RCPT-TEST-1".to_string(),
            payment_reference: None,
        })
    }
}
