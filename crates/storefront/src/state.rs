//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{
    CatalogService, CollaboratorError, HttpCatalogService, HttpLoyaltyService, HttpOrderService,
    HttpRewardService, HttpThresholdService, LoyaltyService, OrderService, PlatformClient,
    RewardService, ThresholdService,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// configuration and the collaborator services. Services are trait objects
/// so tests can substitute stubs.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    loyalty: Arc<dyn LoyaltyService>,
    thresholds: Arc<dyn ThresholdService>,
    rewards: Arc<dyn RewardService>,
    catalog: Arc<dyn CatalogService>,
    orders: Arc<dyn OrderService>,
}

impl AppState {
    /// Create the application state with HTTP-backed collaborator services.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, CollaboratorError> {
        let client = Arc::new(PlatformClient::new(&config.api)?);

        Ok(Self::with_services(
            config,
            Arc::new(HttpLoyaltyService::new(Arc::clone(&client))),
            Arc::new(HttpThresholdService::new(Arc::clone(&client))),
            Arc::new(HttpRewardService::new(Arc::clone(&client))),
            Arc::new(HttpCatalogService::new(Arc::clone(&client))),
            Arc::new(HttpOrderService::new(client)),
        ))
    }

    /// Create state from explicit service implementations (used by tests).
    #[must_use]
    pub fn with_services(
        config: StorefrontConfig,
        loyalty: Arc<dyn LoyaltyService>,
        thresholds: Arc<dyn ThresholdService>,
        rewards: Arc<dyn RewardService>,
        catalog: Arc<dyn CatalogService>,
        orders: Arc<dyn OrderService>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                loyalty,
                thresholds,
                rewards,
                catalog,
                orders,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the loyalty account service.
    #[must_use]
    pub fn loyalty(&self) -> &dyn LoyaltyService {
        self.inner.loyalty.as_ref()
    }

    /// Get the tier threshold service.
    #[must_use]
    pub fn thresholds(&self) -> &dyn ThresholdService {
        self.inner.thresholds.as_ref()
    }

    /// Get the community reward service.
    #[must_use]
    pub fn rewards(&self) -> &dyn RewardService {
        self.inner.rewards.as_ref()
    }

    /// Get the product catalog service.
    #[must_use]
    pub fn catalog(&self) -> &dyn CatalogService {
        self.inner.catalog.as_ref()
    }

    /// Get the order placement service.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderService {
        self.inner.orders.as_ref()
    }
}
