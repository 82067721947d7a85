//! Order placement collaborator.
//!
//! The only boundary where a quote becomes permanent: point redemption and
//! reward consumption happen upstream when the order is accepted. The
//! engine itself never mutates points or reward state.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tajicart_core::{AddressId, CartLineId, OrderId, PaymentMethod, RewardId, UserId};
use tajicart_pricing::CheckoutQuote;

use super::{CollaboratorError, PlatformClient};

/// An order submission: the accepted quote plus delivery and payment data
/// the engine treats as opaque.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPlacement {
    pub user_id: UserId,
    pub quote: CheckoutQuote,
    pub line_ids: Vec<CartLineId>,
    pub address_id: AddressId,
    pub payment_method: PaymentMethod,
    /// Consumed on acceptance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_id: Option<RewardId>,
}

/// Upstream confirmation for a placed order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub invoice_receipt: String,
    /// Gateway-specific follow-up (e.g. a payment redirect), passed through
    /// untouched.
    #[serde(default)]
    pub payment_reference: Option<String>,
}

/// Order placement.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submit the order; returns the confirmation or a payment-specific
    /// failure from upstream.
    async fn place_order(
        &self,
        placement: &OrderPlacement,
    ) -> Result<OrderConfirmation, CollaboratorError>;
}

/// HTTP-backed order placement.
#[derive(Clone)]
pub struct HttpOrderService {
    client: Arc<PlatformClient>,
}

impl HttpOrderService {
    #[must_use]
    pub const fn new(client: Arc<PlatformClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    async fn place_order(
        &self,
        placement: &OrderPlacement,
    ) -> Result<OrderConfirmation, CollaboratorError> {
        self.client.post_json("/api/orders", placement).await
    }
}
