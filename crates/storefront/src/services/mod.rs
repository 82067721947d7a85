//! Collaborator service clients.
//!
//! The engine consumes loyalty accounts, tier thresholds, community rewards,
//! product snapshots and order placement as external collaborators behind
//! one platform API. Each concern gets a trait (stubbed in tests) and a
//! `reqwest`-backed implementation sharing [`PlatformClient`].
//!
//! Degradation contract:
//! - loyalty lookup failure -> flagged fallback account (zero benefit)
//! - threshold lookup failure -> fatal to the quote
//! - reward list failure -> empty list, logged

pub mod catalog;
pub mod loyalty;
pub mod orders;
pub mod rewards;
pub mod thresholds;

pub use catalog::{CatalogService, HttpCatalogService};
pub use loyalty::{HttpLoyaltyService, LoyaltyService};
pub use orders::{HttpOrderService, OrderConfirmation, OrderPlacement, OrderService};
pub use rewards::{HttpRewardService, RewardService};
pub use thresholds::{HttpThresholdService, ThresholdService};

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::PlatformApiConfig;

/// Errors that can occur when calling a collaborator.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Entity not found upstream.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response decoded but failed domain validation.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// The platform API's standard response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shared HTTP client for the platform API.
#[derive(Clone)]
pub struct PlatformClient {
    client: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a client with the service token installed as a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &PlatformApiConfig) -> Result<Self, CollaboratorError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", config.token.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| CollaboratorError::InvalidPayload(format!("invalid token: {e}")))?,
        );

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// GET a JSON resource, unwrapping the platform envelope.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CollaboratorError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::unwrap_envelope(path, response).await
    }

    /// POST a JSON body, unwrapping the platform envelope.
    pub(crate) async fn post_json<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CollaboratorError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::unwrap_envelope(path, response).await
    }

    /// PUT a JSON body, unwrapping the platform envelope.
    pub(crate) async fn put_json<B: serde::Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CollaboratorError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.put(&url).json(body).send().await?;
        Self::unwrap_envelope(path, response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, CollaboratorError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CollaboratorError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CollaboratorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = response.json().await?;
        if !envelope.success {
            return Err(CollaboratorError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "unspecified upstream failure".to_string()),
            });
        }
        envelope
            .data
            .ok_or_else(|| CollaboratorError::InvalidPayload(format!("{path}: missing data")))
    }
}
