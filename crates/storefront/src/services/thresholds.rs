//! Tier threshold configuration collaborator.
//!
//! Thresholds are read fresh for every quote - the early-access switch can
//! flip between requests, so nothing here is cached. Unavailability is fatal
//! to a quote: discount correctness cannot be guaranteed without the active
//! configuration.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tajicart_core::Points;
use tajicart_pricing::{TierThreshold, TierThresholdConfig};

use super::{CollaboratorError, PlatformClient};

/// Tier threshold configuration lookup and (privileged) update.
#[async_trait]
pub trait ThresholdService: Send + Sync {
    /// Fetch the active configuration.
    async fn current(&self) -> Result<TierThresholdConfig, CollaboratorError>;

    /// Replace the active configuration. The caller validates before
    /// calling; the collaborator re-validates on its side.
    async fn update(
        &self,
        config: &TierThresholdConfig,
    ) -> Result<TierThresholdConfig, CollaboratorError>;
}

/// Wire shape of the threshold settings, matching the platform API's flat
/// field layout.
#[derive(Debug, Serialize, Deserialize)]
struct ThresholdsDto {
    bronze_threshold: u64,
    silver_threshold: u64,
    gold_threshold: u64,
    platinum_threshold: u64,
    early_access_enabled: bool,
    early_bronze_threshold: u64,
    early_silver_threshold: u64,
    early_gold_threshold: u64,
    early_platinum_threshold: u64,
}

impl From<&TierThresholdConfig> for ThresholdsDto {
    fn from(config: &TierThresholdConfig) -> Self {
        Self {
            bronze_threshold: config.bronze.standard.as_u64(),
            silver_threshold: config.silver.standard.as_u64(),
            gold_threshold: config.gold.standard.as_u64(),
            platinum_threshold: config.platinum.standard.as_u64(),
            early_access_enabled: config.early_access_enabled,
            early_bronze_threshold: config.bronze.early.as_u64(),
            early_silver_threshold: config.silver.early.as_u64(),
            early_gold_threshold: config.gold.early.as_u64(),
            early_platinum_threshold: config.platinum.early.as_u64(),
        }
    }
}

impl From<ThresholdsDto> for TierThresholdConfig {
    fn from(dto: ThresholdsDto) -> Self {
        Self {
            bronze: TierThreshold {
                standard: Points::new(dto.bronze_threshold),
                early: Points::new(dto.early_bronze_threshold),
            },
            silver: TierThreshold {
                standard: Points::new(dto.silver_threshold),
                early: Points::new(dto.early_silver_threshold),
            },
            gold: TierThreshold {
                standard: Points::new(dto.gold_threshold),
                early: Points::new(dto.early_gold_threshold),
            },
            platinum: TierThreshold {
                standard: Points::new(dto.platinum_threshold),
                early: Points::new(dto.early_platinum_threshold),
            },
            early_access_enabled: dto.early_access_enabled,
        }
    }
}

/// HTTP-backed threshold configuration.
#[derive(Clone)]
pub struct HttpThresholdService {
    client: Arc<PlatformClient>,
}

impl HttpThresholdService {
    #[must_use]
    pub const fn new(client: Arc<PlatformClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ThresholdService for HttpThresholdService {
    async fn current(&self) -> Result<TierThresholdConfig, CollaboratorError> {
        let dto: ThresholdsDto = self.client.get_json("/api/loyalty/thresholds").await?;
        let config = TierThresholdConfig::from(dto);
        config
            .validate()
            .map_err(|e| CollaboratorError::InvalidPayload(e.to_string()))?;
        Ok(config)
    }

    async fn update(
        &self,
        config: &TierThresholdConfig,
    ) -> Result<TierThresholdConfig, CollaboratorError> {
        let dto: ThresholdsDto = self
            .client
            .put_json("/api/loyalty/thresholds", &ThresholdsDto::from(config))
            .await?;
        Ok(TierThresholdConfig::from(dto))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_round_trip() {
        let config = TierThresholdConfig {
            early_access_enabled: true,
            ..TierThresholdConfig::default()
        };
        let dto = ThresholdsDto::from(&config);
        assert_eq!(dto.bronze_threshold, 500);
        assert_eq!(dto.early_platinum_threshold, 3750);
        let back = TierThresholdConfig::from(dto);
        assert_eq!(back, config);
    }
}
