//! Tier point thresholds and the early-access policy switch.
//!
//! The configuration is immutable per request: collaborators fetch it fresh
//! for every quote (`early_access_enabled` can change between requests, and a
//! stale copy would let two surfaces disagree on a price).

use serde::{Deserialize, Serialize};

use tajicart_core::{Points, Tier};

use crate::error::ThresholdError;

/// Point thresholds for one tier above Basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThreshold {
    /// Points required under the standard policy (inclusive lower bound).
    pub standard: Points,
    /// Points required under the early-access policy. Invariant:
    /// `early <= standard`.
    pub early: Points,
}

/// Immutable-per-request tier threshold configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholdConfig {
    pub bronze: TierThreshold,
    pub silver: TierThreshold,
    pub gold: TierThreshold,
    pub platinum: TierThreshold,
    /// Process-wide early-access switch.
    pub early_access_enabled: bool,
}

impl Default for TierThresholdConfig {
    /// The seed values the loyalty program launched with.
    fn default() -> Self {
        Self {
            bronze: TierThreshold {
                standard: Points::new(500),
                early: Points::new(400),
            },
            silver: TierThreshold {
                standard: Points::new(1500),
                early: Points::new(1200),
            },
            gold: TierThreshold {
                standard: Points::new(3000),
                early: Points::new(2500),
            },
            platinum: TierThreshold {
                standard: Points::new(5000),
                early: Points::new(3750),
            },
            early_access_enabled: false,
        }
    }
}

impl TierThresholdConfig {
    /// The thresholds for a tier, or `None` for Basic (which has none).
    #[must_use]
    pub const fn threshold(&self, tier: Tier) -> Option<&TierThreshold> {
        match tier {
            Tier::Basic => None,
            Tier::Bronze => Some(&self.bronze),
            Tier::Silver => Some(&self.silver),
            Tier::Gold => Some(&self.gold),
            Tier::Platinum => Some(&self.platinum),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: `early <= standard` per tier,
    /// and both threshold ladders strictly increasing from Bronze to
    /// Platinum.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        let mut previous: Option<&TierThreshold> = None;
        for tier in Tier::RANKED {
            // RANKED never includes Basic, so the threshold always exists
            let Some(current) = self.threshold(tier) else {
                continue;
            };
            if current.early > current.standard {
                return Err(ThresholdError::EarlyAboveStandard {
                    tier,
                    early: current.early,
                    standard: current.standard,
                });
            }
            if let Some(below) = previous {
                if current.standard <= below.standard {
                    return Err(ThresholdError::StandardNotAscending { tier });
                }
                if current.early <= below.early {
                    return Err(ThresholdError::EarlyNotAscending { tier });
                }
            }
            previous = Some(current);
        }
        Ok(())
    }

    /// The highest tier whose standard threshold is met by `points`.
    #[must_use]
    pub fn standard_tier_for(&self, points: Points) -> Tier {
        let mut resolved = Tier::Basic;
        for tier in Tier::RANKED {
            match self.threshold(tier) {
                Some(threshold) if points >= threshold.standard => resolved = tier,
                _ => {}
            }
        }
        resolved
    }

    /// Points still needed to reach the next tier's standard threshold, for
    /// progress display. `None` once Platinum is reached.
    #[must_use]
    pub fn points_to_next(&self, points: Points) -> Option<(Tier, Points)> {
        let next = self.standard_tier_for(points).next()?;
        let threshold = self.threshold(next)?;
        Some((next, threshold.standard.saturating_sub(points)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> TierThresholdConfig {
        TierThresholdConfig {
            early_access_enabled: true,
            ..TierThresholdConfig::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        TierThresholdConfig::default().validate().expect("valid");
        enabled().validate().expect("valid");
    }

    #[test]
    fn test_rejects_early_above_standard() {
        let mut config = enabled();
        config.silver.early = Points::new(1600);
        assert_eq!(
            config.validate(),
            Err(ThresholdError::EarlyAboveStandard {
                tier: Tier::Silver,
                early: Points::new(1600),
                standard: Points::new(1500),
            })
        );
    }

    #[test]
    fn test_rejects_non_ascending_standard() {
        let mut config = enabled();
        config.gold.standard = Points::new(1500);
        assert_eq!(
            config.validate(),
            Err(ThresholdError::StandardNotAscending { tier: Tier::Gold })
        );
    }

    #[test]
    fn test_rejects_non_ascending_early() {
        let mut config = enabled();
        config.gold.early = Points::new(1200);
        assert_eq!(
            config.validate(),
            Err(ThresholdError::EarlyNotAscending { tier: Tier::Gold })
        );
    }

    #[test]
    fn test_standard_tier_boundaries() {
        let config = TierThresholdConfig::default();
        // Inclusive lower bound at each threshold
        assert_eq!(config.standard_tier_for(Points::new(0)), Tier::Basic);
        assert_eq!(config.standard_tier_for(Points::new(499)), Tier::Basic);
        assert_eq!(config.standard_tier_for(Points::new(500)), Tier::Bronze);
        assert_eq!(config.standard_tier_for(Points::new(1499)), Tier::Bronze);
        assert_eq!(config.standard_tier_for(Points::new(1500)), Tier::Silver);
        assert_eq!(config.standard_tier_for(Points::new(2999)), Tier::Silver);
        assert_eq!(config.standard_tier_for(Points::new(3000)), Tier::Gold);
        assert_eq!(config.standard_tier_for(Points::new(5000)), Tier::Platinum);
        assert_eq!(config.standard_tier_for(Points::new(90000)), Tier::Platinum);
    }

    #[test]
    fn test_points_to_next() {
        let config = TierThresholdConfig::default();
        assert_eq!(
            config.points_to_next(Points::new(300)),
            Some((Tier::Bronze, Points::new(200)))
        );
        assert_eq!(
            config.points_to_next(Points::new(500)),
            Some((Tier::Silver, Points::new(1000)))
        );
        assert_eq!(config.points_to_next(Points::new(5000)), None);
    }
}
