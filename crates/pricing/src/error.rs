//! Engine error taxonomy.
//!
//! Validation failures abort the quote. Capacity-style defects
//! (over-redemption, expired rewards reaching selection) are clamped or
//! filtered by the components involved and logged via `tracing` rather than
//! surfaced as errors.

use tajicart_core::{CartLineId, MoneyError, Points, ProductId, Tier};

/// Validation failure in a tier threshold configuration.
///
/// Misconfigured thresholds are rejected outright, never normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    /// A tier's early threshold exceeds its standard threshold.
    #[error("{tier}: early threshold {early} exceeds standard threshold {standard}")]
    EarlyAboveStandard {
        tier: Tier,
        early: Points,
        standard: Points,
    },

    /// Standard thresholds are not strictly increasing across the ladder.
    #[error("standard threshold for {tier} does not exceed the tier below")]
    StandardNotAscending { tier: Tier },

    /// Early thresholds are not strictly increasing across the ladder.
    #[error("early threshold for {tier} does not exceed the tier below")]
    EarlyNotAscending { tier: Tier },
}

/// Errors that abort quote construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// The active threshold configuration failed validation.
    #[error("invalid tier thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),

    /// A monetary or percentage input was out of range.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// A quote was requested for an empty cart.
    #[error("cart has no lines")]
    EmptyCart,

    /// A cart line carried a zero quantity.
    #[error("cart line {0} has zero quantity")]
    ZeroQuantity(CartLineId),

    /// A product snapshot was missing a usable price.
    ///
    /// Catalog data with a missing or zero price is rejected rather than
    /// silently priced at zero.
    #[error("product {0} has no usable price")]
    NonPositivePrice(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_error_display() {
        let err = ThresholdError::EarlyAboveStandard {
            tier: Tier::Silver,
            early: Points::new(1600),
            standard: Points::new(1500),
        };
        assert_eq!(
            err.to_string(),
            "Silver: early threshold 1600 pts exceeds standard threshold 1500 pts"
        );
    }

    #[test]
    fn test_quote_error_from_threshold_error() {
        let err: QuoteError = ThresholdError::StandardNotAscending { tier: Tier::Gold }.into();
        assert!(matches!(err, QuoteError::InvalidThresholds(_)));
    }
}
