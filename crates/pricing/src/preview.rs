//! Time-boxed tier preview for display.
//!
//! Administrators can preview how a card renders at another tier while a
//! policy change is being considered. A preview decorates a resolution for
//! display only; there is deliberately no conversion from a previewed
//! resolution back into a [`crate::quote::QuoteRequest`], so a preview can
//! never reach the order-placement boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tajicart_core::{EarlyAccessStatus, Tier};

use crate::resolver::TierResolution;

/// A display-only tier override with an expiry instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPreview {
    pub tier: Tier,
    pub expires_at: DateTime<Utc>,
}

impl TierPreview {
    /// Create a preview that auto-reverts at `expires_at`.
    #[must_use]
    pub const fn new(tier: Tier, expires_at: DateTime<Utc>) -> Self {
        Self { tier, expires_at }
    }

    /// Whether the preview is still running at `now`.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Seconds until auto-revert, for the countdown display.
    #[must_use]
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }

    /// The resolution to render: the previewed tier while active, the real
    /// resolution once expired.
    #[must_use]
    pub fn display_resolution(&self, actual: TierResolution, now: DateTime<Utc>) -> TierResolution {
        if self.is_active(now) {
            TierResolution {
                tier: self.tier,
                status: EarlyAccessStatus::None,
            }
        } else {
            actual
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_preview_overrides_display_while_active() {
        let now = Utc::now();
        let preview = TierPreview::new(Tier::Gold, now + Duration::seconds(30));
        let actual = TierResolution {
            tier: Tier::Bronze,
            status: EarlyAccessStatus::None,
        };

        let shown = preview.display_resolution(actual, now);
        assert_eq!(shown.tier, Tier::Gold);
        assert!(preview.is_active(now));
        assert_eq!(preview.remaining_seconds(now), 30);
    }

    #[test]
    fn test_preview_reverts_after_expiry() {
        let now = Utc::now();
        let preview = TierPreview::new(Tier::Gold, now - Duration::seconds(1));
        let actual = TierResolution {
            tier: Tier::Bronze,
            status: EarlyAccessStatus::None,
        };

        let shown = preview.display_resolution(actual, now);
        assert_eq!(shown.tier, Tier::Bronze);
        assert!(!preview.is_active(now));
        assert_eq!(preview.remaining_seconds(now), 0);
    }
}
