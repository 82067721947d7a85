//! Quote simulation command.
//!
//! Runs a checkout scenario through the real pricing pipeline and prints
//! the itemized breakdown. Useful for checking price data and reproducing
//! customer-reported totals offline.
//!
//! # Scenario file
//!
//! ```json
//! {
//!   "account": {
//!     "user_id": "u-1",
//!     "points": 1200,
//!     "tier": "Silver",
//!     "card_number": "TAJI123456780001",
//!     "expires_at": "2027-01-01T00:00:00Z"
//!   },
//!   "lines": [
//!     {
//!       "line_id": "l-1",
//!       "product": {
//!         "product_id": "p-1",
//!         "price": "1000",
//!         "discount_percent": "10",
//!         "stock": 5
//!       },
//!       "quantity": 2
//!     }
//!   ],
//!   "redeem_points": true
//! }
//! ```
//!
//! `config` defaults to the launch thresholds when omitted.

use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use tajicart_core::Points;
use tajicart_pricing::{
    CartLine, CommunityReward, LoyaltyAccount, QuoteError, QuoteRequest, TierThresholdConfig,
    build_quote,
};

/// Errors from the quote command.
#[derive(Debug, Error)]
pub enum QuoteCmdError {
    #[error("failed to read {0}: {1}")]
    Read(String, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    Parse(String, serde_json::Error),
    #[error("quote failed: {0}")]
    Quote(#[from] QuoteError),
}

/// A checkout scenario loaded from disk.
#[derive(Debug, Deserialize)]
struct Scenario {
    account: LoyaltyAccount,
    #[serde(default)]
    config: Option<TierThresholdConfig>,
    lines: Vec<CartLine>,
    #[serde(default)]
    selected_reward: Option<CommunityReward>,
    #[serde(default)]
    redeem_points: bool,
    #[serde(default)]
    requested_points: Option<u64>,
}

/// Run a scenario file through the pipeline and print the breakdown.
pub fn simulate(file: &Path) -> Result<(), QuoteCmdError> {
    let display = file.display().to_string();
    let raw =
        std::fs::read_to_string(file).map_err(|e| QuoteCmdError::Read(display.clone(), e))?;
    let scenario: Scenario =
        serde_json::from_str(&raw).map_err(|e| QuoteCmdError::Parse(display.clone(), e))?;

    let request = QuoteRequest {
        lines: scenario.lines,
        account: scenario.account,
        config: scenario.config.unwrap_or_default(),
        selected_reward: scenario.selected_reward,
        redeem_points: scenario.redeem_points,
        requested_points: scenario.requested_points.map(Points::new),
        now: Utc::now(),
    };

    let quote = build_quote(&request)?;

    println!("tier: {} ({:?})", quote.tier, quote.early_access_status);
    if !quote.loyalty_verified {
        println!("note: loyalty data unverified, no benefits applied");
    }
    println!();
    for line in &quote.lines {
        println!(
            "{}  x{}  unit {} -> {}  (product -{}, tier -{})",
            line.line_id,
            line.quantity,
            line.unit_price,
            line.discount.final_unit_price,
            line.discount.product_savings,
            line.discount.tier_savings,
        );
    }
    println!();
    println!("subtotal:             {}", quote.subtotal);
    println!("product savings:      {}", quote.product_discount_total);
    println!("tier savings:         {}", quote.tier_discount_total);
    println!("after line discounts: {}", quote.subtotal_after_line_discounts);
    println!("reward discount:      {}", quote.reward_discount);
    if quote.free_shipping {
        println!("free shipping:        yes");
    }
    println!("points redeemed:      {}", quote.points_redeemed);
    println!("total payable:        {}", quote.total_payable);

    Ok(())
}
