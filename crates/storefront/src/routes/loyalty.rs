//! Loyalty card route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::instrument;

use tajicart_core::{EarlyAccessStatus, Money, Points, Tier, UserId};
use tajicart_pricing::resolve;

use crate::error::{AppError, Result};
use crate::state::AppState;

const EARLY_ACCESS_ACTIVE_MESSAGE: &str =
    "Early Access Program Active - You can access tier benefits earlier than standard thresholds!";
const EARLY_ACCESS_INACTIVE_MESSAGE: &str =
    "Early Access Program Inactive - All tier upgrades now require the standard point thresholds.";

/// Loyalty card display data.
#[derive(Debug, Serialize)]
pub struct LoyaltyCardView {
    pub card_number: String,
    pub tier: Tier,
    pub points: Points,
    pub expires_at: DateTime<Utc>,
    pub discount_percent: String,
    pub early_access: EarlyAccessView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressView>,
    /// False when the loyalty lookup failed and this card is the
    /// zero-benefit fallback.
    pub verified: bool,
}

/// Early-access program status for the card UI.
#[derive(Debug, Serialize)]
pub struct EarlyAccessView {
    pub enabled: bool,
    pub status: EarlyAccessStatus,
    pub message: &'static str,
}

/// Progress toward the next tier.
#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub next_tier: Tier,
    pub points_needed: Points,
    /// Spend equivalent at the fixed earn rate, for the card UI.
    pub spend_needed: Money,
}

/// Fetch a user's loyalty card with its resolved tier.
///
/// Loyalty lookup failure degrades to the flagged fallback card; threshold
/// lookup failure is fatal because no tier (and no discount) can be
/// computed without the active configuration.
#[instrument(skip(state))]
pub async fn card(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Value>> {
    let config = state.thresholds().current().await?;
    let account = state.loyalty().account_or_fallback(&user_id).await;

    let resolution = resolve(&account, &config).map_err(AppError::Quote)?;

    let view = LoyaltyCardView {
        card_number: account.card_number.to_string(),
        tier: resolution.tier,
        points: account.points,
        expires_at: account.expires_at,
        discount_percent: resolution.tier.discount_percent().to_string(),
        early_access: EarlyAccessView {
            enabled: config.early_access_enabled,
            status: resolution.status,
            message: if config.early_access_enabled {
                EARLY_ACCESS_ACTIVE_MESSAGE
            } else {
                EARLY_ACCESS_INACTIVE_MESSAGE
            },
        },
        progress: config
            .points_to_next(account.points)
            .map(|(next_tier, points_needed)| ProgressView {
                next_tier,
                points_needed,
                spend_needed: points_needed.spend_equivalent(),
            }),
        verified: account.is_verified(),
    };

    Ok(Json(json!({ "success": true, "data": view })))
}
