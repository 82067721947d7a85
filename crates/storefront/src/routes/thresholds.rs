//! Tier threshold route handlers.
//!
//! Reads are public (the card UI shows progress toward the next tier);
//! writes require the admin bearer token and are validated by the engine
//! before reaching the collaborator.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::{info, instrument};

use tajicart_pricing::TierThresholdConfig;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Fetch the active threshold configuration.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<Value>> {
    let config = state.thresholds().current().await?;
    Ok(Json(json!({ "success": true, "data": config })))
}

/// Replace the threshold configuration (privileged).
///
/// A misconfigured ladder is rejected here with the specific violated
/// invariant; nothing invalid is ever forwarded upstream.
#[instrument(skip(state, config))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(config): Json<TierThresholdConfig>,
) -> Result<Json<Value>> {
    config.validate().map_err(|e| AppError::Quote(e.into()))?;

    let updated = state.thresholds().update(&config).await?;
    info!(
        early_access_enabled = updated.early_access_enabled,
        "tier thresholds updated"
    );

    Ok(Json(json!({
        "success": true,
        "data": updated,
        "message": "Tier thresholds updated successfully",
    })))
}
