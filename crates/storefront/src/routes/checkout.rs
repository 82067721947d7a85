//! Checkout route handlers.
//!
//! Both handlers assemble inputs the same way and call the same pure
//! pipeline; the total previewed in the cart and the total sent for payment
//! can never be computed differently.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use tajicart_core::{AddressId, CartLineId, PaymentMethod, Points, ProductId, RewardId, UserId};
use tajicart_pricing::{CartLine, QuoteRequest, build_quote};

use crate::error::{AppError, Result};
use crate::services::OrderPlacement;
use crate::state::AppState;

/// One cart line as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct LineInput {
    pub line_id: CartLineId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Client inputs for a quote.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteBody {
    pub user_id: UserId,
    pub lines: Vec<LineInput>,
    #[serde(default)]
    pub reward_id: Option<RewardId>,
    #[serde(default)]
    pub redeem_points: bool,
    #[serde(default)]
    pub requested_points: Option<u64>,
}

/// Client inputs for order placement: the quote inputs plus delivery and
/// payment selections.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBody {
    #[serde(flatten)]
    pub quote: QuoteBody,
    pub address_id: AddressId,
    pub payment_method: PaymentMethod,
}

/// Assemble a [`QuoteRequest`] from client inputs and collaborator data.
///
/// Threshold lookup failure is fatal; loyalty failure degrades to the
/// flagged fallback; a selected reward that is not in the user's active
/// list (consumed, expired, or never granted) is a bad request.
async fn assemble_request(state: &AppState, body: QuoteBody) -> Result<QuoteRequest> {
    let config = state.thresholds().current().await?;
    let account = state.loyalty().account_or_fallback(&body.user_id).await;

    let selected_reward = match body.reward_id {
        Some(reward_id) => {
            let rewards = state.rewards().active_rewards_or_none(&body.user_id).await;
            let reward = rewards
                .into_iter()
                .find(|reward| reward.reward_id == reward_id)
                .ok_or_else(|| {
                    AppError::BadRequest(format!("reward {reward_id} is not available"))
                })?;
            Some(reward)
        }
        None => None,
    };

    let mut lines = Vec::with_capacity(body.lines.len());
    for input in body.lines {
        let snapshot = state.catalog().snapshot(&input.product_id).await?;
        lines.push(CartLine::new(input.line_id, snapshot, input.quantity).map_err(AppError::Quote)?);
    }

    Ok(QuoteRequest {
        lines,
        account,
        config,
        selected_reward,
        redeem_points: body.redeem_points,
        requested_points: body.requested_points.map(Points::new),
        now: Utc::now(),
    })
}

/// Compute a checkout quote.
#[instrument(skip(state, body), fields(user_id = %body.user_id))]
pub async fn quote(
    State(state): State<AppState>,
    Json(body): Json<QuoteBody>,
) -> Result<Json<Value>> {
    let request = assemble_request(&state, body).await?;
    let quote = build_quote(&request).map_err(AppError::Quote)?;

    Ok(Json(json!({ "success": true, "data": quote })))
}

/// Place an order.
///
/// The quote is recomputed server-side from the same inputs; client-sent
/// totals are never trusted. Point deduction and reward consumption happen
/// upstream when the collaborator accepts the order.
#[instrument(skip(state, body), fields(user_id = %body.quote.user_id))]
pub async fn order(
    State(state): State<AppState>,
    Json(body): Json<OrderBody>,
) -> Result<Json<Value>> {
    let OrderBody {
        quote: quote_body,
        address_id,
        payment_method,
    } = body;

    let user_id = quote_body.user_id.clone();
    let reward_id = quote_body.reward_id.clone();
    let line_ids: Vec<CartLineId> = quote_body
        .lines
        .iter()
        .map(|line| line.line_id.clone())
        .collect();

    let request = assemble_request(&state, quote_body).await?;
    let quote = build_quote(&request).map_err(AppError::Quote)?;

    let placement = OrderPlacement {
        user_id: user_id.clone(),
        quote,
        line_ids,
        address_id,
        payment_method,
        reward_id,
    };
    let confirmation = state.orders().place_order(&placement).await?;

    info!(
        %user_id,
        order_id = %confirmation.order_id,
        total = %placement.quote.total_payable,
        "order placed"
    );

    Ok(Json(json!({
        "success": true,
        "data": confirmation,
        "message": "Order placed successfully",
    })))
}
