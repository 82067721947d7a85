//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check
//!
//! # Loyalty
//! GET  /api/loyalty/card/{user_id}    - Loyalty card with resolved tier
//! GET  /api/loyalty/thresholds        - Active tier thresholds (public read)
//! PUT  /api/loyalty/thresholds        - Update thresholds (admin token)
//!
//! # Checkout
//! POST /api/checkout/quote            - Compute a checkout quote
//! POST /api/checkout/order            - Place an order from a quote
//! ```

pub mod checkout;
pub mod loyalty;
pub mod thresholds;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::rate_limit;
use crate::state::AppState;

/// Create the loyalty API router.
pub fn loyalty_routes() -> Router<AppState> {
    Router::new()
        .route("/api/loyalty/card/{user_id}", get(loyalty::card))
        .route(
            "/api/loyalty/thresholds",
            get(thresholds::show).put(thresholds::update),
        )
        .layer(rate_limit::api_rate_limiter())
}

/// Create the checkout API router.
///
/// Quote and order placement fan out to several collaborators per request,
/// so they carry the stricter rate limit.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/api/checkout/quote", post(checkout::quote))
        .route("/api/checkout/order", post(checkout::order))
        .layer(rate_limit::checkout_rate_limiter())
}

/// Create the complete application router.
pub fn routes() -> Router<AppState> {
    loyalty_routes().merge(checkout_routes())
}
