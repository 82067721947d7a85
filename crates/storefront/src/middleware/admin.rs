//! Admin authorization extractor.
//!
//! Threshold writes are restricted to privileged callers. Authentication
//! mechanics live outside this service; privileged requests present a
//! static bearer token checked here.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires the admin bearer token.
///
/// # Example
///
/// ```rust,ignore
/// async fn privileged_handler(
///     _admin: RequireAdmin,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reached with a valid token
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("admin token required".to_string()))?;

        if presented == state.config().admin_token.expose_secret() {
            Ok(Self)
        } else {
            Err(AppError::Unauthorized("invalid admin token".to_string()))
        }
    }
}
