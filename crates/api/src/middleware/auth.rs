//! Bearer-token extractor guarding the guest-image bridge.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use bounced_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured bridge bearer token.
///
/// Use this as an extractor parameter in any handler that writes through
/// the bridge:
///
/// ```ignore
/// async fn store(_auth: BridgeAuth, Json(input): Json<StoreGuestRequest>) -> ... {}
/// ```
///
/// The expected token is injected via `BRIDGE_TOKEN` at process start;
/// there is no token literal anywhere in the source tree.
#[derive(Debug, Clone, Copy)]
pub struct BridgeAuth;

impl FromRequestParts<AppState> for BridgeAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if token != state.config.bridge_token {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid bridge token".into(),
            )));
        }

        Ok(BridgeAuth)
    }
}
