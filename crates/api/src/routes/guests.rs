//! Route definitions for guest registration and the guest-image bridge.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::guests;
use crate::state::AppState;

/// Guest routes.
///
/// ```text
/// POST /register-guest/{code}  -> register (multipart)
/// POST /guests/images          -> store (bridge, bearer token)
/// GET  /guests/images          -> list_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register-guest/{code}", post(guests::register))
        .route(
            "/guests/images",
            get(guests::list_images).post(guests::store),
        )
}
