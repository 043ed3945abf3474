//! Route definitions for events.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Event routes.
///
/// ```text
/// GET  /events?email=          -> list
/// POST /create-event           -> create
/// POST /start-event            -> start
/// GET  /event/{code}           -> get_by_code
/// GET  /event/{code}/guests    -> guests_of_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list))
        .route("/create-event", post(events::create))
        .route("/start-event", post(events::start))
        .route("/event/{code}", get(events::get_by_code))
        .route("/event/{code}/guests", get(events::guests_of_event))
}
