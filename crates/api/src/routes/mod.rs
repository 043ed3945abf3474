pub mod events;
pub mod guests;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy (mounted at the root — the paths are a fixed part of
/// the mobile contract):
///
/// ```text
/// /health                       service + database health
///
/// /events?email=                list a host's events
/// /create-event                 create an event (POST)
/// /start-event                  begin an event (POST)
/// /event/{code}                 fetch one event
/// /event/{code}/guests          list an event's guests
///
/// /register-guest/{code}        multipart guest registration (POST)
/// /guests/images                bridge: store guest (POST, bearer token),
///                               list guests with photo URLs (GET)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(events::router())
        .merge(guests::router())
}
