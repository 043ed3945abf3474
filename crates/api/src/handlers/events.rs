//! Handlers for event creation, lookup, and lifecycle.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::ValidateEmail;

use bounced_core::code::generate_event_code;
use bounced_core::error::CoreError;
use bounced_core::wizard::event::{validate_time, CreateEventRequest, CreatedEvent};
use bounced_db::models::event::CreateEvent;
use bounced_db::repositories::{EventRepo, GuestRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the host's event listing.
#[derive(Debug, Deserialize)]
pub struct HostEventsParams {
    pub email: String,
}

/// Body of `POST /start-event`.
#[derive(Debug, Deserialize)]
pub struct StartEventRequest {
    pub event_id: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /events?email=
///
/// List all events created by a host, most recent first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HostEventsParams>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_by_host(&state.pool, &params.email).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /create-event
///
/// Validate the submitted form, generate an event code, and insert the
/// event. Returns the bare `{ "eventId": code }` body the mobile wizard
/// stores into its context.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEventRequest>,
) -> AppResult<impl IntoResponse> {
    if input.event_name.trim().is_empty() {
        return Err(CoreError::Validation("Missing event name".into()).into());
    }
    if input.event_location.trim().is_empty() {
        return Err(CoreError::Validation("Missing event location".into()).into());
    }
    if !input.email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            input.email
        ))
        .into());
    }
    validate_time("start time", &input.event_start_time)?;
    validate_time("end time", &input.event_end_time)?;

    let create = CreateEvent {
        code: generate_event_code(),
        host_email: input.email,
        name: input.event_name,
        location: input.event_location,
        event_date: input.event_date,
        start_time: input.event_start_time,
        end_time: input.event_end_time,
    };
    let event = EventRepo::create(&state.pool, &create).await?;

    tracing::info!(code = %event.code, host = %event.host_email, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedEvent {
            event_id: event.code,
        }),
    ))
}

/// GET /event/{code}
///
/// Fetch one event by its public code. The guest wizard treats a 200 as
/// "code is valid" and a 404 as "no such event".
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            key: code,
        }))?;
    Ok(Json(DataResponse { data: event }))
}

/// GET /event/{code}/guests
///
/// List the guests registered for an event, in registration order.
pub async fn guests_of_event(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            key: code,
        }))?;
    let guests = GuestRepo::list_by_event(&state.pool, event.id).await?;
    Ok(Json(DataResponse { data: guests }))
}

/// POST /start-event
///
/// Begin an event. Idempotent: starting an already-started event keeps the
/// original start timestamp and still returns 200, because the dashboard's
/// fire-and-forget POST may repeat.
pub async fn start(
    State(state): State<AppState>,
    Json(input): Json<StartEventRequest>,
) -> AppResult<StatusCode> {
    EventRepo::find_by_code(&state.pool, &input.event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            key: input.event_id.clone(),
        }))?;

    let transitioned = EventRepo::mark_started(&state.pool, &input.event_id).await?;
    if transitioned {
        tracing::info!(code = %input.event_id, "Event started");
    }

    Ok(StatusCode::OK)
}
