//! Handlers for guest registration and the guest-image bridge.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::ValidateEmail;

use bounced_core::error::CoreError;
use bounced_core::wizard::guest::GuestRegistration;
use bounced_db::models::guest::{CreateGuest, StoreGuestRequest};
use bounced_db::repositories::{EventRepo, GuestRepo};
use bounced_sheets::index_by_email;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BridgeAuth;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage;

/// One entry of the bridge's guest-image listing: a guest with their photo
/// URL resolved from the spreadsheet by email join.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestImageEntry {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register-guest/{code}
///
/// Multipart guest registration: a `guestData` JSON field with the
/// accumulated wizard form, and a `guestVideo` field carrying the face
/// recording. The video is stored under the event's media directory and
/// the guest row records its relative path.
pub async fn register(
    State(state): State<AppState>,
    Path(code): Path<String>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            key: code.clone(),
        }))?;

    let mut registration: Option<GuestRegistration> = None;
    let mut video: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "guestData" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let parsed: GuestRegistration = serde_json::from_str(&text)
                    .map_err(|e| AppError::BadRequest(format!("Invalid guestData: {e}")))?;
                registration = Some(parsed);
            }
            "guestVideo" => {
                let file_name = field.file_name().unwrap_or("face_video.mp4").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                video = Some((file_name, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let registration = registration
        .ok_or_else(|| AppError::BadRequest("Missing required 'guestData' field".into()))?;
    let (file_name, data) =
        video.ok_or_else(|| AppError::BadRequest("Missing required 'guestVideo' field".into()))?;

    // The path parameter is authoritative; a body that names a different
    // event is a client bug worth surfacing.
    if !registration.event_id.is_empty() && registration.event_id != code {
        return Err(AppError::BadRequest(
            "Event id in guestData does not match the registration path".into(),
        ));
    }
    if registration.guest_name.trim().is_empty() {
        return Err(CoreError::Validation("Missing guest name".into()).into());
    }
    if !registration.guest_email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            registration.guest_email
        ))
        .into());
    }

    let file_name = storage::sanitize_file_name(&file_name);
    let ext = storage::file_extension(&file_name)
        .ok_or_else(|| AppError::BadRequest("Video file name has no extension".into()))?;
    if !storage::SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported video extension '{ext}'. Expected one of: {}",
            storage::SUPPORTED_VIDEO_EXTENSIONS.join(", ")
        )));
    }

    let video_path = storage::store_video(&state.config.media_root, &event.code, &file_name, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store video: {e}")))?;

    let guest = GuestRepo::create(
        &state.pool,
        &CreateGuest {
            event_id: Some(event.id),
            name: registration.guest_name,
            email: registration.guest_email,
            image_url: None,
            video_path: Some(video_path),
        },
    )
    .await?;

    tracing::info!(
        code = %event.code,
        guest = %guest.name,
        video = guest.video_path.as_deref().unwrap_or(""),
        "Guest registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: guest })))
}

/// POST /guests/images
///
/// Bridge store: append a guest with a pre-resolved photo URL. Guarded by
/// the configured bridge bearer token.
pub async fn store(
    _auth: BridgeAuth,
    State(state): State<AppState>,
    Json(input): Json<StoreGuestRequest>,
) -> AppResult<impl IntoResponse> {
    let guest = GuestRepo::create(
        &state.pool,
        &CreateGuest {
            event_id: None,
            name: input.name,
            email: input.email,
            image_url: Some(input.image_url),
            video_path: None,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: guest })))
}

/// GET /guests/images
///
/// Every stored guest with their photo URL. Guests without a stored URL
/// are resolved against the spreadsheet by email join; positional pairing
/// against row order is deliberately not used, since it mismatches as soon
/// as insertion order and sheet order diverge.
pub async fn list_images(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let guests = GuestRepo::list_all(&state.pool).await?;

    let index: HashMap<String, String> = match &state.sheets {
        Some(sheets) => index_by_email(&sheets.fetch_rows().await?),
        None => HashMap::new(),
    };

    let entries: Vec<GuestImageEntry> = guests
        .into_iter()
        .map(|g| {
            let image_url = g.image_url.or_else(|| index.get(&g.email).cloned());
            GuestImageEntry {
                name: g.name,
                email: g.email,
                image_url,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}
