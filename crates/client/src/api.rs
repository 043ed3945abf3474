//! Typed HTTP client for the Get Bounced API.
//!
//! One [`ApiClient`] per backend instance. Calls are plain request/response
//! with a short timeout; there is no retry layer, callers decide what a
//! failure means for their flow.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use bounced_core::error::CoreError;
use bounced_core::types::Timestamp;
use bounced_core::wizard::event::{CreateEventRequest, CreatedEvent};
use bounced_core::wizard::guest::GuestRegistration;

/// HTTP request timeout for a single API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors surfaced by the API client and the flows built on it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server rejected the request with an error body.
    #[error("Server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Encoding a request payload failed.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// A wizard gate rejected the transition.
    #[error(transparent)]
    Wizard(#[from] CoreError),

    /// The entered event code does not name a real event.
    #[error("Invalid event code")]
    InvalidEventCode,
}

/// Error body produced by the API: `{ "error": ..., "code": ... }`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// The `{ "data": ... }` envelope around list and lookup responses.
#[derive(Debug, Deserialize)]
struct Data<T> {
    data: T,
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An event as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDetails {
    pub code: String,
    pub host_email: String,
    pub name: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub started_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl EventDetails {
    /// Date formatted for the dashboard, e.g. `January 1, 2024`.
    pub fn formatted_date(&self) -> String {
        self.event_date.format("%B %-d, %Y").to_string()
    }
}

/// A guest as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub video_path: Option<String>,
    pub created_at: Timestamp,
}

/// A recorded face video ready for upload.
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl VideoUpload {
    /// An mp4 recording, named the way the recorder names it (Android).
    pub fn mp4(guest_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{guest_name}_video.mp4"),
            mime: "video/mp4".to_string(),
            bytes,
        }
    }

    /// A mov recording, named the way the recorder names it (iOS).
    pub fn mov(guest_name: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: format!("{guest_name}_video.mov"),
            mime: "video/mov".to_string(),
            bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to one API base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://10.0.0.5:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET /events?email= — list a host's events.
    pub async fn list_events(&self, host_email: &str) -> Result<Vec<EventDetails>, ClientError> {
        let response = self
            .http
            .get(self.url("/events"))
            .query(&[("email", host_email)])
            .send()
            .await?;
        let body: Data<Vec<EventDetails>> = check(response).await?.json().await?;
        Ok(body.data)
    }

    /// GET /event/{code} — fetch one event.
    ///
    /// Returns `None` on 404; this is the guest wizard's code-validity
    /// check.
    pub async fn get_event(&self, code: &str) -> Result<Option<EventDetails>, ClientError> {
        let response = self.http.get(self.url(&format!("/event/{code}"))).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Data<EventDetails> = check(response).await?.json().await?;
        Ok(Some(body.data))
    }

    /// GET /event/{code}/guests — list an event's guests.
    pub async fn event_guests(&self, code: &str) -> Result<Vec<GuestDetails>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/event/{code}/guests")))
            .send()
            .await?;
        let body: Data<Vec<GuestDetails>> = check(response).await?.json().await?;
        Ok(body.data)
    }

    /// POST /create-event — create an event, returning its code.
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
    ) -> Result<CreatedEvent, ClientError> {
        let response = self
            .http
            .post(self.url("/create-event"))
            .json(request)
            .send()
            .await?;
        let created: CreatedEvent = check(response).await?.json().await?;
        Ok(created)
    }

    /// POST /start-event — begin an event.
    pub async fn start_event(&self, code: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url("/start-event"))
            .json(&serde_json::json!({ "event_id": code }))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// POST /register-guest/{code} — multipart guest registration.
    ///
    /// Sends the `guestData` JSON field and the `guestVideo` file part.
    pub async fn register_guest(
        &self,
        code: &str,
        registration: &GuestRegistration,
        video: VideoUpload,
    ) -> Result<(), ClientError> {
        let part = reqwest::multipart::Part::bytes(video.bytes)
            .file_name(video.file_name)
            .mime_str(&video.mime)?;
        let form = reqwest::multipart::Form::new()
            .text("guestData", serde_json::to_string(registration)?)
            .part("guestVideo", part);

        let response = self
            .http
            .post(self.url(&format!("/register-guest/{code}")))
            .multipart(form)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`ClientError::Api`], extracting the
/// server's error message when the body carries one.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ApiErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
