//! Guest entity model and DTOs.

use bounced_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `guests` table.
///
/// A guest arrives one of two ways: registering for an event (sets
/// `event_id` and `video_path`) or being stored through the guest-image
/// bridge (sets `image_url`, no event). Emails are not unique; the same
/// person registering twice produces two rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(skip_serializing)]
    pub event_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub video_path: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a guest row.
#[derive(Debug, Clone, Default)]
pub struct CreateGuest {
    pub event_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub video_path: Option<String>,
}

/// Body of the bridge's `POST /guests/images`: the name/email/imageUrl
/// triple, in the camelCase shape the bridge has always accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreGuestRequest {
    pub name: String,
    pub email: String,
    pub image_url: String,
}
