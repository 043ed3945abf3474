//! Repository for the `guests` table.

use bounced_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest};

/// Column list for the `guests` table.
const COLUMNS: &str = "id, event_id, name, email, image_url, video_path, created_at";

/// Provides insert and collect operations for guests.
///
/// Intentionally minimal: insert-one, collect-all, list-by-event. No
/// updates — a guest row is immutable once written.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest row. No uniqueness check on email; duplicate
    /// guests are possible.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (event_id, name, email, image_url, video_path) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.image_url)
            .bind(&input.video_path)
            .fetch_one(pool)
            .await
    }

    /// List all guests registered for an event, in registration order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guests WHERE event_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Collect every guest row, in insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests ORDER BY created_at, id");
        sqlx::query_as::<_, Guest>(&query).fetch_all(pool).await
    }
}
