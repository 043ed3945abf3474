//! Repository for the `events` table.

use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

/// Column list for the `events` table.
const COLUMNS: &str =
    "id, code, host_email, name, location, event_date, start_time, end_time, started_at, created_at";

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event.
    ///
    /// Fails with a unique violation on `uq_events_code` if the generated
    /// code collides with an existing one.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                (code, host_email, name, location, event_date, start_time, end_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.code)
            .bind(&input.host_email)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.event_date)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its public code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE code = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all events created by a host, most recent first.
    pub async fn list_by_host(pool: &PgPool, host_email: &str) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE host_email = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(host_email)
            .fetch_all(pool)
            .await
    }

    /// Mark an event as started.
    ///
    /// Returns `true` if the event transitioned to started; `false` if it
    /// was already started (the timestamp of the first start is kept).
    pub async fn mark_started(pool: &PgPool, code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET started_at = now() \
             WHERE code = $1 AND started_at IS NULL",
        )
        .bind(code)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
