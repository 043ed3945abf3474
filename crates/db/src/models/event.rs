//! Event entity model and DTOs.

use bounced_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
///
/// The public identifier is the opaque `code`; the BIGSERIAL `id` stays
/// internal and is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    #[serde(skip_serializing)]
    pub id: DbId,
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

/// DTO for inserting a new event. The code is generated by the caller.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub code: String,
    pub host_email: String,
    pub name: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}
