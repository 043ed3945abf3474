//! Shared response envelope types for API handlers.
//!
//! List and lookup endpoints use a `{ "data": ... }` envelope. The one
//! exception is `POST /create-event`, whose bare `{ "eventId": ... }` body
//! is a fixed part of the mobile contract.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
