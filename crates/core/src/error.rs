//! Domain-level error taxonomy.
//!
//! [`CoreError`] is the shared error currency between the wizard state
//! machines, the repositories, and the API layer. The API server maps each
//! variant onto an HTTP status in `bounced-api`.

/// Domain-level error for registration operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity looked up by its public key (e.g. an event code) does not exist.
    #[error("{entity} '{key}' not found")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// Input failed a validation gate.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(String),
}
