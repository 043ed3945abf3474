//! Request handlers for the registration endpoints.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `bounced-db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod events;
pub mod guests;
