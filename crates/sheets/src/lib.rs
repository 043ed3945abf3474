//! HTTP client for the guest-photo spreadsheet and its drive downloads.
//!
//! Guests who sign up through the registration form land as rows in a
//! spreadsheet; the photo they attach is a drive share link. [`SheetsClient`]
//! reads the response range, [`DriveClient`] downloads the photo binaries.
//! Both are consumed by the photo fetcher and by the API's guest-image
//! bridge.

pub mod client;
pub mod config;
pub mod rows;

pub use client::{drive_file_id, DriveClient, DriveFile, ImageKind, SheetsClient, SheetsError};
pub use config::SheetsConfig;
pub use rows::{index_by_email, SheetRow};
