use std::sync::Arc;

use bounced_sheets::SheetsClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bounced_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Spreadsheet client for the guest-image bridge. `None` when the
    /// spreadsheet integration is not configured.
    pub sheets: Option<Arc<SheetsClient>>,
}
