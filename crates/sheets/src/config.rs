//! Spreadsheet/drive client configuration.

/// Configuration for the spreadsheet and drive clients.
///
/// Credentials are injected via environment variables and are never
/// embedded in source. The base URLs exist so tests can point the clients
/// at a local stub server.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet document id.
    pub spreadsheet_id: String,
    /// A1-notation range holding the form responses.
    pub range: String,
    /// API key authorizing read access to the sheet and drive files.
    pub api_key: String,
    /// Sheets API base URL (default: `https://sheets.googleapis.com`).
    pub sheets_base_url: String,
    /// Drive API base URL (default: `https://www.googleapis.com`).
    pub drive_base_url: String,
}

impl SheetsConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                          |
    /// |-------------------|----------------------------------|
    /// | `SPREADSHEET_ID`  | required                         |
    /// | `SHEETS_API_KEY`  | required                         |
    /// | `SHEET_RANGE`     | `Form Responses 1!A2:E`          |
    /// | `SHEETS_BASE_URL` | `https://sheets.googleapis.com`  |
    /// | `DRIVE_BASE_URL`  | `https://www.googleapis.com`     |
    pub fn from_env() -> Self {
        Self::maybe_from_env().expect("SPREADSHEET_ID and SHEETS_API_KEY must be set")
    }

    /// Like [`from_env`](Self::from_env), but returns `None` when the
    /// required variables are absent. Used by the API server, where the
    /// spreadsheet integration is optional.
    pub fn maybe_from_env() -> Option<Self> {
        let spreadsheet_id = std::env::var("SPREADSHEET_ID").ok()?;
        let api_key = std::env::var("SHEETS_API_KEY").ok()?;

        let range =
            std::env::var("SHEET_RANGE").unwrap_or_else(|_| "Form Responses 1!A2:E".into());
        let sheets_base_url = std::env::var("SHEETS_BASE_URL")
            .unwrap_or_else(|_| "https://sheets.googleapis.com".into());
        let drive_base_url = std::env::var("DRIVE_BASE_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com".into());

        Some(Self {
            spreadsheet_id,
            range,
            api_key,
            sheets_base_url,
            drive_base_url,
        })
    }
}
