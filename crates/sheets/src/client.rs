//! Spreadsheet and drive HTTP clients.
//!
//! [`SheetsClient`] reads the form-responses range as JSON.
//! [`DriveClient`] downloads a photo binary and classifies it by the
//! response's declared content type. Unsupported content types are an
//! explicit error variant; the caller decides whether to skip or fail.

use std::time::Duration;

use serde::Deserialize;

use crate::config::SheetsConfig;
use crate::rows::SheetRow;

/// Drive share-link prefix produced by the signup form.
const DRIVE_SHARE_PREFIX: &str = "https://drive.google.com/open?id=";

/// HTTP request timeout for a single sheets or drive call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the spreadsheet and drive clients.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote service returned a non-2xx status code.
    #[error("Remote service returned HTTP {0}")]
    HttpStatus(u16),

    /// A configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The drive file is neither a JPEG nor a PNG.
    #[error("Unsupported content type '{0}'")]
    UnsupportedContentType(String),
}

// ---------------------------------------------------------------------------
// Sheets
// ---------------------------------------------------------------------------

/// Values-range response of the sheets API.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Client for reading the form-responses spreadsheet range.
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Create a client from configuration.
    pub fn new(config: SheetsConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { http, config }
    }

    /// Fetch the configured range and extract the usable rows.
    ///
    /// Rows too short to carry both the email and the photo link are
    /// dropped with a warning; everything else is returned in sheet order.
    pub async fn fetch_rows(&self) -> Result<Vec<SheetRow>, SheetsError> {
        let mut url = reqwest::Url::parse(&self.config.sheets_base_url)
            .map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl(self.config.sheets_base_url.clone()))?
            .extend([
                "v4",
                "spreadsheets",
                self.config.spreadsheet_id.as_str(),
                "values",
                self.config.range.as_str(),
            ]);
        url.query_pairs_mut().append_pair("key", &self.config.api_key);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SheetsError::HttpStatus(response.status().as_u16()));
        }

        let body: ValuesResponse = response
            .json()
            .await
            .map_err(|e| SheetsError::MalformedResponse(e.to_string()))?;

        let mut rows = Vec::with_capacity(body.values.len());
        for (i, cells) in body.values.iter().enumerate() {
            match SheetRow::from_cells(cells) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(row = i, cells = cells.len(), "Skipping incomplete sheet row");
                }
            }
        }
        Ok(rows)
    }
}

// ---------------------------------------------------------------------------
// Drive
// ---------------------------------------------------------------------------

/// Image format of a downloaded photo, derived from the response's
/// declared content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Classify a Content-Type header value.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        // The header may carry parameters ("image/jpeg; charset=...").
        let essence = content_type.split(';').next().unwrap_or("").trim();
        match essence {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }

    /// File extension for this format, with the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
        }
    }
}

/// A downloaded drive file.
pub struct DriveFile {
    pub bytes: Vec<u8>,
    pub kind: ImageKind,
}

/// Client for downloading photo binaries from drive.
pub struct DriveClient {
    http: reqwest::Client,
    config: SheetsConfig,
}

impl DriveClient {
    /// Create a client from configuration.
    pub fn new(config: SheetsConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { http, config }
    }

    /// Download a file's media content.
    ///
    /// The image format is branched on the response's Content-Type; only
    /// JPEG and PNG are recognized, anything else is
    /// [`SheetsError::UnsupportedContentType`].
    pub async fn download(&self, file_id: &str) -> Result<DriveFile, SheetsError> {
        let mut url = reqwest::Url::parse(&self.config.drive_base_url)
            .map_err(|e| SheetsError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SheetsError::InvalidUrl(self.config.drive_base_url.clone()))?
            .extend(["drive", "v3", "files", file_id]);
        url.query_pairs_mut()
            .append_pair("alt", "media")
            .append_pair("key", &self.config.api_key);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SheetsError::HttpStatus(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let kind = ImageKind::from_content_type(&content_type)
            .ok_or(SheetsError::UnsupportedContentType(content_type))?;

        let bytes = response.bytes().await?.to_vec();
        Ok(DriveFile { bytes, kind })
    }
}

/// Derive the drive file id from a photo cell value.
///
/// The signup form stores `https://drive.google.com/open?id=<id>` share
/// links; bare ids pass through unchanged.
pub fn drive_file_id(image_url: &str) -> &str {
    image_url.strip_prefix(DRIVE_SHARE_PREFIX).unwrap_or(image_url)
}
