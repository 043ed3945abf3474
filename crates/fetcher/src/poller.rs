//! The poll-download loop.
//!
//! [`Poller::run`] polls the spreadsheet on a fixed interval until
//! cancelled. Each cycle is a [`Poller::sync_once`] pass over the rows in
//! sheet order; per-row failures are logged and counted, never fatal to
//! the loop.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use bounced_sheets::{
    drive_file_id, DriveClient, ImageKind, SheetRow, SheetsClient, SheetsConfig, SheetsError,
};

/// Errors from a fetch cycle.
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// A spreadsheet or drive call failed.
    #[error(transparent)]
    Sheets(#[from] SheetsError),

    /// Writing a downloaded photo to disk failed.
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// The row's email cannot be used as a file name.
    #[error("Email '{0}' is not usable as a file name")]
    UnsafeEmail(String),
}

/// Outcome counters for one sync pass over the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Photos downloaded this pass.
    pub downloaded: usize,
    /// Rows whose photo already existed locally.
    pub skipped_existing: usize,
    /// Rows whose drive file is neither JPEG nor PNG.
    pub skipped_unsupported: usize,
    /// Rows that failed to download or write.
    pub failed: usize,
}

/// What happened to a single row.
enum RowOutcome {
    Downloaded(PathBuf),
    AlreadyPresent,
}

/// Periodically mirrors spreadsheet photos to a local directory.
pub struct Poller {
    sheets: SheetsClient,
    drive: DriveClient,
    photos_dir: PathBuf,
    interval: Duration,
}

impl Poller {
    /// Create a poller from spreadsheet configuration.
    pub fn new(config: SheetsConfig, photos_dir: PathBuf, interval: Duration) -> Self {
        Self {
            sheets: SheetsClient::new(config.clone()),
            drive: DriveClient::new(config),
            photos_dir,
            interval,
        }
    }

    /// Run the poll loop until the token is cancelled.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Fetcher cancelled");
                    break;
                }
                _ = interval.tick() => {
                    match self.sync_once().await {
                        Ok(report) => {
                            if report.downloaded > 0 || report.failed > 0 {
                                tracing::info!(
                                    downloaded = report.downloaded,
                                    skipped_existing = report.skipped_existing,
                                    skipped_unsupported = report.skipped_unsupported,
                                    failed = report.failed,
                                    "Sync pass complete"
                                );
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Sync pass failed");
                        }
                    }
                }
            }
        }
    }

    /// One pass over the sheet: download every photo not yet on disk.
    ///
    /// Fails only when the sheet itself cannot be read; per-row problems
    /// are counted on the report and the pass continues with the next row.
    pub async fn sync_once(&self) -> Result<SyncReport, FetcherError> {
        let rows = self.sheets.fetch_rows().await.map_err(FetcherError::Sheets)?;

        let mut report = SyncReport::default();
        for row in &rows {
            match self.sync_row(row).await {
                Ok(RowOutcome::Downloaded(path)) => {
                    tracing::info!(email = %row.email, path = %path.display(), "Downloaded photo");
                    report.downloaded += 1;
                }
                Ok(RowOutcome::AlreadyPresent) => {
                    tracing::debug!(email = %row.email, "Photo already present, skipping");
                    report.skipped_existing += 1;
                }
                Err(FetcherError::Sheets(SheetsError::UnsupportedContentType(ct))) => {
                    tracing::warn!(email = %row.email, content_type = %ct, "Unsupported photo format, skipping row");
                    report.skipped_unsupported += 1;
                }
                Err(e) => {
                    tracing::error!(email = %row.email, error = %e, "Failed to fetch photo");
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Download one row's photo unless it already exists locally.
    async fn sync_row(&self, row: &SheetRow) -> Result<RowOutcome, FetcherError> {
        if !is_safe_file_stem(&row.email) {
            return Err(FetcherError::UnsafeEmail(row.email.clone()));
        }
        if target_exists(&self.photos_dir, &row.email) {
            return Ok(RowOutcome::AlreadyPresent);
        }

        let file = self.drive.download(drive_file_id(&row.image_url)).await?;

        let path = self
            .photos_dir
            .join(format!("{}{}", row.email, file.kind.extension()));
        tokio::fs::write(&path, &file.bytes).await?;

        Ok(RowOutcome::Downloaded(path))
    }
}

/// Check whether a photo for this email already exists under either
/// supported extension.
pub fn target_exists(photos_dir: &Path, email: &str) -> bool {
    [ImageKind::Jpeg, ImageKind::Png]
        .iter()
        .any(|kind| photos_dir.join(format!("{email}{}", kind.extension())).exists())
}

/// An email is used verbatim as the photo's file stem; reject anything
/// that would escape the photos directory.
fn is_safe_file_stem(email: &str) -> bool {
    !email.is_empty() && !email.contains(['/', '\\']) && email != "." && email != ".."
}
