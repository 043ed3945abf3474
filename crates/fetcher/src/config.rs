use std::path::PathBuf;
use std::time::Duration;

/// Fetcher configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Directory receiving downloaded photos (default: `photos`).
    pub photos_dir: PathBuf,
    /// Delay between spreadsheet polls (default: 5 seconds).
    pub interval: Duration,
}

impl FetcherConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `PHOTOS_DIR`         | `photos` |
    /// | `POLL_INTERVAL_SECS` | `5`      |
    pub fn from_env() -> Self {
        let photos_dir =
            PathBuf::from(std::env::var("PHOTOS_DIR").unwrap_or_else(|_| "photos".into()));

        let interval_secs: u64 = std::env::var("POLL_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("POLL_INTERVAL_SECS must be a valid u64");

        Self {
            photos_dir,
            interval: Duration::from_secs(interval_secs),
        }
    }
}
