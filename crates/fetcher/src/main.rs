use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounced_fetcher::{FetcherConfig, Poller};
use bounced_sheets::SheetsConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounced_fetcher=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = FetcherConfig::from_env();
    let sheets_config = SheetsConfig::from_env();
    tracing::info!(
        photos_dir = %config.photos_dir.display(),
        interval_secs = config.interval.as_secs(),
        "Loaded fetcher configuration"
    );

    std::fs::create_dir_all(&config.photos_dir).expect("Failed to create photos directory");

    // --- Poller ---
    let poller = Poller::new(sheets_config, config.photos_dir, config.interval);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_cancel.cancel();
    });

    poller.run(cancel).await;

    tracing::info!("Fetcher stopped");
}

/// Wait for a termination signal to stop the poll loop.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), stopping fetcher");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, stopping fetcher");
        }
    }
}
