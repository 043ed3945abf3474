//! End-to-end sync tests against an in-process stub of the sheets and
//! drive APIs.

use std::time::Duration;

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use bounced_fetcher::{Poller, SyncReport};
use bounced_sheets::SheetsConfig;

/// Stub serving four rows:
/// - alice: jpeg (pre-created locally in the skip test)
/// - bob:   png
/// - carol: gif (unsupported)
/// - dave:  missing drive file (download failure)
async fn stub_base_url() -> String {
    async fn values() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "values": [
                ["ts", "alice@example.com", "Alice", "yes", "https://drive.google.com/open?id=file-alice"],
                ["ts", "bob@example.com", "Bob", "no", "https://drive.google.com/open?id=file-bob"],
                ["ts", "carol@example.com", "Carol", "yes", "https://drive.google.com/open?id=file-carol"],
                ["ts", "dave@example.com", "Dave", "no", "https://drive.google.com/open?id=file-dave"],
            ]
        }))
    }

    async fn file(Path(file_id): Path<String>) -> impl IntoResponse {
        match file_id.as_str() {
            "file-alice" => {
                ([(header::CONTENT_TYPE, "image/jpeg")], b"alice-jpeg".to_vec()).into_response()
            }
            "file-bob" => {
                ([(header::CONTENT_TYPE, "image/png")], b"bob-png".to_vec()).into_response()
            }
            "file-carol" => {
                ([(header::CONTENT_TYPE, "image/gif")], b"carol-gif".to_vec()).into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    let app = Router::new()
        .route("/v4/spreadsheets/{id}/values/{range}", get(values))
        .route("/drive/v3/files/{id}", get(file));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn config(base_url: &str) -> SheetsConfig {
    SheetsConfig {
        spreadsheet_id: "sheet-1".to_string(),
        range: "Form Responses 1!A2:E".to_string(),
        api_key: "test-key".to_string(),
        sheets_base_url: base_url.to_string(),
        drive_base_url: base_url.to_string(),
    }
}

#[tokio::test]
async fn sync_skips_existing_downloads_missing_and_isolates_failures() {
    let base = stub_base_url().await;
    let photos = tempfile::tempdir().unwrap();

    // Alice's photo already exists locally under the jpg extension.
    std::fs::write(photos.path().join("alice@example.com.jpg"), b"pre-existing").unwrap();

    let poller = Poller::new(
        config(&base),
        photos.path().to_path_buf(),
        Duration::from_secs(5),
    );

    let report = poller.sync_once().await.unwrap();
    assert_eq!(
        report,
        SyncReport {
            downloaded: 1,
            skipped_existing: 1,
            skipped_unsupported: 1,
            failed: 1,
        }
    );

    // Bob's photo was written with the extension matching its content type.
    let bob = std::fs::read(photos.path().join("bob@example.com.png")).unwrap();
    assert_eq!(bob, b"bob-png");

    // Alice's pre-existing file was not overwritten.
    let alice = std::fs::read(photos.path().join("alice@example.com.jpg")).unwrap();
    assert_eq!(alice, b"pre-existing");

    // Carol's unsupported gif and Dave's failed download left nothing behind.
    assert!(!photos.path().join("carol@example.com.gif").exists());
    assert!(!photos.path().join("dave@example.com.jpg").exists());
    assert!(!photos.path().join("dave@example.com.png").exists());
}

#[tokio::test]
async fn second_pass_skips_what_the_first_downloaded() {
    let base = stub_base_url().await;
    let photos = tempfile::tempdir().unwrap();

    let poller = Poller::new(
        config(&base),
        photos.path().to_path_buf(),
        Duration::from_secs(5),
    );

    let first = poller.sync_once().await.unwrap();
    assert_eq!(first.downloaded, 2, "alice and bob download on the first pass");

    let second = poller.sync_once().await.unwrap();
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.skipped_existing, 2);
    // The unsupported and failing rows repeat every pass; nothing on disk
    // marks them as handled.
    assert_eq!(second.skipped_unsupported, 1);
    assert_eq!(second.failed, 1);
}
