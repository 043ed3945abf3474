//! Client tests against an in-process stub of the sheets and drive APIs.

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use bounced_sheets::{DriveClient, ImageKind, SheetsClient, SheetsConfig, SheetsError};
use std::collections::HashMap;

/// Serve a router on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
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

async fn values_handler(
    Path((spreadsheet_id, range)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    assert_eq!(spreadsheet_id, "sheet-1");
    assert_eq!(range, "Form Responses 1!A2:E");
    assert_eq!(params.get("key").map(String::as_str), Some("test-key"));

    Json(serde_json::json!({
        "range": range,
        "values": [
            ["2024-01-01", "alice@example.com", "Alice", "yes", "https://drive.google.com/open?id=file-a"],
            ["2024-01-02", "bob@example.com", "Bob", "no", "https://drive.google.com/open?id=file-b"],
            ["2024-01-03", "incomplete@example.com"],
        ]
    }))
}

async fn file_handler(Path(file_id): Path<String>) -> impl IntoResponse {
    match file_id.as_str() {
        "file-a" => ([(header::CONTENT_TYPE, "image/jpeg")], b"jpegdata".to_vec()).into_response(),
        "file-b" => ([(header::CONTENT_TYPE, "image/png")], b"pngdata".to_vec()).into_response(),
        "file-gif" => ([(header::CONTENT_TYPE, "image/gif")], b"gifdata".to_vec()).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn stub_router() -> Router {
    Router::new()
        .route("/v4/spreadsheets/{id}/values/{range}", get(values_handler))
        .route("/drive/v3/files/{id}", get(file_handler))
}

#[tokio::test]
async fn fetch_rows_extracts_usable_rows_in_sheet_order() {
    let base = serve(stub_router()).await;
    let client = SheetsClient::new(config(&base));

    let rows = client.fetch_rows().await.unwrap();
    assert_eq!(rows.len(), 2, "the incomplete row is dropped");
    assert_eq!(rows[0].email, "alice@example.com");
    assert_eq!(rows[0].image_url, "https://drive.google.com/open?id=file-a");
    assert_eq!(rows[1].email, "bob@example.com");
}

#[tokio::test]
async fn fetch_rows_surfaces_http_errors() {
    let app = Router::new().route(
        "/v4/spreadsheets/{id}/values/{range}",
        get(|| async { StatusCode::FORBIDDEN }),
    );
    let base = serve(app).await;
    let client = SheetsClient::new(config(&base));

    match client.fetch_rows().await {
        Err(SheetsError::HttpStatus(403)) => {}
        other => panic!("expected HttpStatus(403), got {other:?}"),
    }
}

#[tokio::test]
async fn download_classifies_jpeg_and_png() {
    let base = serve(stub_router()).await;
    let client = DriveClient::new(config(&base));

    let jpeg = client.download("file-a").await.unwrap();
    assert_eq!(jpeg.kind, ImageKind::Jpeg);
    assert_eq!(jpeg.bytes, b"jpegdata");

    let png = client.download("file-b").await.unwrap();
    assert_eq!(png.kind, ImageKind::Png);
    assert_eq!(png.bytes, b"pngdata");
}

#[tokio::test]
async fn download_rejects_unsupported_content_type() {
    let base = serve(stub_router()).await;
    let client = DriveClient::new(config(&base));

    match client.download("file-gif").await {
        Err(SheetsError::UnsupportedContentType(ct)) => assert_eq!(ct, "image/gif"),
        other => panic!("expected UnsupportedContentType, got {other:?}"),
    }
}

#[tokio::test]
async fn download_surfaces_missing_files_as_http_status() {
    let base = serve(stub_router()).await;
    let client = DriveClient::new(config(&base));

    match client.download("no-such-file").await {
        Err(SheetsError::HttpStatus(404)) => {}
        other => panic!("expected HttpStatus(404), got {other:?}"),
    }
}
