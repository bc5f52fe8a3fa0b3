//! Integration tests for static thumbnail asset serving.

use crate::helpers::TestApp;

#[tokio::test]
async fn test_missing_asset_not_found() {
    let app = TestApp::with_local_store().await;

    let response = app.server.get("/assets/nothing-here.png").await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_traversal_asset_name_rejected() {
    let app = TestApp::with_local_store().await;

    // %2F decodes to a slash inside the single path segment.
    let response = app.server.get("/assets/..%2Fvidhub.db").await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_content_type_derived_from_extension() {
    let app = TestApp::with_local_store().await;
    std::fs::write(app.assets_path().join("banner.webp"), b"RIFFxxxxWEBP")
        .expect("write asset");

    let response = app.server.get("/assets/banner.webp").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("image/webp")
    );
    assert_eq!(response.as_bytes().as_ref(), b"RIFFxxxxWEBP");
}

#[tokio::test]
async fn test_unknown_extension_served_as_octet_stream() {
    let app = TestApp::with_local_store().await;
    std::fs::write(app.assets_path().join("blob.dat"), &[0u8, 1, 2])
        .expect("write asset");

    let response = app.server.get("/assets/blob.dat").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("application/octet-stream")
    );
}
