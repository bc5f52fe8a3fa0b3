//! Integration tests for thumbnail upload and retrieval.

use axum_test::multipart::MultipartForm;
use uuid::Uuid;

use crate::helpers::{TestApp, minimal_png, thumbnail_form};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[tokio::test]
async fn test_upload_then_fetch_returns_identical_bytes() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;
    let token = app.token_for(owner);

    let png = minimal_png();
    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(png.clone(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["thumbnail_url"].as_str(),
        Some(
            format!(
                "{}/api/thumbnails/{}",
                app.config.server.public_base_url, video.id
            )
            .as_str()
        )
    );

    let fetched = app
        .server
        .get(&format!("/api/thumbnails/{}", video.id))
        .await;

    assert_eq!(fetched.status_code(), 200);
    assert_eq!(
        fetched
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("image/png")
    );
    assert_eq!(
        fetched
            .headers()
            .get("cache-control")
            .map(|v| v.to_str().unwrap()),
        Some("no-store")
    );
    assert_eq!(fetched.as_bytes().as_ref(), png.as_slice());
}

#[tokio::test]
async fn test_upload_updates_video_record() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;
    assert!(video.thumbnail_url.is_none());

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;
    assert_eq!(response.status_code(), 200);

    let reloaded = app.find_video(video.id).await.expect("video exists");
    assert_eq!(
        reloaded.thumbnail_url.as_deref(),
        Some(
            format!(
                "{}/api/thumbnails/{}",
                app.config.server.public_base_url, video.id
            )
            .as_str()
        )
    );
    assert!(reloaded.updated_at >= video.updated_at);
}

#[tokio::test]
async fn test_reupload_replaces_thumbnail() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;
    let token = app.token_for(owner);

    let first = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;
    assert_eq!(first.status_code(), 200);

    let second = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(vec![0x52, 0x49, 0x46, 0x46], "thumb.webp", "image/webp"))
        .await;
    assert_eq!(second.status_code(), 200);

    let fetched = app
        .server
        .get(&format!("/api/thumbnails/{}", video.id))
        .await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(
        fetched
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("image/webp")
    );
    assert_eq!(fetched.as_bytes().as_ref(), &[0x52, 0x49, 0x46, 0x46]);
}

#[tokio::test]
async fn test_upload_without_token_unauthorized() {
    let app = TestApp::with_memory_store().await;
    let video = app.create_video(Uuid::new_v4()).await;

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_upload_with_invalid_token_unauthorized() {
    let app = TestApp::with_memory_store().await;
    let video = app.create_video(Uuid::new_v4()).await;

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", "Bearer not-a-jwt")
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_upload_by_non_owner_forbidden() {
    let app = TestApp::with_memory_store().await;
    let video = app.create_video(Uuid::new_v4()).await;
    let intruder = app.token_for(Uuid::new_v4());

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {intruder}"))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 403);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "FORBIDDEN");

    let reloaded = app.find_video(video.id).await.expect("video exists");
    assert!(reloaded.thumbnail_url.is_none());
}

#[tokio::test]
async fn test_upload_for_missing_video_bad_request() {
    let app = TestApp::with_memory_store().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", Uuid::new_v4()))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_invalid_video_id_bad_request() {
    let app = TestApp::with_memory_store().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .server
        .post("/api/videos/not-a-uuid/thumbnail")
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_oversized_thumbnail_bad_request() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(
            vec![0u8; MAX_UPLOAD_BYTES + 1],
            "huge.png",
            "image/png",
        ))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_at_size_limit_accepted() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(
            vec![0u8; MAX_UPLOAD_BYTES],
            "exact.png",
            "image/png",
        ))
        .await;

    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_upload_with_text_part_bad_request() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let form = MultipartForm::new().add_text("thumbnail", "not a file");
    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_without_thumbnail_field_bad_request() {
    let app = TestApp::with_memory_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let form = MultipartForm::new().add_text("caption", "no file here");
    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_fetch_before_upload_not_found() {
    let app = TestApp::with_memory_store().await;
    let video = app.create_video(Uuid::new_v4()).await;

    let response = app
        .server
        .get(&format!("/api/thumbnails/{}", video.id))
        .await;

    assert_eq!(response.status_code(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_fetch_for_unknown_video_not_found() {
    let app = TestApp::with_memory_store().await;

    let response = app
        .server
        .get(&format!("/api/thumbnails/{}", Uuid::new_v4()))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_fetch_invalid_video_id_bad_request() {
    let app = TestApp::with_memory_store().await;

    let response = app.server.get("/api/thumbnails/not-a-uuid").await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_local_store_serves_uploaded_asset() {
    let app = TestApp::with_local_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let png = minimal_png();
    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(png.clone(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let url = body["data"]["thumbnail_url"]
        .as_str()
        .expect("thumbnail_url set");
    assert!(url.ends_with(&format!("/assets/{}.png", video.id)));

    let asset = app
        .server
        .get(&format!("/assets/{}.png", video.id))
        .await;
    assert_eq!(asset.status_code(), 200);
    assert_eq!(
        asset
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("image/png")
    );
    assert_eq!(asset.as_bytes().as_ref(), png.as_slice());
}

#[tokio::test]
async fn test_local_store_unknown_mime_defaults_to_jpg() {
    let app = TestApp::with_local_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let response = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(
            vec![1, 2, 3],
            "mystery.bin",
            "application/x-mystery",
        ))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let url = body["data"]["thumbnail_url"]
        .as_str()
        .expect("thumbnail_url set");
    assert!(url.ends_with(&format!("/assets/{}.jpg", video.id)));

    let asset = app
        .server
        .get(&format!("/assets/{}.jpg", video.id))
        .await;
    assert_eq!(asset.status_code(), 200);
}

#[tokio::test]
async fn test_local_store_reupload_drops_stale_extension() {
    let app = TestApp::with_local_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;
    let token = app.token_for(owner);

    let first = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(vec![1u8], "thumb.webp", "image/webp"))
        .await;
    assert_eq!(first.status_code(), 200);

    let second = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {token}"))
        .multipart(thumbnail_form(vec![2u8], "thumb.png", "image/png"))
        .await;
    assert_eq!(second.status_code(), 200);

    let stale = app
        .server
        .get(&format!("/assets/{}.webp", video.id))
        .await;
    assert_eq!(stale.status_code(), 404);

    let current = app
        .server
        .get(&format!("/assets/{}.png", video.id))
        .await;
    assert_eq!(current.status_code(), 200);
}

#[tokio::test]
async fn test_local_store_thumbnail_route_reads_from_disk() {
    let app = TestApp::with_local_store().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner).await;

    let upload = app
        .server
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", format!("Bearer {}", app.token_for(owner)))
        .multipart(thumbnail_form(vec![0x47, 0x49, 0x46], "anim.gif", "image/gif"))
        .await;
    assert_eq!(upload.status_code(), 200);

    let fetched = app
        .server
        .get(&format!("/api/thumbnails/{}", video.id))
        .await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(
        fetched
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap()),
        Some("image/gif")
    );
    assert_eq!(fetched.as_bytes().as_ref(), &[0x47, 0x49, 0x46]);
}
