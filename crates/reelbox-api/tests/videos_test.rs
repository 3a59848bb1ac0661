//! Video metadata API integration tests.
//!
//! Run with: `cargo test -p reelbox-api --test videos_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::auth::bearer;
use helpers::{fixtures, setup_test_app};
use reelbox_core::models::Video;
use reelbox_storage::thumbnail_filename;
use uuid::Uuid;

#[tokio::test]
async fn test_create_video() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", bearer(user_id))
        .json(&serde_json::json!({
            "title": "boots learns to fish",
            "description": "a bear tries his best"
        }))
        .await;

    assert_eq!(response.status_code(), 201);
    let video: Video = response.json();
    assert_eq!(video.title, "boots learns to fish");
    assert_eq!(video.user_id, user_id);
    assert_eq!(video.thumbnail_url, None);

    // Persisted in the store.
    assert!(app.videos.get(video.id).is_some());
}

#[tokio::test]
async fn test_create_video_empty_title_is_400() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", bearer(user_id))
        .json(&serde_json::json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_video_unauthenticated_is_401() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/videos")
        .json(&serde_json::json!({ "title": "anonymous" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_get_video() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id, "findable");

    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", bearer(user_id))
        .await;

    assert_eq!(response.status_code(), 200);
    let fetched: Video = response.json();
    assert_eq!(fetched.id, video.id);
    assert_eq!(fetched.title, "findable");
}

#[tokio::test]
async fn test_get_missing_video_is_404() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();

    let response = app
        .client()
        .get(&format!("/api/videos/{}", Uuid::new_v4()))
        .add_header("Authorization", bearer(user_id))
        .await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_list_videos_only_returns_own() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let other_id = Uuid::new_v4();

    app.seed_video(user_id, "mine one");
    app.seed_video(user_id, "mine two");
    app.seed_video(other_id, "someone else's");

    let response = app
        .client()
        .get("/api/videos")
        .add_header("Authorization", bearer(user_id))
        .await;

    assert_eq!(response.status_code(), 200);
    let videos: Vec<Video> = response.json();
    assert_eq!(videos.len(), 2);
    assert!(videos.iter().all(|v| v.user_id == user_id));
}

#[tokio::test]
async fn test_uploaded_thumbnail_is_served_under_assets() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.seed_video(user_id, "served");

    let png_data = fixtures::create_minimal_png();
    let part = Part::bytes(bytes::Bytes::from(png_data.clone()))
        .file_name("thumbnail.png")
        .mime_type("image/png");
    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", bearer(user_id))
        .multipart(MultipartForm::new().add_part("thumbnail", part))
        .await;
    assert_eq!(response.status_code(), 200);

    // The public URL's path segment resolves through the static assets route.
    let response = app
        .client()
        .get(&format!("/assets/{}", thumbnail_filename(user_id, "png")))
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().to_vec(), png_data);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
    assert_eq!(body["storage"], "healthy");
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = setup_test_app().await;

    let response = app.client().get("/live").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);

    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/api/videos/{video_id}/thumbnail"].is_object());
}
