mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_failing_remux_app, setup_test_app, TEST_BUCKET};
use uuid::Uuid;

fn mp4_form(bytes: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "video",
        Part::bytes(bytes.to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    )
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_test_app().await;

    let response = app.client().get("/healthz").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_videos_unauthorized_without_token() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/videos").await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_videos_unauthorized_with_garbage_token() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/api/videos")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_create_and_list_videos() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let bearer = app.bearer_for(owner);

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", bearer.clone())
        .json(&serde_json::json!({ "title": "boots and cats", "description": "a demo" }))
        .await;
    assert_eq!(response.status_code(), 201);
    let created: serde_json::Value = response.json();
    assert_eq!(created["title"], "boots and cats");
    assert!(created["video_url"].is_null());

    let response = app
        .client()
        .get("/api/videos")
        .add_header("Authorization", bearer)
        .await;
    assert_eq!(response.status_code(), 200);
    let listed: serde_json::Value = response.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_video_rejects_empty_title() {
    let app = setup_test_app().await;
    let bearer = app.bearer_for(Uuid::new_v4());

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", bearer)
        .json(&serde_json::json!({ "title": "   " }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_get_video_not_found() {
    let app = setup_test_app().await;
    let bearer = app.bearer_for(Uuid::new_v4());

    let response = app
        .client()
        .get(&format!("/api/videos/{}", Uuid::new_v4()))
        .add_header("Authorization", bearer)
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_upload_video_end_to_end() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let bearer = app.bearer_for(owner);
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", bearer.clone())
        .multipart(mp4_form(b"fake mp4 payload"))
        .await;
    assert_eq!(response.status_code(), 200);

    // The upload response carries the stored compound reference.
    let expected_key = format!("landscape/{}.mp4", video.id);
    let uploaded: serde_json::Value = response.json();
    assert_eq!(
        uploaded["video_url"],
        format!("{},{}", TEST_BUCKET, expected_key)
    );

    // Exactly one object landed in the store, under the aspect-bucketed key.
    {
        let uploads = app.objects.uploads.lock().unwrap();
        assert_eq!(
            uploads.as_slice(),
            &[(
                TEST_BUCKET.to_string(),
                expected_key.clone(),
                "video/mp4".to_string()
            )]
        );
    }

    // No temp files left behind.
    assert!(app.spool_entries().is_empty());

    // A read resolves the reference to a signed URL with the 12h window.
    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", bearer)
        .await;
    assert_eq!(response.status_code(), 200);
    let fetched: serde_json::Value = response.json();
    assert_eq!(
        fetched["video_url"],
        format!(
            "https://cdn.test/{}/{}?expires=43200",
            TEST_BUCKET, expected_key
        )
    );
}

#[tokio::test]
async fn test_upload_video_wrong_media_type_is_rejected() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "video",
        Part::bytes(b"png bytes".to_vec())
            .file_name("image.png")
            .mime_type("image/png"),
    );

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 400);
    assert!(app.objects.uploads.lock().unwrap().is_empty());
    assert!(app.spool_entries().is_empty());
}

#[tokio::test]
async fn test_upload_video_missing_field_is_rejected() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"mp4 bytes".to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_upload_video_non_owner_is_forbidden() {
    let app = setup_test_app().await;
    let video = app.seed_video(Uuid::new_v4()).await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", app.bearer_for(Uuid::new_v4()))
        .multipart(mp4_form(b"fake mp4 payload"))
        .await;
    assert_eq!(response.status_code(), 403);
    assert!(app.objects.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_video_unknown_id_is_not_found() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", Uuid::new_v4()))
        .add_header("Authorization", app.bearer_for(Uuid::new_v4()))
        .multipart(mp4_form(b"fake mp4 payload"))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_remux_failure_is_internal_and_leaves_no_files() {
    let app = setup_failing_remux_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .post(&format!("/api/videos/{}/video", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .multipart(mp4_form(b"fake mp4 payload"))
        .await;
    assert_eq!(response.status_code(), 500);

    // The buffered temp file is removed and the store was never called.
    assert!(app.spool_entries().is_empty());
    assert!(app.objects.uploads.lock().unwrap().is_empty());

    // The record still has no video reference.
    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .await;
    let fetched: serde_json::Value = response.json();
    assert!(fetched["video_url"].is_null());
}

#[tokio::test]
async fn test_malformed_stored_reference_passes_through_unsigned() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let mut video = app.seed_video(owner).await;

    video.video_ref = Some("no-comma-here".to_string());
    use reelvault_db::VideoStore;
    app.videos.update(&video).await.unwrap();

    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .await;
    assert_eq!(response.status_code(), 200);
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["video_url"], "no-comma-here");
}

#[tokio::test]
async fn test_upload_thumbnail_saves_asset() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        Part::bytes(b"png bytes".to_vec())
            .file_name("thumb.png")
            .mime_type("image/png"),
    );

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 200);

    let updated: serde_json::Value = response.json();
    let thumbnail_url = updated["thumbnail_url"].as_str().unwrap();
    assert!(thumbnail_url.starts_with("/assets/"));
    assert!(thumbnail_url.ends_with(".png"));

    // The file really exists under the assets root.
    let filename = thumbnail_url.strip_prefix("/assets/").unwrap();
    let on_disk = std::fs::read(app.assets_path().join(filename)).unwrap();
    assert_eq!(on_disk, b"png bytes");

    // And it is served back publicly.
    let response = app.client().get(thumbnail_url).await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_upload_thumbnail_rejects_non_image() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.seed_video(owner).await;

    let form = MultipartForm::new().add_part(
        "thumbnail",
        Part::bytes(b"mp4 bytes".to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );

    let response = app
        .client()
        .post(&format!("/api/videos/{}/thumbnail", video.id))
        .add_header("Authorization", app.bearer_for(owner))
        .multipart(form)
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_delete_video() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let bearer = app.bearer_for(owner);
    let video = app.seed_video(owner).await;

    let response = app
        .client()
        .delete(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", bearer.clone())
        .await;
    assert_eq!(response.status_code(), 204);

    let response = app
        .client()
        .get(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", bearer)
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_delete_video_non_owner_is_forbidden() {
    let app = setup_test_app().await;
    let video = app.seed_video(Uuid::new_v4()).await;

    let response = app
        .client()
        .delete(&format!("/api/videos/{}", video.id))
        .add_header("Authorization", app.bearer_for(Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), 403);
}
