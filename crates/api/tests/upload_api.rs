//! HTTP-level tests for the photo upload form at `/upload`.

mod common;

use axum::http::StatusCode;
use common::{body_string, build_test_app, get, post_form, post_multipart, Part};

const PLACEHOLDER: &str = "Photo analysis feature coming soon.";

#[tokio::test]
async fn get_renders_upload_form() {
    let app = build_test_app();
    let response = get(app.router, "/upload").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("enctype=\"multipart/form-data\""));
    assert!(html.contains("name=\"photo\""));
}

#[tokio::test]
async fn upload_saves_file_under_original_name() {
    let app = build_test_app();
    let bytes: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";
    let response = post_multipart(
        app.router,
        "/upload",
        &[Part {
            name: "photo",
            filename: Some("marksheet scan.png"),
            data: bytes,
        }],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(PLACEHOLDER));

    let saved = std::fs::read(app.upload_dir.path().join("marksheet scan.png"))
        .expect("uploaded file should exist");
    assert_eq!(saved, bytes);
}

#[tokio::test]
async fn upload_with_same_name_overwrites() {
    let app = build_test_app();
    for contents in [&b"first"[..], &b"second"[..]] {
        let response = post_multipart(
            app.router.clone(),
            "/upload",
            &[Part {
                name: "photo",
                filename: Some("photo.jpg"),
                data: contents,
            }],
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let saved = std::fs::read(app.upload_dir.path().join("photo.jpg")).unwrap();
    assert_eq!(saved, b"second");
}

#[tokio::test]
async fn other_fields_are_ignored() {
    let app = build_test_app();
    let response = post_multipart(
        app.router,
        "/upload",
        &[
            Part {
                name: "comment",
                filename: None,
                data: b"hello",
            },
            Part {
                name: "photo",
                filename: Some("a.jpg"),
                data: b"jpeg",
            },
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.upload_dir.path().join("a.jpg").exists());
}

#[tokio::test]
async fn missing_photo_part_returns_400() {
    let app = build_test_app();
    let response = post_multipart(
        app.router,
        "/upload",
        &[Part {
            name: "other",
            filename: Some("a.jpg"),
            data: b"jpeg",
        }],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file part");
}

#[tokio::test]
async fn photo_without_filename_counts_as_missing() {
    let app = build_test_app();
    let response = post_multipart(
        app.router,
        "/upload",
        &[Part {
            name: "photo",
            filename: None,
            data: b"text value",
        }],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file part");
}

#[tokio::test]
async fn empty_filename_returns_400() {
    let app = build_test_app();
    let response = post_multipart(
        app.router,
        "/upload",
        &[Part {
            name: "photo",
            filename: Some(""),
            data: b"",
        }],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No selected file");

    let entries = std::fs::read_dir(app.upload_dir.path()).unwrap().count();
    assert_eq!(entries, 0);
}

#[tokio::test]
async fn urlencoded_body_counts_as_missing_part() {
    let app = build_test_app();
    let response = post_form(app.router, "/upload", &[("x", "1")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file part");
}

#[tokio::test]
async fn empty_multipart_body_counts_as_missing_part() {
    let app = build_test_app();
    let response = post_multipart(app.router, "/upload", &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file part");
}
