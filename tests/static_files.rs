mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::FailingStore;
use keyed_redirect::routes::{app_router, normalize};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_index_is_served() {
    let server = common::make_server(Arc::new(FailingStore));

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Keyed Redirect"));
}

#[tokio::test]
async fn test_static_file_is_served_before_redirect() {
    let server = common::make_server(Arc::new(FailingStore));

    let response = server.get("/index.html").await;

    response.assert_status_ok();
    assert!(response.text().contains("<html"));
}

#[tokio::test]
async fn test_multi_segment_path_is_not_found() {
    let store = common::seeded_store(&[("abc", "https://example.com")]);
    let server = common::make_server(store);

    server.get("/abc/def").await.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let store = common::seeded_store(&[("abc123", "https://example.com")]);
    let app = normalize(app_router(common::create_test_state(store), common::public_dir()));

    let request = Request::builder()
        .uri("/abc123/")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com"
    );
}
