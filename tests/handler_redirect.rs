mod common;

use axum::http::StatusCode;
use common::FailingStore;
use keyed_redirect::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let store = common::seeded_store(&[("redirect1", "https://example.com/target")]);
    let server = common::make_server(store);

    let response = server.get("/redirect1").await;

    response.assert_status(StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keys_are_case_sensitive() {
    let store = common::seeded_store(&[("Abc", "https://example.com")]);
    let server = common::make_server(store);

    server.get("/Abc").await.assert_status(StatusCode::FOUND);
    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_not_found_serves_page() {
    let server = common::make_server(Arc::new(InMemoryMappingStore::new()));

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let expected = NotFoundPage::load(&common::public_dir());
    assert_eq!(response.text(), expected.body());
}

#[tokio::test]
async fn test_redirect_invalid_key() {
    let server = common::make_server(Arc::new(FailingStore));

    for path in ["/bad-key", "/bad_key", "/bad%20key", "/style.css"] {
        let response = server.get(path).await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Key must be alphanumeric");
    }
}

#[tokio::test]
async fn test_redirect_store_error() {
    let server = common::make_server(Arc::new(FailingStore));

    let response = server.get("/abc123").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Server error");
}

#[tokio::test]
async fn test_redirect_unencodable_stored_value() {
    // Written behind the service's back; the API would reject it
    let store = common::seeded_store(&[("raw", "https://example.com/\nInjected: yes")]);
    let server = common::make_server(store);

    let response = server.get("/raw").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redirect_is_public() {
    let store = common::seeded_store(&[("open", "https://example.com")]);
    let server = common::make_server(store);

    let response = server
        .get("/open")
        .add_header("Authorization", "wrong-key")
        .await;

    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_post_to_key_is_not_allowed() {
    let store = common::seeded_store(&[("abc", "https://example.com")]);
    let server = common::make_server(store);

    let response = server.post("/abc").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
