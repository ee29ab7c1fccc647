mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get};

#[tokio::test]
async fn health_returns_ok() {
    let app = common::build_test_app().await;
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn openapi_document_lists_resource_paths() {
    let app = common::build_test_app().await;
    let response = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let paths = json["paths"].as_object().expect("paths object");
    assert!(paths.contains_key("/movies/"));
    assert!(paths.contains_key("/movies/{id}"));
    assert!(paths.contains_key("/directors/{id}"));
    assert!(paths.contains_key("/genres/"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = common::build_test_app().await;
    let response = get(&app, "/actors/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
