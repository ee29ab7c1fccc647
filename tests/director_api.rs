mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_directors() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/directors/", json!({"name": "Nolan"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "New director added!");
    assert_eq!(json["data"], json!({"id": 1, "name": "Nolan"}));

    create(&app, "/directors", json!({"name": "Villeneuve"})).await;

    let list = body_json(get(&app, "/directors/").await).await;
    assert_eq!(
        list,
        json!([{"id": 1, "name": "Nolan"}, {"id": 2, "name": "Villeneuve"}])
    );
}

#[tokio::test]
async fn test_get_director() {
    let app = common::build_test_app().await;
    let id = create(&app, "/directors/", json!({"name": "Nolan"})).await;

    let response = get(&app, &format!("/directors/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id, "name": "Nolan"}));
}

#[tokio::test]
async fn test_get_nonexistent_director_returns_404() {
    let app = common::build_test_app().await;
    let response = get(&app, "/directors/5").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Director #5 not found");
}

#[tokio::test]
async fn test_create_director_with_unknown_field_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(&app, "/directors/", json!({"name": "Nolan", "born": 1970})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_director() {
    let app = common::build_test_app().await;
    let id = create(&app, "/directors/", json!({"name": "Nolan"})).await;

    let response = put_json(&app, &format!("/directors/{id}"), json!({"name": "Christopher Nolan"})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(&app, &format!("/directors/{id}")).await).await;
    assert_eq!(json["name"], "Christopher Nolan");
}

#[tokio::test]
async fn test_update_nonexistent_director_returns_404() {
    let app = common::build_test_app().await;
    let response = put_json(&app, "/directors/9", json!({"name": "Nobody"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_director() {
    let app = common::build_test_app().await;
    let id = create(&app, "/directors/", json!({"name": "Nolan"})).await;

    assert_eq!(delete(&app, &format!("/directors/{id}")).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/directors/{id}")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, &format!("/directors/{id}")).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_director_leaves_movie_reference_dangling() {
    let app = common::build_test_app().await;
    let director = create(&app, "/directors/", json!({"name": "Nolan"})).await;
    let movie = create(&app, "/movies/", json!({"title": "Inception", "director_id": director})).await;

    assert_eq!(delete(&app, &format!("/directors/{director}")).await.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(&app, &format!("/movies/{movie}")).await).await;
    assert_eq!(json["director_id"], director);
    assert!(json["director"].is_null());

    let filtered = body_json(get(&app, &format!("/movies/?director_id={director}")).await).await;
    assert_eq!(filtered.as_array().unwrap().len(), 1);
}
