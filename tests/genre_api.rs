mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_genre_crud_cycle() {
    let app = common::build_test_app().await;

    let response = post_json(&app, "/genres/", json!({"name": "Drama"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "New genre added!");
    let id = json["data"]["id"].as_i64().unwrap();

    let json = body_json(get(&app, &format!("/genres/{id}")).await).await;
    assert_eq!(json["name"], "Drama");

    let response = put_json(&app, &format!("/genres/{id}"), json!({"name": "Thriller"})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = body_json(get(&app, "/genres/").await).await;
    assert_eq!(list, json!([{"id": id, "name": "Thriller"}]));

    assert_eq!(delete(&app, &format!("/genres/{id}")).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(body_json(get(&app, "/genres").await).await, json!([]));
}

#[tokio::test]
async fn test_genre_missing_id_returns_404() {
    let app = common::build_test_app().await;

    let response = get(&app, "/genres/4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Genre #4 not found");

    let response = put_json(&app, "/genres/4", json!({"name": "Western"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, "/genres/4").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_genre_requires_name() {
    let app = common::build_test_app().await;
    let id = create(&app, "/genres/", json!({"name": "Drama"})).await;

    let response = put_json(&app, &format!("/genres/{id}"), json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "error");
}

#[tokio::test]
async fn test_genre_name_appears_on_movies() {
    let app = common::build_test_app().await;
    let genre = create(&app, "/genres/", json!({"name": "Sci-Fi"})).await;
    create(&app, "/movies/", json!({"title": "Arrival", "genre_id": genre})).await;

    let list = body_json(get(&app, &format!("/movies/?genre_id={genre}")).await).await;
    assert_eq!(list[0]["genre"], "Sci-Fi");
    assert_eq!(list[0]["genre_id"], genre);
}
