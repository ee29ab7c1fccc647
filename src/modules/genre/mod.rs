use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    let collection = get(handler::list_genres).post(handler::create_genre);

    Router::new()
        .route("/genres", collection.clone())
        .route("/genres/", collection)
        .route(
            "/genres/{id}",
            get(handler::get_genre)
                .put(handler::update_genre)
                .delete(handler::delete_genre),
        )
}
