use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    let collection = get(handler::list_directors).post(handler::create_director);

    Router::new()
        .route("/directors", collection.clone())
        .route("/directors/", collection)
        .route(
            "/directors/{id}",
            get(handler::get_director)
                .put(handler::update_director)
                .delete(handler::delete_director),
        )
}
