use crate::common::error::AppResult;
use crate::common::extract::{AppJson, AppQuery};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::movie::dto::*;
use crate::modules::movie::model::MovieFilter;
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

#[utoipa::path(
    get,
    path = "/movies/",
    params(MovieFilter),
    responses(
        (status = 200, description = "List Movies", body = Vec<MovieResponse>),
        (status = 400, description = "Filter is not an integer")
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<MovieFilter>,
) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = MovieService::find_all(state, filter).await?;
    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/movies/",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie Created", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 409, description = "Identifier already in use")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieService::create(state, req).await?;
    info!(id = movie.id, title = %movie.title, "New movie added");

    Ok(ApiSuccess(
        ApiResponse::success(movie, "New movie added!"),
        StatusCode::CREATED,
    ))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Get Movie", body = MovieResponse),
        (status = 404, description = "Movie Not Found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MovieResponse>> {
    let movie = MovieService::find_by_id(state, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 204, description = "Movie Updated"),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 404, description = "Movie Not Found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(req): AppJson<UpdateMovieRequest>,
) -> AppResult<StatusCode> {
    MovieService::update(state, id, req).await?;
    info!("Movie #{id} updated!");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie Deleted"),
        (status = 404, description = "Movie Not Found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    MovieService::delete(state, id).await?;
    info!("Movie #{id} deleted successfully!");
    Ok(StatusCode::NO_CONTENT)
}
