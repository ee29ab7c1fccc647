use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::service::GenreService;
use crate::common::error::AppResult;
use crate::common::extract::AppJson;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres/",
    responses(
        (status = 200, description = "List of genres", body = Vec<GenreResponse>)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<GenreResponse>>> {
    let genres = GenreService::find_all(state).await?;
    Ok(Json(genres))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres/",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 409, description = "Identifier already in use")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGenreRequest>,
) -> AppResult<impl IntoResponse> {
    let genre = GenreService::create(state, payload).await?;
    info!(id = genre.id, "New genre added");

    Ok(ApiSuccess(
        ApiResponse::success(genre, "New genre added!"),
        StatusCode::CREATED,
    ))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = GenreResponse),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GenreResponse>> {
    let genre = GenreService::find_by_id(state, id).await?;
    Ok(Json(genre))
}

/// Replace a genre's fields
#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreRequest,
    responses(
        (status = 204, description = "Genre updated"),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateGenreRequest>,
) -> AppResult<StatusCode> {
    GenreService::update(state, id, payload).await?;
    info!("Genre #{id} updated successfully!");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    GenreService::delete(state, id).await?;
    info!("Genre #{id} deleted successfully!");
    Ok(StatusCode::NO_CONTENT)
}
