use super::dto::{CreateDirectorRequest, DirectorResponse, UpdateDirectorRequest};
use super::service::DirectorService;
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

/// List all directors
#[utoipa::path(
    get,
    path = "/directors/",
    responses(
        (status = 200, description = "List of directors", body = Vec<DirectorResponse>)
    ),
    tag = "Directors"
)]
pub async fn list_directors(State(state): State<AppState>) -> AppResult<Json<Vec<DirectorResponse>>> {
    let directors = DirectorService::find_all(state).await?;
    Ok(Json(directors))
}

/// Create a new director
#[utoipa::path(
    post,
    path = "/directors/",
    request_body = CreateDirectorRequest,
    responses(
        (status = 201, description = "Director created", body = ApiResponse<DirectorResponse>),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 409, description = "Identifier already in use")
    ),
    tag = "Directors"
)]
pub async fn create_director(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateDirectorRequest>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorService::create(state, payload).await?;
    info!(id = director.id, "New director added");

    Ok(ApiSuccess(
        ApiResponse::success(director, "New director added!"),
        StatusCode::CREATED,
    ))
}

/// Get director by ID
#[utoipa::path(
    get,
    path = "/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    responses(
        (status = 200, description = "Director details", body = DirectorResponse),
        (status = 404, description = "Director not found")
    ),
    tag = "Directors"
)]
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DirectorResponse>> {
    let director = DirectorService::find_by_id(state, id).await?;
    Ok(Json(director))
}

/// Replace a director's fields
#[utoipa::path(
    put,
    path = "/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    request_body = UpdateDirectorRequest,
    responses(
        (status = 204, description = "Director updated"),
        (status = 400, description = "Unknown or malformed fields"),
        (status = 404, description = "Director not found")
    ),
    tag = "Directors"
)]
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateDirectorRequest>,
) -> AppResult<StatusCode> {
    DirectorService::update(state, id, payload).await?;
    info!("Director #{id} updated successfully!");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete director
#[utoipa::path(
    delete,
    path = "/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 404, description = "Director not found")
    ),
    tag = "Directors"
)]
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    DirectorService::delete(state, id).await?;
    info!("Director #{id} deleted successfully!");
    Ok(StatusCode::NO_CONTENT)
}
