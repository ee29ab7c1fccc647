use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::repository::GenreRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Genre";

pub struct GenreService;

impl GenreService {
    pub async fn create(state: AppState, req: CreateGenreRequest) -> AppResult<GenreResponse> {
        let genre = GenreRepository::create(&state.db, req.id, &req.name).await?;
        Ok(genre.into())
    }

    pub async fn find_all(state: AppState) -> AppResult<Vec<GenreResponse>> {
        let genres = GenreRepository::find_all(&state.db).await?;
        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<GenreResponse> {
        GenreRepository::find_by_id(&state.db, id)
            .await?
            .map(GenreResponse::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn update(
        state: AppState,
        id: i64,
        req: UpdateGenreRequest,
    ) -> AppResult<GenreResponse> {
        GenreRepository::update(&state.db, id, &req.name)
            .await?
            .map(GenreResponse::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if GenreRepository::delete(&state.db, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY, id))
        }
    }
}
