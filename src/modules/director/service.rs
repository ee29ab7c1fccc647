use super::dto::{CreateDirectorRequest, DirectorResponse, UpdateDirectorRequest};
use super::repository::DirectorRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Director";

pub struct DirectorService;

impl DirectorService {
    pub async fn create(state: AppState, req: CreateDirectorRequest) -> AppResult<DirectorResponse> {
        let director = DirectorRepository::create(&state.db, req.id, &req.name).await?;
        Ok(director.into())
    }

    pub async fn find_all(state: AppState) -> AppResult<Vec<DirectorResponse>> {
        let directors = DirectorRepository::find_all(&state.db).await?;
        Ok(directors.into_iter().map(DirectorResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<DirectorResponse> {
        DirectorRepository::find_by_id(&state.db, id)
            .await?
            .map(DirectorResponse::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn update(
        state: AppState,
        id: i64,
        req: UpdateDirectorRequest,
    ) -> AppResult<DirectorResponse> {
        DirectorRepository::update(&state.db, id, &req.name)
            .await?
            .map(DirectorResponse::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if DirectorRepository::delete(&state.db, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY, id))
        }
    }
}
