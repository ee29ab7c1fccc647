use super::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use super::model::MovieFilter;
use super::repository::{MovieFields, MovieRepository};
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Movie";

pub struct MovieService;

impl MovieService {
    pub async fn create(state: AppState, req: CreateMovieRequest) -> AppResult<MovieResponse> {
        let fields = MovieFields {
            title: &req.title,
            description: req.description.as_deref(),
            trailer: req.trailer.as_deref(),
            year: req.year,
            rating: req.rating,
            genre_id: req.genre_id,
            director_id: req.director_id,
        };
        let movie = MovieRepository::create(&state.db, req.id, fields).await?;

        // Re-read through the join so the response carries relation names.
        Self::find_by_id(state, movie.id).await
    }

    pub async fn find_all(state: AppState, filter: MovieFilter) -> AppResult<Vec<MovieResponse>> {
        let movies = MovieRepository::find_all(&state.db, filter).await?;
        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<MovieResponse> {
        MovieRepository::find_by_id(&state.db, id)
            .await?
            .map(MovieResponse::from)
            .ok_or_else(|| AppError::not_found(ENTITY, id))
    }

    pub async fn update(state: AppState, id: i64, req: UpdateMovieRequest) -> AppResult<()> {
        let fields = MovieFields {
            title: &req.title,
            description: req.description.as_deref(),
            trailer: req.trailer.as_deref(),
            year: req.year,
            rating: req.rating,
            genre_id: req.genre_id,
            director_id: req.director_id,
        };

        match MovieRepository::update(&state.db, id, fields).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(ENTITY, id)),
        }
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if MovieRepository::delete(&state.db, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY, id))
        }
    }
}
