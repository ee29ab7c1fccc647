use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::model::MovieWithRelations;

// --- REQUESTS ---

/// Body of `POST /movies/`. Field names are the `movie` column names.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// Body of `PUT /movies/{id}`. Every column is overwritten, so a field left
/// out of the body is stored as null.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieRequest {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

// --- RESPONSES ---

/// Wire form of a movie. `director` and `genre` carry the referenced
/// record's name next to the raw ids.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub genre: Option<String>,
    pub director_id: Option<i64>,
    pub director: Option<String>,
}

impl From<MovieWithRelations> for MovieResponse {
    fn from(row: MovieWithRelations) -> Self {
        let MovieWithRelations {
            movie,
            director_name,
            genre_name,
        } = row;

        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            trailer: movie.trailer,
            year: movie.year,
            rating: movie.rating,
            genre_id: movie.genre_id,
            genre: genre_name,
            director_id: movie.director_id,
            director: director_name,
        }
    }
}
