use serde::Deserialize;
use sqlx::FromRow;
use utoipa::IntoParams;

#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// A movie row joined with the names of the director and genre it points
/// at. A name is `None` when the reference is unset or dangling.
#[derive(Debug, Clone, FromRow)]
pub struct MovieWithRelations {
    #[sqlx(flatten)]
    pub movie: Movie,
    pub director_name: Option<String>,
    pub genre_name: Option<String>,
}

/// Optional filters for the movie list. Filters that are present combine
/// with AND.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieFilter {
    /// Only movies by this director
    pub director_id: Option<i64>,
    /// Only movies of this genre
    pub genre_id: Option<i64>,
}
