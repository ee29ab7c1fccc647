use utoipa::OpenApi;

use crate::modules::director::dto::{CreateDirectorRequest, DirectorResponse, UpdateDirectorRequest};
use crate::modules::genre::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use crate::modules::movie::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::director::handler::list_directors,
        crate::modules::director::handler::create_director,
        crate::modules::director::handler::get_director,
        crate::modules::director::handler::update_director,
        crate::modules::director::handler::delete_director,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
    ),
    components(
        schemas(
            CreateMovieRequest, UpdateMovieRequest, MovieResponse,
            CreateDirectorRequest, UpdateDirectorRequest, DirectorResponse,
            CreateGenreRequest, UpdateGenreRequest, GenreResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalogue"),
        (name = "Directors", description = "Movie directors"),
        (name = "Genres", description = "Movie genres")
    )
)]
pub struct ApiDoc;
