//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every catalogue endpoint, the health checks, and the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported via
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ActorInputSchema, ActorSchema, CinemaHallInputSchema, CinemaHallSchema, ErrorCodeSchema,
    ErrorSchema, GenreInputSchema, GenreSchema, MovieInputSchema, MovieSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinema catalogue API",
        description = "CRUD access to movies, genres, actors and cinema halls."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movies::list_movies,
        crate::inbound::http::movies::create_movie,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::replace_movie,
        crate::inbound::http::movies::delete_movie,
        crate::inbound::http::genres::list_genres,
        crate::inbound::http::genres::create_genre,
        crate::inbound::http::genres::get_genre,
        crate::inbound::http::genres::replace_genre,
        crate::inbound::http::genres::patch_genre,
        crate::inbound::http::genres::delete_genre,
        crate::inbound::http::actors::list_actors,
        crate::inbound::http::actors::create_actor,
        crate::inbound::http::actors::get_actor,
        crate::inbound::http::actors::replace_actor,
        crate::inbound::http::actors::delete_actor,
        crate::inbound::http::cinema_halls::list_cinema_halls,
        crate::inbound::http::cinema_halls::create_cinema_hall,
        crate::inbound::http::cinema_halls::get_cinema_hall,
        crate::inbound::http::cinema_halls::replace_cinema_hall,
        crate::inbound::http::cinema_halls::patch_cinema_hall,
        crate::inbound::http::cinema_halls::delete_cinema_hall,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        GenreSchema,
        GenreInputSchema,
        ActorSchema,
        ActorInputSchema,
        CinemaHallSchema,
        CinemaHallInputSchema,
        MovieSchema,
        MovieInputSchema,
    )),
    tags(
        (name = "movies", description = "Films and their genre and actor references"),
        (name = "genres", description = "Film genres"),
        (name = "actors", description = "Performers"),
        (name = "cinema-halls", description = "Screening rooms"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
